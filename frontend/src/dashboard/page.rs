use crate::config::DashboardConfig;
use crate::dashboard::api::{fetch_channel, fetch_videos, logout, sign_in_url};
use crate::dashboard::components::{
    ChannelInfo, NoticeBanner, PaginationControls, StatusBar, VideoTable,
};
use crate::dashboard::state::{DashboardState, Effect, Msg};
use gloo_timers::callback::Interval;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

const TICK_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub config: DashboardConfig,
}

/// Feeds messages into the shared [`DashboardState`] and runs the effects it returns.
#[derive(Clone)]
struct Dispatcher {
    state: Rc<RefCell<DashboardState>>,
    redraw: UseForceUpdateHandle,
    backend_url: Rc<str>,
}

impl Dispatcher {
    fn send(&self, msg: Msg) {
        let is_tick = matches!(msg, Msg::Tick { .. });
        let (effects, changed) = {
            let mut state = self.state.borrow_mut();
            let before = is_tick.then(|| (state.refresh_label(), state.notice().cloned()));
            let effects = state.update(msg);
            // Ticks only matter when they change what the refresh area shows.
            let changed = match before {
                Some(before) => before != (state.refresh_label(), state.notice().cloned()),
                None => true,
            };
            (effects, changed)
        };

        if changed {
            self.redraw.force_update();
        }
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect) {
        let dispatcher = self.clone();
        match effect {
            Effect::FetchChannel => {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_channel(&dispatcher.backend_url).await;
                    dispatcher.send(Msg::ChannelLoaded(result));
                });
            }
            Effect::FetchVideos { seq, query } => {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = fetch_videos(&dispatcher.backend_url, &query).await;
                    dispatcher.send(Msg::VideosLoaded { seq, result });
                });
            }
            Effect::Logout => {
                wasm_bindgen_futures::spawn_local(async move {
                    let result = logout(&dispatcher.backend_url).await;
                    dispatcher.send(Msg::LoggedOut(result));
                });
            }
            Effect::NavigateToSignIn => {
                let url = sign_in_url(&self.backend_url);
                let navigated = web_sys::window().map(|window| window.location().set_href(&url));
                if !matches!(navigated, Some(Ok(()))) {
                    log::error!("Could not navigate to {url}");
                }
            }
        }
    }

    fn callback<E: 'static>(&self, to_msg: impl Fn(E) -> Msg + 'static) -> Callback<E> {
        let dispatcher = self.clone();
        Callback::from(move |event: E| dispatcher.send(to_msg(event)))
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    let config = &props.config;
    let state = {
        let config = config.clone();
        use_mut_ref(move || DashboardState::new(&config))
    };
    let dispatcher = Dispatcher {
        state,
        redraw: use_force_update(),
        backend_url: Rc::from(config.backend_url.as_str()),
    };

    // Check the session on mount and drive the cooldown label once a second
    {
        let dispatcher = dispatcher.clone();
        use_effect_with((), move |_| {
            dispatcher.send(Msg::Mounted);
            let ticker = Interval::new(TICK_MS, move || {
                dispatcher.send(Msg::Tick { now: now_ms() })
            });
            move || drop(ticker)
        });
    }

    let on_sign_in = dispatcher.callback(|_: MouseEvent| Msg::SignInClicked);
    let on_logout = dispatcher.callback(|_: MouseEvent| Msg::LogoutClicked);
    let on_refresh = dispatcher.callback(|_: MouseEvent| Msg::RefreshClicked { now: now_ms() });
    let on_retry = dispatcher.callback(|_: MouseEvent| Msg::RetryClicked);
    let on_dismiss = dispatcher.callback(|_: MouseEvent| Msg::DismissNotice);
    let on_sort = dispatcher.callback(Msg::SortClicked);
    let on_prev = dispatcher.callback(|_: MouseEvent| Msg::PrevPage);
    let on_next = dispatcher.callback(|_: MouseEvent| Msg::NextPage);

    let state = dispatcher.state.borrow();

    let page = html! {
        <div class="min-h-screen bg-gray-100">
            <header class="bg-red-600 text-white">
                <div class="max-w-7xl mx-auto px-4 py-4 flex justify-between items-center">
                    <h1 class="text-2xl font-bold">{&config.app_name}</h1>
                    <div id="channel-info">
                        <ChannelInfo
                            channel={state.channel().clone()}
                            app_name={config.app_name.clone()}
                            on_sign_in={on_sign_in.clone()}
                            on_logout={on_logout}
                        />
                    </div>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 py-8">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <NoticeBanner notice={state.notice().cloned()} on_dismiss={on_dismiss} />

                    <StatusBar
                        count_label={state.video_count_label()}
                        last_updated={state.last_updated().map(str::to_string)}
                        cached={state.is_cached()}
                        refresh_label={state.refresh_label()}
                        refresh_enabled={state.refresh_enabled()}
                        throttled={!state.can_refresh()}
                        on_refresh={on_refresh}
                    />

                    <VideoTable
                        view={state.view().clone()}
                        rows={state.rows()}
                        sort={state.sort()}
                        on_sort={on_sort}
                        on_retry={on_retry}
                        on_sign_in={on_sign_in}
                    />

                    <PaginationControls
                        window={state.page_window()}
                        loading={state.is_loading()}
                        on_prev={on_prev}
                        on_next={on_next}
                    />
                </div>
            </main>
        </div>
    };
    drop(state);
    page
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
