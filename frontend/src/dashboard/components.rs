use crate::dashboard::pagination::PageWindow;
use crate::dashboard::sort::{SortColumn, SortDirection, SortState};
use crate::dashboard::state::{
    ChannelHeader, Notice, ViewState, EMPTY_MESSAGE, ERROR_MESSAGE, SIGNED_OUT_MESSAGE,
};
use crate::dashboard::view_model::VideoRow;
use crate::utils::format_number;
use yew::prelude::*;

const COLUMN_COUNT: usize = 8;

#[derive(Properties, PartialEq)]
pub struct ChannelInfoProps {
    pub channel: ChannelHeader,
    pub app_name: String,
    pub on_sign_in: Callback<MouseEvent>,
    pub on_logout: Callback<MouseEvent>,
}

#[function_component(ChannelInfo)]
pub fn channel_info(props: &ChannelInfoProps) -> Html {
    match &props.channel {
        ChannelHeader::Checking => html! {
            <div class="text-sm opacity-75">{"Checking sign-in..."}</div>
        },
        ChannelHeader::SignedIn {
            title,
            thumbnail,
            subscriber_count,
        } => html! {
            <div class="flex items-center space-x-2">
                {
                    if let Some(src) = thumbnail {
                        html! { <img class="w-8 h-8 rounded-full" src={src.clone()} alt={title.clone()} /> }
                    } else {
                        html! {}
                    }
                }
                <div>
                    <div class="font-medium">{title}</div>
                    {
                        if let Some(count) = subscriber_count {
                            html! {
                                <div class="text-xs opacity-75">
                                    {format!("{} subscribers", format_number(*count))}
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <button
                    onclick={props.on_logout.clone()}
                    class="px-3 py-1 text-xs bg-white bg-opacity-20 rounded hover:bg-opacity-30 transition-colors"
                >
                    {"Sign Out"}
                </button>
            </div>
        },
        ChannelHeader::SignedOut { title } => html! {
            <div class="flex items-center space-x-2">
                <div class="text-sm opacity-75">
                    {title.clone().unwrap_or_else(|| props.app_name.clone())}
                </div>
                <button
                    onclick={props.on_sign_in.clone()}
                    class="px-3 py-1 text-xs bg-white bg-opacity-20 rounded hover:bg-opacity-30 transition-colors"
                >
                    {"Sign In"}
                </button>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeBannerProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<MouseEvent>,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeBannerProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };
    let classes = match notice {
        Notice::RateLimited(_) => "bg-yellow-100 border border-yellow-400 text-yellow-800",
        Notice::Error(_) => "bg-red-100 border border-red-400 text-red-700",
    };
    html! {
        <div class={classes!(classes, "px-4", "py-3", "rounded", "mb-4", "flex", "justify-between")}>
            <span>{notice.text()}</span>
            <button onclick={props.on_dismiss.clone()} class="ml-4 font-bold">{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SortHeaderProps {
    pub column: SortColumn,
    pub sort: SortState,
    pub on_sort: Callback<SortColumn>,
}

#[function_component(SortHeader)]
pub fn sort_header(props: &SortHeaderProps) -> Html {
    let column = props.column;
    let onclick = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |_: MouseEvent| on_sort.emit(column))
    };
    let icon = match props.sort.direction_for(column) {
        Some(SortDirection::Asc) => "fas fa-sort-up ml-1 text-blue-600",
        Some(SortDirection::Desc) => "fas fa-sort-down ml-1 text-blue-600",
        None => "fas fa-sort ml-1 text-gray-400",
    };

    html! {
        <th
            onclick={onclick}
            class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider cursor-pointer hover:bg-gray-100"
        >
            {column.display_name()}
            <i id={format!("sort-{}", column.key())} class={icon}></i>
        </th>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoTableProps {
    pub view: ViewState,
    pub rows: Vec<VideoRow>,
    pub sort: SortState,
    pub on_sort: Callback<SortColumn>,
    pub on_retry: Callback<MouseEvent>,
    pub on_sign_in: Callback<MouseEvent>,
}

#[function_component(VideoTable)]
pub fn video_table(props: &VideoTableProps) -> Html {
    let body = match &props.view {
        ViewState::Unauthenticated => message_row(html! {
            <>
                <p class="text-gray-500 mb-2">{SIGNED_OUT_MESSAGE}</p>
                <button
                    onclick={props.on_sign_in.clone()}
                    class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700"
                >
                    {"Sign in with Google"}
                </button>
            </>
        }),
        ViewState::Loading => message_row(html! {
            <p class="text-gray-500">{"Loading videos..."}</p>
        }),
        ViewState::Empty => message_row(html! {
            <>
                <p class="text-gray-500 mb-2">{EMPTY_MESSAGE}</p>
                <button onclick={props.on_retry.clone()} class="text-blue-600 hover:underline">
                    {"Try again"}
                </button>
            </>
        }),
        ViewState::Error(detail) => message_row(html! {
            <>
                <p class="text-red-500 mb-2" title={detail.clone()}>{ERROR_MESSAGE}</p>
                <button onclick={props.on_retry.clone()} class="text-blue-600 hover:underline">
                    {"Retry"}
                </button>
            </>
        }),
        ViewState::Loaded => props.rows.iter().map(video_row).collect::<Html>(),
    };

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-300">
                <thead class="bg-gray-50">
                    <tr>
                        {
                            for SortColumn::all_variants().into_iter().map(|column| html! {
                                <SortHeader
                                    column={column}
                                    sort={props.sort}
                                    on_sort={props.on_sort.clone()}
                                />
                            })
                        }
                    </tr>
                </thead>
                <tbody id="videos-table" class="bg-white divide-y divide-gray-200">
                    {body}
                </tbody>
            </table>
        </div>
    }
}

fn message_row(content: Html) -> Html {
    html! {
        <tr>
            <td colspan={COLUMN_COUNT.to_string()} class="px-6 py-4 text-center">
                {content}
            </td>
        </tr>
    }
}

fn video_row(row: &VideoRow) -> Html {
    html! {
        <tr class="hover:bg-gray-50">
            <td class="px-6 py-4">
                <div class="flex items-start">
                    <img class="h-10 w-16 object-cover rounded flex-shrink-0" src={row.thumbnail.clone()} alt={row.title.clone()} />
                    <div class="ml-4 min-w-0 flex-1">
                        <div class="text-sm font-medium text-gray-900 leading-tight line-clamp-2">{&row.title}</div>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&row.published}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&row.views}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&row.likes}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&row.length}</td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&row.watch_time}</td>
            <td
                class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", row.watch_quality.css_class())}
                title={row.watch_quality.label()}
            >
                {&row.watched}
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&row.subs_gained}</td>
        </tr>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub window: Option<PageWindow>,
    pub loading: bool,
    pub on_prev: Callback<MouseEvent>,
    pub on_next: Callback<MouseEvent>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let Some(window) = props.window else {
        return html! {};
    };

    html! {
        <div id="pagination-controls" class="mt-6 flex items-center justify-between">
            <span class="text-sm text-gray-700">{window.showing()}</span>
            <div class="flex items-center gap-2">
                <button
                    id="prev-page"
                    onclick={props.on_prev.clone()}
                    disabled={props.loading || window.prev_page().is_none()}
                    class="px-4 py-2 text-sm bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                >
                    {"Previous"}
                </button>
                <span id="page-info" class="px-4 py-2 text-sm">{window.page_info()}</span>
                <button
                    id="next-page"
                    onclick={props.on_next.clone()}
                    disabled={props.loading || window.next_page().is_none()}
                    class="px-4 py-2 text-sm bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBarProps {
    pub count_label: String,
    pub last_updated: Option<String>,
    pub cached: bool,
    pub refresh_label: String,
    pub refresh_enabled: bool,
    pub throttled: bool,
    pub on_refresh: Callback<MouseEvent>,
}

#[function_component(StatusBar)]
pub fn status_bar(props: &StatusBarProps) -> Html {
    html! {
        <div class="flex justify-between items-center mb-4">
            <div>
                <p id="video-count" class="text-sm text-gray-600">{&props.count_label}</p>
                {
                    if let Some(date) = &props.last_updated {
                        html! {
                            <p id="last-updated" class="text-xs text-gray-400">
                                {format!("Last Updated: {date}")}
                                {
                                    if props.cached {
                                        html! { <span class="ml-2 px-1 bg-gray-100 rounded">{"cached"}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button
                id="refresh-button"
                onclick={props.on_refresh.clone()}
                disabled={!props.refresh_enabled}
                class={classes!(
                    "bg-blue-600", "text-white", "px-4", "py-2", "rounded", "hover:bg-blue-700",
                    "disabled:opacity-50", props.throttled.then_some("opacity-75")
                )}
            >
                {&props.refresh_label}
            </button>
        </div>
    }
}
