use crate::env_variable_utils::{get_app_name, get_env_var, BACKEND_URL};

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_REFRESH_COOLDOWN_SECONDS: u64 = 30;
pub const DEFAULT_MAX_REFRESHES_PER_HOUR: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub backend_url: String,
    pub app_name: String,
    pub per_page: u32,
    pub refresh_cooldown_seconds: u64,
    pub max_refreshes_per_hour: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            app_name: "YouTube Dashboard".to_string(),
            per_page: DEFAULT_PER_PAGE,
            refresh_cooldown_seconds: DEFAULT_REFRESH_COOLDOWN_SECONDS,
            max_refreshes_per_hour: DEFAULT_MAX_REFRESHES_PER_HOUR,
        }
    }
}

impl DashboardConfig {
    /// Reads `window.ENV_CONFIG`, falling back to defaults per key.
    pub fn from_env() -> Self {
        Self::from_lookup(BACKEND_URL.clone(), get_app_name(), get_env_var)
    }

    pub fn from_lookup<F>(backend_url: String, app_name: String, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            backend_url,
            app_name,
            per_page: positive(&lookup, "PER_PAGE", defaults.per_page),
            refresh_cooldown_seconds: parsed(
                &lookup,
                "REFRESH_COOLDOWN_SECONDS",
                defaults.refresh_cooldown_seconds,
            ),
            max_refreshes_per_hour: positive(
                &lookup,
                "MAX_REFRESHES_PER_HOUR",
                defaults.max_refreshes_per_hour,
            ),
        }
    }

    pub fn refresh_cooldown_ms(&self) -> u64 {
        self.refresh_cooldown_seconds.saturating_mul(1000)
    }
}

fn parsed<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("Ignoring invalid {key}={raw:?}");
            default
        }),
        None => default,
    }
}

fn positive<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + PartialOrd + Default,
{
    let value = parsed(lookup, key, default);
    if value > T::default() {
        value
    } else {
        log::warn!("{key} must be positive, using default");
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_with(pairs: &[(&str, &str)]) -> DashboardConfig {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(String::new(), "Test".to_string(), move |key| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        })
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.per_page, 10);
        assert_eq!(config.refresh_cooldown_ms(), 30_000);
        assert_eq!(config.max_refreshes_per_hour, 10);
    }

    #[test]
    fn numeric_overrides_are_parsed() {
        let config = config_with(&[
            ("PER_PAGE", "25"),
            ("REFRESH_COOLDOWN_SECONDS", "5"),
            ("MAX_REFRESHES_PER_HOUR", "3"),
        ]);
        assert_eq!(config.per_page, 25);
        assert_eq!(config.refresh_cooldown_seconds, 5);
        assert_eq!(config.max_refreshes_per_hour, 3);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_with(&[("PER_PAGE", "0"), ("MAX_REFRESHES_PER_HOUR", "lots")]);
        assert_eq!(config.per_page, 10);
        assert_eq!(config.max_refreshes_per_hour, 10);
    }
}
