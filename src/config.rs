use std::{
    env,
    fmt::Display,
    str::FromStr,
    time::Duration,
};

use tracing::{
    info,
    warn,
};

use crate::core::pagination::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_NEWS_BATCH: u32 = 300;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub page_size: u32,
    pub news_batch: u32,
    pub referrer: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            news_batch: DEFAULT_NEWS_BATCH,
            referrer: String::new(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: try_load(&lookup, "LEXICARD_API_BASE", defaults.api_base),
            page_size: positive(
                try_load(&lookup, "LEXICARD_PAGE_SIZE", defaults.page_size),
                DEFAULT_PAGE_SIZE,
            ),
            news_batch: positive(
                try_load(&lookup, "LEXICARD_NEWS_BATCH", defaults.news_batch),
                DEFAULT_NEWS_BATCH,
            ),
            referrer: lookup("LEXICARD_REFERRER").unwrap_or(defaults.referrer),
            http_timeout: Duration::from_secs(positive(
                try_load(&lookup, "LEXICARD_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS),
                DEFAULT_HTTP_TIMEOUT_SECS,
            )),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}

fn positive<T: PartialEq + Default>(value: T, fallback: T) -> T {
    if value == T::default() {
        fallback
    } else {
        value
    }
}
