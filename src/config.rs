use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration, read from `PRODUCT_FINDER_*` environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub backend_url: String,
    pub reveal_interval: Duration,
    /// `None` waits on the backend indefinitely.
    pub request_timeout: Option<Duration>,
    pub storage_dir: Option<PathBuf>,
    pub canned_responses_path: Option<PathBuf>,
    pub log_level: tracing::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            storage_dir: None,
            canned_responses_path: None,
            log_level: tracing::Level::INFO,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset or unparsable values keep
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let backend_url = get("PRODUCT_FINDER_BACKEND_URL").unwrap_or(defaults.backend_url);
        let reveal_interval = get("PRODUCT_FINDER_REVEAL_INTERVAL_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.reveal_interval);
        let request_timeout = match get("PRODUCT_FINDER_REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
        {
            Some(0) => None,
            Some(secs) => Some(Duration::from_secs(secs)),
            None => defaults.request_timeout,
        };
        let storage_dir = get("PRODUCT_FINDER_STORAGE_DIR").map(PathBuf::from);
        let canned_responses_path = get("PRODUCT_FINDER_CANNED_RESPONSES").map(PathBuf::from);
        let log_level = get("PRODUCT_FINDER_LOG")
            .and_then(|v| v.parse::<tracing::Level>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            backend_url,
            reveal_interval,
            request_timeout,
            storage_dir,
            canned_responses_path,
            log_level,
        }
    }
}
