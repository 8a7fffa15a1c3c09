use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "/api";

/// Build-time configuration of the web app.
///
/// `IGNITE_CALL_API_URL` overrides the API base URL and `IGNITE_CALL_LOG` the
/// console log level (`error`, `warn`, `info`, `debug`, `trace`).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("IGNITE_CALL_API_URL"), option_env!("IGNITE_CALL_LOG"))
    }

    fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            log_level,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
