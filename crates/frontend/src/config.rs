use serde::Deserialize;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid query string: {0}")]
    Query(#[from] serde_qs::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::Level::Trace,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Info => log::Level::Info,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Error => log::Level::Error,
        }
    }
}

/// Startup options taken from the page URL, e.g. `?log=info`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    #[serde(rename = "log", default = "default_log_level")]
    pub log_level: LogLevel,
}

fn default_log_level() -> LogLevel {
    LogLevel::Debug
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl UiConfig {
    /// Parses a query string with or without the leading `?`. Unknown keys are ignored.
    pub fn from_query(search: &str) -> Result<Self, ConfigError> {
        Ok(serde_qs::from_str(search.trim_start_matches('?'))?)
    }

    /// Reads `window.location.search`, falling back to defaults.
    ///
    /// Runs before the logger exists, so the returned error is for the caller to report.
    pub fn from_window() -> (Self, Option<ConfigError>) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        match Self::from_query(&search) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        assert_eq!(UiConfig::from_query("").unwrap(), UiConfig::default());
        assert_eq!(UiConfig::from_query("?").unwrap().log_level, LogLevel::Debug);
    }

    #[test]
    fn test_log_level_from_query() {
        assert_eq!(UiConfig::from_query("?log=info").unwrap().log_level, LogLevel::Info);
        assert_eq!(
            UiConfig::from_query("active=x&log=error").unwrap().log_level,
            LogLevel::Error
        );
        assert_eq!(log::Level::from(LogLevel::Warn), log::Level::Warn);
    }

    #[test]
    fn test_invalid_level_is_an_error() {
        assert!(UiConfig::from_query("?log=loud").is_err());
    }
}
