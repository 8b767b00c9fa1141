//! Client configuration.
//!
//! The frontend reads an `ApiConfig` from a JSON blob embedded in the host
//! page; every field has a default so a partial (or absent) blob still yields
//! a usable configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LoggingLevel> for log::Level {
    fn from(level: LoggingLevel) -> Self {
        match level {
            LoggingLevel::Trace => log::Level::Trace,
            LoggingLevel::Debug => log::Level::Debug,
            LoggingLevel::Info => log::Level::Info,
            LoggingLevel::Warn => log::Level::Warn,
            LoggingLevel::Error => log::Level::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix joined in front of every resource path.
    pub base_url: String,
    /// Where the browser goes after logout.
    pub login_path: String,
    /// Local storage key holding the bearer token.
    pub token_storage_key: String,
    /// Local storage key holding the refresh token, cleared on logout.
    pub refresh_storage_key: String,
    pub log_level: LoggingLevel,
    /// Serve everything from an in-memory backend instead of HTTP.
    pub demo: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api/".to_string(),
            login_path: "/login".to_string(),
            token_storage_key: "access_token".to_string(),
            refresh_storage_key: "refresh_token".to_string(),
            log_level: LoggingLevel::default(),
            demo: false,
        }
    }
}

impl ApiConfig {
    /// Parses the embedded JSON blob.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Absolute or root-relative URL for a resource path such as
    /// `reservations/` or `users/3/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = ApiConfig::from_json(r#"{ "base_url": "https://api.example.com/v1" }"#).unwrap();
        assert_eq!(config.base_url, "https://api.example.com/v1");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.log_level, LoggingLevel::Info);
        assert!(!config.demo);
    }

    #[test]
    fn endpoint_joins_with_one_slash() {
        let mut config = ApiConfig::default();
        assert_eq!(config.endpoint("reservations/"), "/api/reservations/");
        config.base_url = "https://api.example.com/v1".to_string();
        assert_eq!(config.endpoint("/users/3/"), "https://api.example.com/v1/users/3/");
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config = ApiConfig::from_json(r#"{ "log_level": "debug", "demo": true }"#).unwrap();
        assert_eq!(log::Level::from(config.log_level), log::Level::Debug);
        assert!(config.demo);
        assert!(ApiConfig::from_json(r#"{ "log_level": "loud" }"#).is_err());
    }
}
