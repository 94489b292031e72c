//! Client Configuration
//!
//! The browser has no process environment, so overrides are baked in at
//! build time (`TECHFLOW_API_URL=... trunk build`).

use std::{fmt::Display, str::FromStr};

use tracing::{info, warn};

pub const DEFAULT_API_URL: &str =
    "https://cs2031-2025-2-hackathon-2-backend-production.up.railway.app/v1";

/// Storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL including the `/v1` prefix, without trailing slash
    pub api_base_url: String,
    /// `limit` for task lists and the dashboard
    pub list_limit: u32,
    /// `limit` for the projects view
    pub project_limit: u32,
    pub token_storage_key: String,
    /// How long transient notices stay visible
    pub notice_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            list_limit: 100,
            project_limit: 50,
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            notice_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides applied
    pub fn load() -> Self {
        Self::from_overrides(
            option_env!("TECHFLOW_API_URL"),
            option_env!("TECHFLOW_LIST_LIMIT"),
            option_env!("TECHFLOW_PROJECT_LIMIT"),
        )
    }

    pub fn from_overrides(
        api_url: Option<&str>,
        list_limit: Option<&str>,
        project_limit: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            list_limit: try_load("TECHFLOW_LIST_LIMIT", list_limit, defaults.list_limit),
            project_limit: try_load("TECHFLOW_PROJECT_LIMIT", project_limit, defaults.project_limit),
            ..defaults
        }
    }
}

fn try_load<T: FromStr + Display>(key: &str, value: Option<&str>, default: T) -> T
where
    T::Err: Display,
{
    match value {
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_overrides(None, None, None);
        assert_eq!(config, AppConfig::default());
        assert!(config.api_base_url.ends_with("/v1"));
        assert_eq!(config.token_storage_key, "token");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_overrides(Some("http://localhost:8080/v1/"), Some("20"), Some("10"));
        assert_eq!(config.api_base_url, "http://localhost:8080/v1");
        assert_eq!(config.list_limit, 20);
        assert_eq!(config.project_limit, 10);
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = AppConfig::from_overrides(Some(""), Some("lots"), None);
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.list_limit, 100);
    }
}
