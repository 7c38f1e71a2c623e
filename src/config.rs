use serde::Serialize;
use ts_rs::TS;
use url::Url;

use crate::error::AppError;

/// Environment variable naming the external forecast API base URL.
pub const API_URL_VAR: &str = "EAPI_API_URL";

/// Environment variable naming the reverse-proxy mount prefix.
pub const PATH_PREFIX_VAR: &str = "REQUESTS_PATHNAME_PREFIX";

/// Process configuration, read once at startup. The service refuses to
/// start without a usable API base URL.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Config {
    /// Base URL of the external forecast API, trailing slashes trimmed.
    pub api_url: String,
    /// Mount prefix when hosted behind a reverse proxy, normalized to a
    /// leading slash and no trailing slash. `None` = served at the root.
    pub path_prefix: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_values(
            std::env::var(API_URL_VAR).ok(),
            std::env::var(PATH_PREFIX_VAR).ok(),
        )
    }

    /// Build a config from explicit values. `from_env` wraps this; tests
    /// call it directly so they never touch the process environment.
    pub fn from_values(
        api_url: Option<String>,
        path_prefix: Option<String>,
    ) -> Result<Self, AppError> {
        let raw = api_url
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::MissingConfig {
                var: API_URL_VAR.to_string(),
            })?;
        let api_url = raw.trim_end_matches('/').to_string();
        Url::parse(&api_url).map_err(|e| AppError::InvalidConfig {
            var: API_URL_VAR.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            api_url,
            path_prefix: normalize_prefix(path_prefix),
        })
    }
}

fn normalize_prefix(prefix: Option<String>) -> Option<String> {
    let raw = prefix?;
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/{trimmed}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_url_is_fatal() {
        let err = Config::from_values(None, None).unwrap_err();
        assert!(matches!(err, AppError::MissingConfig { .. }));
        assert!(err.to_string().contains(API_URL_VAR));
    }

    #[test]
    fn blank_api_url_counts_as_unset() {
        let err = Config::from_values(Some("   ".to_string()), None).unwrap_err();
        assert!(matches!(err, AppError::MissingConfig { .. }));
    }

    #[test]
    fn unparsable_api_url_is_rejected() {
        let err = Config::from_values(Some("not a url".to_string()), None).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig { .. }));
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config =
            Config::from_values(Some("https://eapi.example.org/".to_string()), None).unwrap();
        assert_eq!(config.api_url, "https://eapi.example.org");
    }

    #[test]
    fn root_prefix_means_no_prefix() {
        let config = Config::from_values(
            Some("https://eapi.example.org".to_string()),
            Some("/".to_string()),
        )
        .unwrap();
        assert_eq!(config.path_prefix, None);
    }

    #[test]
    fn prefix_is_normalized() {
        let config = Config::from_values(
            Some("https://eapi.example.org".to_string()),
            Some("tools/analogs/".to_string()),
        )
        .unwrap();
        assert_eq!(config.path_prefix.as_deref(), Some("/tools/analogs"));
    }
}
