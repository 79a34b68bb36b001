//! API Configuration
//!
//! Where the REST service lives. The browser build bakes the value of
//! `TASKBOARD_API_URL` in at compile time.

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the API base URL
pub const API_URL_ENV: &str = "TASKBOARD_API_URL";

/// Used when no URL is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validate and normalize a base URL (no trailing slash)
    pub fn new(base_url: impl AsRef<str>) -> ClientResult<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ClientError::Config("API base URL is empty".to_string()));
        }
        reqwest::Url::parse(trimmed)
            .map_err(|e| ClientError::Config(format!("invalid API base URL {:?}: {}", trimmed, e)))?;
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Build from an optional `TASKBOARD_API_URL` value, falling back to
    /// the local default when it is unset
    pub fn resolve(value: Option<&str>) -> ClientResult<Self> {
        Self::new(value.unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a route path (starting with `/`) onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.example.com/").unwrap();
        assert_eq!(config.url("/api/tasks"), "https://api.example.com/api/tasks");
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let config = ApiConfig::resolve(None).unwrap();
        assert_eq!(config.base_url(), DEFAULT_API_URL);
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::resolve(Some("https://tasks.example.com/")).unwrap();
        assert_eq!(config.base_url(), "https://tasks.example.com");
        assert_eq!(ApiConfig::resolve(Some("")).unwrap_err().kind(), ErrorKind::Config);
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert_eq!(ApiConfig::new("  ").unwrap_err().kind(), ErrorKind::Config);
        assert_eq!(ApiConfig::new("not a url").unwrap_err().kind(), ErrorKind::Config);
    }
}
