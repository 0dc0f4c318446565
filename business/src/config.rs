use std::env::vars;
use std::time::Duration;

use log::info;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_CACHE_TTL_SECS: u64 = 60;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Raw environment values, every field optional so defaults can be applied in code.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    bizdesk_api_base_url: Option<String>,
    bizdesk_api_token: Option<String>,
    bizdesk_page_size: Option<u64>,
    bizdesk_cache_ttl_secs: Option<u64>,
    bizdesk_request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Bearer token sent with every request when present.
    pub api_token: Option<String>,
    /// Initial page size of every list screen.
    pub page_size: u64,
    pub cache_ttl: Duration,
    pub request_timeout: Duration,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// The REST root, `{api_base_url}/api`.
    pub fn api_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        if base.is_empty() {
            "/api".to_owned()
        } else {
            format!("{base}/api")
        }
    }

    /// Reads `BIZDESK_*` environment variables, falling back to defaults.
    pub fn init() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            bizdesk_api_base_url,
            bizdesk_api_token,
            bizdesk_page_size,
            bizdesk_cache_ttl_secs,
            bizdesk_request_timeout_secs,
        } = raw;

        let page_size = bizdesk_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return Err(ConfigError::PageSize(page_size));
        }

        let timeout = bizdesk_request_timeout_secs.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if timeout == 0 {
            return Err(ConfigError::Zero("BIZDESK_REQUEST_TIMEOUT_SECS"));
        }

        let api_base_url = match bizdesk_api_base_url {
            Some(url) => {
                info!("Using provided BIZDESK_API_BASE_URL: {url}");
                url
            }
            None => DEFAULT_API_BASE_URL.to_owned(),
        };

        Ok(Self {
            api_base_url,
            api_token: bizdesk_api_token.filter(|token| !token.is_empty()),
            page_size,
            cache_ttl: Duration::from_secs(bizdesk_cache_ttl_secs.unwrap_or(DEFAULT_CACHE_TTL_SECS)),
            request_timeout: Duration::from_secs(timeout),
        })
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let raw: RawConfig =
            from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("default config should build");
        assert_eq!(config, BusinessConfig::default());
        assert_eq!(config.api_url(), "http://localhost:3000/api");
    }

    #[test]
    fn environment_values_override_defaults() {
        let raw: RawConfig = from_iter(vec![
            ("BIZDESK_API_BASE_URL", "https://backoffice.example.com/"),
            ("BIZDESK_API_TOKEN", "secret"),
            ("BIZDESK_PAGE_SIZE", "20"),
            ("BIZDESK_CACHE_TTL_SECS", "5"),
        ])
        .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw).expect("config should build");
        assert_eq!(config.api_url(), "https://backoffice.example.com/api");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.page_size, 20);
        assert_eq!(config.cache_ttl, Duration::from_secs(5));
    }

    #[test]
    fn page_size_outside_options_is_rejected() {
        let raw: RawConfig =
            from_iter(vec![("BIZDESK_PAGE_SIZE", "15")]).expect("RawConfig should deserialize");

        let err = BusinessConfig::from_raw(raw).expect_err("15 is not a page size option");
        assert!(err.to_string().contains("15"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let raw: RawConfig = from_iter(vec![("BIZDESK_REQUEST_TIMEOUT_SECS", "0")])
            .expect("RawConfig should deserialize");

        assert!(BusinessConfig::from_raw(raw).is_err());
    }

    #[test]
    fn empty_base_url_uses_relative_api_root() {
        assert_eq!(BusinessConfig::new("").api_url(), "/api");
    }
}
