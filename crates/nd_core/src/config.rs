use std::env;
use url::Url;

use crate::{Error, Result};

pub const BASE_URL_ENV: &str = "NEWS_API_BASE_URL";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8003";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: Url,
}

impl Config {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(format!("{} cannot be used as a base URL", base_url)));
        }
        Ok(Self { base_url })
    }

    /// Reads `NEWS_API_BASE_URL`, falling back to the local backend.
    pub fn from_env() -> Result<Self> {
        Self::resolve(None)
    }

    /// An explicit override wins over the environment, which wins over the default.
    pub fn resolve(override_url: Option<&str>) -> Result<Self> {
        let base = match override_url {
            Some(url) => url.to_string(),
            None => env::var(BASE_URL_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        let config = Self::new(base.trim())?;
        tracing::debug!("Using news API at {}", config.base_url);
        Ok(config)
    }

    /// Absolute URL of the news listing endpoint.
    pub fn news_endpoint(&self) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{}/api/news", base)).map_err(|e| Error::InvalidUrl(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}
