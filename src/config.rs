use std::time::Duration;

use crate::error::{Error, Result};
use crate::paginator::DEFAULT_PAGE_LIMIT;

pub const DEFAULT_BASE_URL: &str = "https://api.genius.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const TOKEN_VAR: &str = "ACCESS_TOKEN";

// Everything a lookup needs, validated up front
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
    pub page_limit: i64,
    pub per_page: Option<u32>,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    token: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    page_limit: Option<i64>,
    per_page: Option<u32>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Fill in defaults and check the token.
    ///
    /// Without an explicit token, `ACCESS_TOKEN` is read from the environment.
    /// Callers wanting `.env` support load it with `dotenvy` beforehand.
    pub fn build(self) -> Result<Config> {
        let token = match self.token {
            Some(token) => token,
            None => std::env::var(TOKEN_VAR)
                .map_err(|e| Error::Configuration(format!("{TOKEN_VAR}: {e}")))?,
        };
        if token.trim().is_empty() {
            return Err(Error::Configuration("access token is empty".into()));
        }

        Ok(Config {
            token,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            page_limit: self.page_limit.unwrap_or(DEFAULT_PAGE_LIMIT),
            per_page: self.per_page,
        })
    }
}
