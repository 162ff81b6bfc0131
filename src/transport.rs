use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::config::Config;
use crate::error::{Error, Result};

/// Issues GET requests against the API and hands back the raw body.
///
/// Implementations classify failures into [`Error::Timeout`],
/// [`Error::Connection`] and [`Error::HttpStatus`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String>;
}

/// [`Transport`] backed by a single `reqwest` client, so every request of a
/// lookup shares one connection pool and the bearer token.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| Error::Configuration(format!("invalid access token: {e}")))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Configuration(format!("could not build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = self.url(path);
        debug!("GET {url} {query:?}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }
}
