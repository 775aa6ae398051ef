//! Fetcher trait and HTTP implementation for downloading listings

use std::time::Duration;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, warn};

use crate::catalog::error::CatalogError;
use crate::config::{FetchConfig, USER_AGENT};

/// Trait for downloading a remote document as text
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetches the body of `url` with a single GET request
    ///
    /// # Returns
    /// * `Ok(String)` - Response body
    /// * `Err(CatalogError)` - Transport failure or non-success status
    async fn fetch_text(&self, url: &str) -> Result<String, CatalogError>;
}

/// Fetcher backed by a reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, CatalogError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", url, status);
            return Err(CatalogError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
