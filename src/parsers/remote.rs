//! Blocking HTTP client for remote feeds.

use super::parse_feed_str;
use crate::error::{CatalogError, ErrorContext, LoadErrorKind, Result};
use crate::model::CatalogFeed;
use reqwest::blocking::Client;

/// Feed client configuration.
#[derive(Debug, Clone)]
pub struct FeedClientConfig {
    pub user_agent: String,
}

impl Default for FeedClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches feed documents over HTTP(S).
///
/// One attempt per fetch; the transport's default timeout applies.
pub struct FeedClient {
    client: Client,
}

fn network_error(msg: &str, err: &reqwest::Error) -> CatalogError {
    CatalogError::load(msg, LoadErrorKind::Network(err.to_string()))
}

impl FeedClient {
    /// Create a new client.
    pub fn new(config: FeedClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", &e))?;
        Ok(Self { client })
    }

    /// GET `url` and parse the body as a feed document.
    pub fn fetch(&self, url: &str) -> Result<CatalogFeed> {
        tracing::debug!(url, "fetching feed");
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| network_error("Feed request failed", &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::load(
                format!("fetching {url}"),
                LoadErrorKind::HttpStatus(status.as_u16()),
            ));
        }

        let body = response
            .text()
            .map_err(|e| network_error("Reading feed response failed", &e))?;
        parse_feed_str(&body).with_context(|| format!("parsing {url}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user_agent_names_the_crate() {
        let config = FeedClientConfig::default();
        assert!(config.user_agent.starts_with("iphone-monitor/"));
    }

    #[test]
    fn test_client_builds() {
        assert!(FeedClient::new(FeedClientConfig::default()).is_ok());
    }
}
