//! Client configuration: API base URL and derived endpoints

use anyhow::{Context, Result, anyhow};
use reqwest::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "BOOKRIDER_API_URL";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_base_url: Url,
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Result<Self> {
        let api_base_url = Url::parse(api_base_url)
            .with_context(|| format!("invalid API base URL: {}", api_base_url))?;
        if api_base_url.host_str().is_none() {
            return Err(anyhow!("API base URL has no host: {}", api_base_url));
        }
        Ok(Self { api_base_url })
    }

    /// Base URL from `BOOKRIDER_API_URL`, falling back to the default.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_URL_ENV) {
            Ok(value) => Self::new(&value),
            Err(_) => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Absolute URL for a relative API path such as `/api/rentals`.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.api_base_url.clone();
        url.set_path(path);
        url
    }

    /// Push-channel URL: same host as the API, `ws` scheme (`wss` when the
    /// API is served over `https`), token and channel in the query string.
    pub fn ws_url(&self, token: &str, channel: &str) -> Result<Url> {
        let mut url = self.api_base_url.clone();
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        url.set_scheme(scheme)
            .map_err(|_| anyhow!("cannot derive websocket scheme for {}", self.api_base_url))?;
        url.set_path("/ws");
        url.query_pairs_mut()
            .clear()
            .append_pair("token", token)
            .append_pair("channel", channel);
        Ok(url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_BASE_URL).expect("default URL is valid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_path() {
        let config = ClientConfig::new("http://example.com:8080").unwrap();
        assert_eq!(
            config.endpoint("/api/rentals").as_str(),
            "http://example.com:8080/api/rentals"
        );
    }

    #[test]
    fn ws_url_swaps_scheme_and_encodes_query() {
        let config = ClientConfig::new("http://example.com:8080").unwrap();
        let url = config.ws_url("a b+c", "orders").unwrap();
        assert_eq!(url.scheme(), "ws");
        assert_eq!(url.path(), "/ws");
        assert!(url.query().unwrap().contains("channel=orders"));
        // token must be percent-encoded
        assert!(!url.query().unwrap().contains("a b"));
    }

    #[test]
    fn https_base_becomes_wss() {
        let config = ClientConfig::new("https://example.com").unwrap();
        let url = config.ws_url("t", "orders").unwrap();
        assert_eq!(url.scheme(), "wss");
    }
}
