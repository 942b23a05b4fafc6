//! Reqwest-backed card database client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use cardex_types::CardPage;

use crate::error::ClientError;
use crate::source::CardSource;

/// Default base URL of the card-database API.
pub const DEFAULT_BASE_URL: &str = "https://api.pokemontcg.io/v2";

/// HTTP client for the remote card database.
///
/// One instance is shared across all tool invocations; reqwest pools
/// connections internally.
pub struct CardClient {
    http: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl CardClient {
    /// Creates a client against `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Init` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Init(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: timeout.as_secs(),
        })
    }

    /// Returns the `/cards` endpoint URL.
    fn cards_url(&self) -> String {
        format!("{}/cards", self.base_url)
    }
}

#[async_trait]
impl CardSource for CardClient {
    /// Issues `GET {base}/cards?q=<query>` and decodes the paged envelope.
    ///
    /// The compiled query travels as a single URL-encoded `q` parameter;
    /// reqwest performs the encoding.
    async fn search(&self, query: &str) -> Result<CardPage, ClientError> {
        debug!(%query, "querying card database");

        let resp = self
            .http
            .get(self.cards_url())
            .query(&[("q", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout {
                        timeout_secs: self.timeout_secs,
                    }
                } else {
                    ClientError::Request(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        resp.json::<CardPage>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client(base: &str) -> CardClient {
        CardClient::new(base, Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = make_client("https://api.example.com/v2/");
        assert_eq!(client.cards_url(), "https://api.example.com/v2/cards");
    }

    #[test]
    fn query_parameter_is_url_encoded() {
        let client = make_client(DEFAULT_BASE_URL);
        let req = client
            .http
            .get(client.cards_url())
            .query(&[("q", "name:\"chien-pao\" subtypes:EX")])
            .build()
            .expect("request");
        let url = req.url().as_str();
        assert!(url.starts_with("https://api.pokemontcg.io/v2/cards?q="));
        assert!(url.contains("chien-pao"));
        assert!(!url.contains(' '), "spaces must be percent-encoded");
    }

    #[test]
    fn default_base_url_is_https() {
        assert!(DEFAULT_BASE_URL.starts_with("https://"));
    }
}
