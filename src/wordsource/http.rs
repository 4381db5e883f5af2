//! Remote word service client

use super::{WordSource, WordSourceError};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Fetches words from an HTTP service
///
/// Each fetch is one `POST` with an empty body; the whole response body,
/// trimmed of surrounding whitespace, is the word.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    url: String,
    client: Client,
}

impl HttpWordSource {
    /// Create a source for `url` with a per-request timeout
    ///
    /// # Errors
    /// Returns `WordSourceError::Network` if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, WordSourceError> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| WordSourceError::Network {
                url: url.clone(),
                source,
            })?;

        Ok(Self { url, client })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl WordSource for HttpWordSource {
    #[instrument(skip(self), fields(url = %self.url))]
    fn fetch_random_word(&self) -> Result<String, WordSourceError> {
        let network = |source| WordSourceError::Network {
            url: self.url.clone(),
            source,
        };

        let response = self.client.post(&self.url).send().map_err(network)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Word service rejected request");
            return Err(WordSourceError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.text().map_err(network)?;
        let word = body.trim();
        if word.is_empty() {
            return Err(WordSourceError::EmptyResponse);
        }

        debug!(length = word.len(), "Fetched word");
        Ok(word.to_string())
    }
}
