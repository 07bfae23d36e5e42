//! HTTP question bank source.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

use quizbank_core::error::LoadError;
use quizbank_core::traits::QuestionSource;

/// Fetches question banks with a single GET. No timeout and no retries.
pub struct HttpSource {
    client: reqwest::Client,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| LoadError::Network(format!("{locator}: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LoadError::NotFound(locator.to_string()));
        }
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
                locator: locator.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Network(format!("failed to read body of {locator}: {e}")))?;
        tracing::debug!(bytes = body.len(), "fetched question bank");
        Ok(body.to_vec())
    }
}
