//! Trait for retrieving raw question bank payloads.
//!
//! Implemented by the `quizbank-sources` crate for HTTP and local files.

use async_trait::async_trait;

use crate::error::LoadError;

/// A place question banks can be fetched from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Human-readable source name (e.g. "http").
    fn name(&self) -> &str;

    /// Retrieve the raw bytes behind `locator`.
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, LoadError>;
}

/// Returns `true` when the locator should be fetched over HTTP.
pub fn is_remote_locator(locator: &str) -> bool {
    let lower = locator.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
