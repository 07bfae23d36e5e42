//! In-memory source for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizbank_core::error::LoadError;
use quizbank_core::traits::QuestionSource;

/// Serves fixed payloads keyed by locator; unknown locators are not found.
pub struct MockSource {
    payloads: HashMap<String, Vec<u8>>,
    call_count: AtomicU32,
    last_locator: Mutex<Option<String>>,
}

impl MockSource {
    pub fn new() -> Self {
        Self {
            payloads: HashMap::new(),
            call_count: AtomicU32::new(0),
            last_locator: Mutex::new(None),
        }
    }

    /// Register a payload for a locator.
    pub fn with_payload(mut self, locator: &str, payload: impl Into<Vec<u8>>) -> Self {
        self.payloads.insert(locator.to_string(), payload.into());
        self
    }

    /// Number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The locator of the most recent fetch.
    pub fn last_locator(&self) -> Option<String> {
        self.last_locator
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, LoadError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut last) = self.last_locator.lock() {
            *last = Some(locator.to_string());
        }

        self.payloads
            .get(locator)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(locator.to_string()))
    }
}
