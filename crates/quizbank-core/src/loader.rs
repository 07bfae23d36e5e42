//! Question bank loader.
//!
//! Fetches a payload through a [`QuestionSource`], parses it and hands back a
//! validated [`QuestionBank`]. Only one load may be in flight per loader; a
//! second call made while the first is pending is rejected with
//! [`LoadError::Busy`] instead of racing it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::error::LoadError;
use crate::model::QuestionBank;
use crate::parser::parse_question_bank;
use crate::traits::QuestionSource;

/// Serialized front door for loading question banks.
pub struct QuizLoader {
    source: Arc<dyn QuestionSource>,
    loading: AtomicBool,
}

/// Clears the in-flight flag however the load ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl QuizLoader {
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            loading: AtomicBool::new(false),
        }
    }

    /// `true` while a load is pending.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Fetch, parse and validate the bank behind `locator`.
    pub async fn load(&self, locator: &str) -> Result<QuestionBank, LoadError> {
        if self
            .loading
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!(locator, "load rejected, another load is in flight");
            return Err(LoadError::Busy);
        }
        let _in_flight = InFlight(&self.loading);

        let start = Instant::now();
        tracing::info!(locator, source = self.source.name(), "fetching question bank");

        let bytes = self.source.fetch(locator).await.inspect_err(|e| {
            tracing::error!(locator, "failed to fetch question bank: {e}");
        })?;
        let bank = parse_question_bank(&bytes).inspect_err(|e| {
            tracing::error!(locator, "rejected question bank: {e}");
        })?;

        tracing::info!(
            locator,
            questions = bank.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "question bank loaded"
        );
        Ok(bank)
    }
}
