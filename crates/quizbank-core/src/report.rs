//! Quiz result reports, saved as JSON.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::QuizSession;

/// The outcome of one finished quiz attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Locator of the question bank the quiz was drawn from.
    pub bank: String,
    /// Number of correct answers.
    pub score: usize,
    /// Number of questions in the quiz.
    pub total: usize,
    /// Per-question review, in quiz order.
    pub items: Vec<QuestionReview>,
}

/// How one question was answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionReview {
    /// 1-based question number as displayed.
    pub number: usize,
    pub question: String,
    pub options: BTreeMap<String, String>,
    /// `None` when the question was never answered.
    pub selected_key: Option<String>,
    pub correct_key: String,
    pub correct: bool,
}

impl QuestionReview {
    /// Text of the selected option, if any.
    pub fn selected_text(&self) -> Option<&str> {
        self.selected_key
            .as_ref()
            .and_then(|k| self.options.get(k))
            .map(String::as_str)
    }

    pub fn correct_text(&self) -> Option<&str> {
        self.options.get(&self.correct_key).map(String::as_str)
    }
}

impl QuizReport {
    /// Build a report from the session's current quiz and answers.
    pub fn from_session(session: &QuizSession, bank: &str) -> Self {
        let items = session
            .quiz()
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let answer = session.answer(index);
                QuestionReview {
                    number: index + 1,
                    question: question.text().to_string(),
                    options: question.options().clone(),
                    selected_key: answer.map(|a| a.selected_key.clone()),
                    correct_key: question.correct_key().to_string(),
                    correct: answer.is_some_and(|a| a.is_correct()),
                }
            })
            .collect();

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            bank: bank.to_string(),
            score: session.score(),
            total: session.total(),
            items,
        }
    }

    /// Score as a fraction in `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }
}
