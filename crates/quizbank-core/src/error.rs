//! Error types for loading question banks and driving a quiz session.
//!
//! Both enums live in `quizbank-core` so every question source and every
//! presentation layer reports failures the same way.

use thiserror::Error;

/// Errors that can occur while fetching and validating a question bank.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource does not exist (missing file or HTTP 404).
    #[error("file not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status.
    #[error("HTTP error (status {status}) fetching {locator}")]
    Http { status: u16, locator: String },

    /// The HTTP request could not be completed.
    #[error("network error: {0}")]
    Network(String),

    /// A local file exists but could not be read.
    #[error("read error: {0}")]
    Io(String),

    /// The payload is not a JSON array of question records.
    #[error("invalid data format: {0}")]
    Malformed(String),

    /// The payload parsed but contained no questions.
    #[error("invalid data format or empty: the question bank has no questions")]
    Empty,

    /// A question record violates the question invariants.
    #[error("question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    /// Another load is still in flight on the same loader.
    #[error("a question bank is already being loaded")]
    Busy,
}

/// Errors returned by [`QuizSession`](crate::session::QuizSession) commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The question index is outside the current quiz.
    #[error("question index {index} is out of range (quiz has {total} questions)")]
    Index { index: usize, total: usize },

    /// The user tried to move on without answering the current question.
    #[error("please select an answer before continuing")]
    Unanswered,

    /// The question was already advanced past; its answer is final.
    #[error("question {index} is already closed")]
    Closed { index: usize },

    /// A command was issued while no quiz is running.
    #[error("no quiz is in progress")]
    NotInProgress,
}
