//! quizbank-core: Question bank model, sampling, and quiz session state.
//!
//! This crate defines the data model, the uniform sampler and option
//! shuffler, the serialized bank loader and the session state machine that
//! every quizbank front-end drives.

pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod report;
pub mod sampler;
pub mod session;
pub mod traits;

pub use error::{LoadError, SessionError};
pub use loader::QuizLoader;
pub use model::{
    AnswerRecord, Choice, Question, QuestionBank, SampledQuiz, ShuffledOptions,
    DEFAULT_QUIZ_LENGTH,
};
pub use session::{Phase, QuizSession};
pub use traits::QuestionSource;
