//! quizbank-sources: Question bank sources and configuration.
//!
//! Implements the `QuestionSource` trait for HTTP and the local filesystem,
//! and loads the `quizbank.toml` configuration.

pub mod config;
pub mod file;
pub mod http;
pub mod mock;

pub use config::{create_source, load_config_from, QuizbankConfig};
pub use file::{list_banks, FileSource};
pub use http::HttpSource;
pub use mock::MockSource;
