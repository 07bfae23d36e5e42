//! The `quizbank validate` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use quizbank_core::parser::validate_question_bank;
use quizbank_core::QuizLoader;
use quizbank_sources::{create_source, load_config_from};

use crate::commands::load_bank;

pub async fn execute(
    bank: String,
    language: Option<String>,
    length: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let length = length.unwrap_or(config.quiz_length);

    let locator = config.resolve_locator(&bank, language.as_deref());
    let loader = QuizLoader::new(Arc::from(create_source(&locator)));
    let bank = load_bank(&loader, &locator).await?;

    println!("Question bank: {} ({} questions)", locator, bank.len());

    let warnings = validate_question_bank(&bank, length);
    for w in &warnings {
        let prefix = w
            .index
            .map(|i| format!("  [question {}]", i + 1))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
