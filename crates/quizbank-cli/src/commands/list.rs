//! The `quizbank list` command.

use std::path::PathBuf;

use anyhow::Result;

use quizbank_core::parser::parse_question_bank;
use quizbank_sources::{list_banks, load_config_from};

pub fn execute(language: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let Some(dir) = config.language_dir(language.as_deref()) else {
        anyhow::bail!(
            "cannot list banks under a remote root ({}); pass a bank URL to `play` instead",
            config.bank_root
        );
    };

    let banks = list_banks(&dir)?;
    if banks.is_empty() {
        println!(
            "No question banks in {}. Run `quizbank init` to create a sample.",
            dir.display()
        );
        return Ok(());
    }

    println!("Question banks in {}:", dir.display());
    for path in &banks {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let status = match std::fs::read(path) {
            Ok(bytes) => match parse_question_bank(&bytes) {
                Ok(bank) => format!("{} questions", bank.len()),
                Err(e) => format!("invalid: {e}"),
            },
            Err(e) => format!("unreadable: {e}"),
        };
        println!("  {name} ({status})");
    }

    Ok(())
}
