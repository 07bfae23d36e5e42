pub mod init;
pub mod list;
pub mod play;
pub mod validate;

use anyhow::Result;

use quizbank_core::{QuestionBank, QuizLoader};

/// Load a bank, wrapping failures in the message shown on the setup screen.
pub(crate) async fn load_bank(loader: &QuizLoader, locator: &str) -> Result<QuestionBank> {
    loader.load(locator).await.map_err(|e| {
        anyhow::anyhow!(
            "failed to load quiz data: {e}. Please check the file structure and names."
        )
    })
}
