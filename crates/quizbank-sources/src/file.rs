//! Local filesystem question bank source and bank discovery.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::instrument;

use quizbank_core::error::LoadError;
use quizbank_core::traits::QuestionSource;

/// Reads question banks from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSource;

#[async_trait]
impl QuestionSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    #[instrument(skip(self))]
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, LoadError> {
        match tokio::fs::read(locator).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(LoadError::NotFound(locator.to_string()))
            }
            Err(e) => Err(LoadError::Io(format!("{locator}: {e}"))),
        }
    }
}

/// List the `.json` question banks directly inside `dir`, sorted by name.
pub fn list_banks(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut banks = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            banks.push(path);
        } else if path.is_dir() {
            tracing::debug!("skipping directory {}", path.display());
        }
    }

    banks.sort();
    Ok(banks)
}
