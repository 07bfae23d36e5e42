//! quizbank configuration and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizbank_core::model::DEFAULT_QUIZ_LENGTH;
use quizbank_core::traits::{is_remote_locator, QuestionSource};

use crate::file::FileSource;
use crate::http::HttpSource;

/// Top-level quizbank configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Directory or base URL holding `<language>/<bank>.json` files.
    #[serde(default = "default_bank_root")]
    pub bank_root: String,
    /// Language directory used when none is given.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Questions per quiz.
    #[serde(default = "default_quiz_length")]
    pub quiz_length: usize,
    /// Fixed RNG seed for reproducible quizzes.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_bank_root() -> String {
    "./json".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_quiz_length() -> usize {
    DEFAULT_QUIZ_LENGTH
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            bank_root: default_bank_root(),
            default_language: default_language(),
            quiz_length: default_quiz_length(),
            seed: None,
        }
    }
}

impl QuizbankConfig {
    /// Turn a bank argument into a locator.
    ///
    /// URLs and paths that exist are used as given. Anything else is treated
    /// as a bank name under `<bank_root>/<language>/`, with `.json` appended
    /// when missing.
    pub fn resolve_locator(&self, bank: &str, language: Option<&str>) -> String {
        if is_remote_locator(bank) || Path::new(bank).exists() {
            return bank.to_string();
        }

        let language = language.unwrap_or(&self.default_language);
        let file = if bank.ends_with(".json") {
            bank.to_string()
        } else {
            format!("{bank}.json")
        };
        let root = self.bank_root.trim_end_matches('/');
        format!("{root}/{language}/{file}")
    }

    /// The local directory holding banks for `language`, if the root is local.
    pub fn language_dir(&self, language: Option<&str>) -> Option<PathBuf> {
        if is_remote_locator(&self.bank_root) {
            return None;
        }
        let language = language.unwrap_or(&self.default_language);
        Some(PathBuf::from(&self.bank_root).join(language))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + len];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// Environment variable overrides: `QUIZBANK_BANK_ROOT`, `QUIZBANK_LANGUAGE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizbank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizbankConfig::default(),
    };

    if let Ok(root) = std::env::var("QUIZBANK_BANK_ROOT") {
        config.bank_root = root;
    }
    if let Ok(language) = std::env::var("QUIZBANK_LANGUAGE") {
        config.default_language = language;
    }

    config.bank_root = resolve_env_vars(&config.bank_root);
    anyhow::ensure!(config.quiz_length >= 1, "quiz_length must be at least 1");

    Ok(config)
}

fn parse_config(content: &str) -> Result<QuizbankConfig> {
    Ok(toml::from_str::<QuizbankConfig>(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}

/// Create the source able to fetch `locator`.
pub fn create_source(locator: &str) -> Box<dyn QuestionSource> {
    if is_remote_locator(locator) {
        Box::new(HttpSource::new())
    } else {
        Box::new(FileSource)
    }
}
