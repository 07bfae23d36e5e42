//! The `quizbank play` command.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizbank_core::report::QuizReport;
use quizbank_core::{QuizLoader, QuizSession};
use quizbank_report::write_html_report;
use quizbank_sources::{create_source, load_config_from};

use crate::commands::load_bank;
use crate::terminal::{Outcome, Terminal};

/// Which result files `--output` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Html,
    All,
}

impl ReportFormat {
    fn writes_json(self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::All)
    }

    fn writes_html(self) -> bool {
        matches!(self, ReportFormat::Html | ReportFormat::All)
    }
}

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    bank: String,
    language: Option<String>,
    length: Option<usize>,
    seed: Option<u64>,
    review: bool,
    output: Option<PathBuf>,
    format: ReportFormat,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let length = length.unwrap_or(config.quiz_length);
    anyhow::ensure!(length >= 1, "quiz length must be at least 1");

    let locator = config.resolve_locator(&bank, language.as_deref());
    tracing::debug!(%locator, length, "resolved quiz settings");
    let loader = QuizLoader::new(Arc::from(create_source(&locator)));
    let bank = load_bank(&loader, &locator).await?;

    let mut rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut terminal = Terminal::new(stdin.lock(), io::stdout());
    let mut session = QuizSession::new();

    loop {
        session.restart(&bank, length, &mut rng);
        if session.quiz().is_short() {
            terminal.notice(&format!(
                "Only {} questions available, using all of them.",
                session.total()
            ))?;
        }

        if terminal.run_quiz(&mut session, &mut rng)? == Outcome::Abandoned {
            terminal.notice("\nQuiz abandoned.")?;
            break;
        }

        let report = QuizReport::from_session(&session, &locator);
        terminal.show_result(&report, review)?;
        if let Some(dir) = &output {
            save_report(&report, dir, format)?;
        }

        if !terminal.confirm("Start a new quiz?")? {
            break;
        }
    }

    Ok(())
}

fn save_report(report: &QuizReport, output: &Path, format: ReportFormat) -> Result<()> {
    std::fs::create_dir_all(output)?;
    let timestamp = report.created_at.format("%Y-%m-%dT%H%M%S");
    let short_id = report.id.simple().to_string();
    let stem = format!("result-{timestamp}-{}", &short_id[..8]);

    if format.writes_json() {
        let path = output.join(format!("{stem}.json"));
        report.save_json(&path)?;
        eprintln!("Results saved to: {}", path.display());
    }
    if format.writes_html() {
        let path = output.join(format!("{stem}.html"));
        write_html_report(report, &path)?;
        eprintln!("HTML report: {}", path.display());
    }

    Ok(())
}
