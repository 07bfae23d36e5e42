//! quizbank CLI: take multiple-choice quizzes in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod terminal;

use commands::play::ReportFormat;

#[derive(Parser)]
#[command(name = "quizbank", version, about = "Multiple-choice quizzes from JSON question banks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a quiz
    Play {
        /// Bank name, path to a .json file, or http(s) URL
        #[arg(long)]
        bank: String,

        /// Language directory for bank names (default from config)
        #[arg(long)]
        language: Option<String>,

        /// Questions per quiz (default from config, usually 10)
        #[arg(long)]
        length: Option<usize>,

        /// RNG seed for a reproducible quiz
        #[arg(long)]
        seed: Option<u64>,

        /// Show a per-question review after the score
        #[arg(long)]
        review: bool,

        /// Directory to save results to
        #[arg(long)]
        output: Option<PathBuf>,

        /// Result format
        #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
        format: ReportFormat,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a question bank for errors and warnings
    Validate {
        /// Bank name, path to a .json file, or http(s) URL
        #[arg(long)]
        bank: String,

        /// Language directory for bank names
        #[arg(long)]
        language: Option<String>,

        /// Quiz length to check the bank size against
        #[arg(long)]
        length: Option<usize>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List question banks for a language
    List {
        /// Language directory to list
        #[arg(long)]
        language: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and a sample question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank=info".parse().expect("static directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            bank,
            language,
            length,
            seed,
            review,
            output,
            format,
            config,
        } => {
            commands::play::execute(
                bank, language, length, seed, review, output, format, config,
            )
            .await
        }
        Commands::Validate {
            bank,
            language,
            length,
            config,
        } => commands::validate::execute(bank, language, length, config).await,
        Commands::List { language, config } => commands::list::execute(language, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
