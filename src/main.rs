//! Summarize a directory of documents under a size budget.
//!
//! # Examples
//!
//! ```sh
//! # 665-character summary (the default budget)
//! summarize ./docs
//!
//! # 100-word summary with a custom objective mix
//! summarize ./docs --size 100 --words --diversity-weight 4 --redundancy-weight 1
//!
//! # Cross-lingual output through a word glossary, full report as JSON
//! summarize ./docs -l de --glossary en-de.json --json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=summary_core=debug` to see every round.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use summary_core::config::ConfigOverrides;
use summary_core::summary::{GlossaryTranslator, PassthroughTranslator, Translator};
use summary_core::{SizeUnit, Summarizer, SummarizerConfig};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "summarize", author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the source documents
    source_directory: PathBuf,

    /// Maximum size of the summary (default 665)
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    size: Option<i64>,

    /// Measure size in words instead of characters
    #[arg(short, long)]
    words: bool,

    /// Measure size in characters, overriding a configured word budget
    #[arg(long, conflicts_with = "words")]
    chars: bool,

    /// Two-letter language code of the source documents (default `en`)
    #[arg(long, value_name = "LANG")]
    source_lang: Option<String>,

    /// Two-letter language code of a cross-lingual summary; defaults to the source language
    #[arg(short = 'l', long, value_name = "LANG")]
    target_lang: Option<String>,

    /// TOML configuration file; command-line flags override its values
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON word glossary used to translate the summary
    #[arg(long, value_name = "PATH")]
    glossary: Option<PathBuf>,

    // ── Objective weights ──────────────────────────────────────
    /// Weight of the coverage objective
    #[arg(long)]
    coverage_weight: Option<f64>,

    /// Saturation fraction of the coverage objective, in (0, 1]
    #[arg(long)]
    coverage_alpha: Option<f64>,

    /// Weight of the diversity objective
    #[arg(long)]
    diversity_weight: Option<f64>,

    /// Weight of the redundancy penalty
    #[arg(long)]
    redundancy_weight: Option<f64>,

    // ── Output ─────────────────────────────────────────────────
    /// Print the full report as JSON instead of the summary text
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            limit: self.size,
            unit: (self.words || self.chars).then(|| SizeUnit::from_words_flag(self.words)),
            source_lang: self.source_lang.clone(),
            target_lang: self.target_lang.clone(),
            coverage_weight: self.coverage_weight,
            coverage_alpha: self.coverage_alpha,
            diversity_weight: self.diversity_weight,
            redundancy_weight: self.redundancy_weight,
        }
    }

    fn config(&self) -> Result<SummarizerConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => SummarizerConfig::load(path)?,
            None => SummarizerConfig::default(),
        };
        config.apply_overrides(&self.overrides());
        Ok(config)
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.config()?;

    let translator: Box<dyn Translator> = match &cli.glossary {
        Some(path) => Box::new(GlossaryTranslator::from_json_file(path)?),
        None => Box::new(PassthroughTranslator),
    };

    let summarizer = Summarizer::with_translator(config, translator);
    let report = summarizer.summarize(&cli.source_directory)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        info!("Source summary:\n{}", report.text());
        println!("{}", report.target_text());
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
