//! # punctuate
//!
//! Restore punctuation in a text file with a CRF++ model.
//!
//! ```bash
//! punctuate --input talk.txt --model punct.crf --output talk-punct.txt
//!
//! # Larger chunks, custom tagger, keep the CoNLL files for inspection
//! punctuate --input talk.txt --model punct.crf --output - \
//!     --max-tokens 40 --crf-test /opt/crfpp/bin/crf_test \
//!     --keep-intermediate ./work -vv
//! ```

use anyhow::Result;
use clap::{ArgAction, Parser};
use crf_punctuate::config;
use crf_punctuate::labeler::CrfTestLabeler;
use crf_punctuate::pipeline::{run_punctuate, OutputTarget, RunRequest};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::filter::LevelFilter;

/// Restore punctuation in free-form text using an external CRF labeler.
///
/// The input is split into chunks of at most `max_tokens` tokens, labeled
/// by `crf_test`, and reassembled into a single line of punctuated text.
#[derive(Parser)]
#[command(name = "punctuate", version)]
struct Cli {
    /// Input text file.
    #[arg(long)]
    input: PathBuf,

    /// Trained CRF model file passed to `crf_test -m`.
    #[arg(long)]
    model: PathBuf,

    /// Output file for the punctuated text (`-` for stdout).
    #[arg(long)]
    output: PathBuf,

    /// Path to configuration file (TOML). Built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum tokens per chunk (overrides `chunking.max_tokens`).
    #[arg(long)]
    max_tokens: Option<usize>,

    /// Labeler executable (overrides `labeler.binary`).
    #[arg(long)]
    crf_test: Option<PathBuf>,

    /// Write intermediate files to this directory and keep them.
    #[arg(long)]
    keep_intermediate: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose));

    if let Err(err) = run(cli) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = config::load_or_default(cli.config.as_deref())?;
    if let Some(max_tokens) = cli.max_tokens {
        cfg.chunking.max_tokens = max_tokens;
    }
    if let Some(binary) = cli.crf_test {
        cfg.labeler.binary = binary;
    }
    cfg.validate()?;

    let labeler = CrfTestLabeler::from_config(&cfg.labeler);
    let request = RunRequest {
        input: cli.input,
        model: cli.model,
        output: OutputTarget::from_arg(&cli.output),
        keep_intermediate: cli.keep_intermediate,
    };

    let summary = run_punctuate(&cfg, &request, &labeler)?;
    if let OutputTarget::File(path) = &request.output {
        eprintln!(
            "punctuated {} tokens in {} chunks ({} marks) -> {}",
            summary.tokens,
            summary.chunks,
            summary.marks,
            path.display()
        );
    }
    Ok(())
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}
