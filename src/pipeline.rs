//! Punctuation pipeline orchestration.
//!
//! Coordinates one run: input text → CoNLL chunks → external labeler →
//! alignment with original-case tokens → reassembled text → output file.
//! Every intermediate artifact is written to a [`Workspace`] so a failed
//! run can be inspected with `--keep-intermediate`.

use anyhow::{bail, Context, Result};
use crf_punctuate_core::chunk::{chunk_text, to_conll_string};
use crf_punctuate_core::conll::{align, parse_predictions, render_cased_predictions, render_labels};
use crf_punctuate_core::reassemble::{mark_count, punctuate};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::labeler::Labeler;
use crate::workspace::{Artifact, Workspace};

/// Where the punctuated text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    /// `-` selects stdout; anything else is a file path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(arg.to_path_buf())
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    pub model: PathBuf,
    pub output: OutputTarget,
    pub keep_intermediate: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub tokens: usize,
    pub chunks: usize,
    pub marks: usize,
    pub text: String,
}

pub fn run_punctuate(
    config: &Config,
    request: &RunRequest,
    labeler: &dyn Labeler,
) -> Result<RunSummary> {
    if !request.model.is_file() {
        bail!("Model file not found: {}", request.model.display());
    }

    let raw = std::fs::read_to_string(&request.input)
        .with_context(|| format!("Failed to read input file: {}", request.input.display()))?;

    let workspace = Workspace::new(&request.input, request.keep_intermediate.as_deref())?;
    tracing::debug!(
        dir = %workspace.dir().display(),
        temporary = workspace.is_temporary(),
        "intermediate directory"
    );

    let summary = punctuate_text(config, raw.trim(), &request.model, &workspace, labeler)?;
    write_output(&request.output, &summary.text)?;

    tracing::info!(
        tokens = summary.tokens,
        chunks = summary.chunks,
        marks = summary.marks,
        "punctuation restored"
    );
    Ok(summary)
}

/// Run chunking, labeling, alignment and reassembly for `text`, writing
/// each intermediate artifact into `workspace`.
pub fn punctuate_text(
    config: &Config,
    text: &str,
    model: &Path,
    workspace: &Workspace,
    labeler: &dyn Labeler,
) -> Result<RunSummary> {
    let doc = chunk_text(text, config.chunking.max_tokens);
    if doc.is_empty() {
        tracing::warn!("input contains no tokens; writing empty output");
        return Ok(RunSummary {
            tokens: 0,
            chunks: 0,
            marks: 0,
            text: String::new(),
        });
    }
    tracing::info!(
        tokens = doc.token_count(),
        chunks = doc.chunk_count(),
        max_tokens = config.chunking.max_tokens,
        "chunked input"
    );

    let lower_path = workspace.write(Artifact::LowerConll, &to_conll_string(&doc.lower))?;
    workspace.write(Artifact::Conll, &to_conll_string(&doc.cased))?;

    tracing::info!(labeler = labeler.name(), model = %model.display(), "labeling");
    let predictions_raw = labeler
        .label(model, &lower_path)
        .with_context(|| format!("Labeler '{}' failed", labeler.name()))?;
    let predictions_path = workspace.write(Artifact::Predictions, &predictions_raw)?;

    let predictions = parse_predictions(&predictions_raw).with_context(|| {
        format!("Malformed labeler output in {}", predictions_path.display())
    })?;
    let pairs = align(&doc.cased, predictions)
        .with_context(|| "Labeler output does not match the input tokens")?;

    workspace.write(Artifact::OnlyPredictions, &render_labels(&doc.cased, &pairs))?;
    workspace.write(
        Artifact::CasedPredictions,
        &render_cased_predictions(&doc.cased, &pairs),
    )?;

    Ok(RunSummary {
        tokens: pairs.len(),
        chunks: doc.chunk_count(),
        marks: mark_count(&pairs),
        text: punctuate(&pairs, &config.reassemble),
    })
}

fn write_output(target: &OutputTarget, text: &str) -> Result<()> {
    match target {
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            std::fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "wrote output");
        }
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", text).with_context(|| "Failed to write to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
