//! Scoped directory for the intermediate CoNLL and prediction files.
//!
//! File names are derived from the input's file stem (`notes.v2.txt` gives
//! `notes.v2-conll.txt`, …). By default everything lives in a fresh
//! temporary directory that is removed when the [`Workspace`] drops, on
//! success and on error alike. With a keep directory the files are written
//! there and left in place for inspection.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The five intermediate artifacts of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    /// Lower-cased tokens, the labeler's input.
    LowerConll,
    /// Original-case tokens.
    Conll,
    /// Raw labeler output.
    Predictions,
    /// Label column only.
    OnlyPredictions,
    /// Original-case tokens with their labels.
    CasedPredictions,
}

impl Artifact {
    pub const ALL: [Artifact; 5] = [
        Artifact::LowerConll,
        Artifact::Conll,
        Artifact::Predictions,
        Artifact::OnlyPredictions,
        Artifact::CasedPredictions,
    ];

    fn suffix(self) -> &'static str {
        match self {
            Artifact::LowerConll => "-lower-conll.txt",
            Artifact::Conll => "-conll.txt",
            Artifact::Predictions => "-preds.txt",
            Artifact::OnlyPredictions => "-only-preds.txt",
            Artifact::CasedPredictions => "-cased-preds.txt",
        }
    }
}

pub struct Workspace {
    dir: PathBuf,
    stem: String,
    // Held for its Drop; `None` when files are kept.
    _temp: Option<TempDir>,
}

impl Workspace {
    /// Create a workspace for `input`, either in `keep_dir` or in a new
    /// temporary directory.
    pub fn new(input: &Path, keep_dir: Option<&Path>) -> Result<Self> {
        let stem = file_stem(input);
        match keep_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create intermediate directory: {}", dir.display())
                })?;
                Ok(Self {
                    dir: dir.to_path_buf(),
                    stem,
                    _temp: None,
                })
            }
            None => {
                let temp = tempfile::Builder::new()
                    .prefix("punctuate-")
                    .tempdir()
                    .with_context(|| "Failed to create temporary directory")?;
                Ok(Self {
                    dir: temp.path().to_path_buf(),
                    stem,
                    _temp: Some(temp),
                })
            }
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_temporary(&self) -> bool {
        self._temp.is_some()
    }

    pub fn path(&self, artifact: Artifact) -> PathBuf {
        self.dir.join(format!("{}{}", self.stem, artifact.suffix()))
    }

    /// Write `content` to the artifact's file and return its path.
    pub fn write(&self, artifact: Artifact, content: &str) -> Result<PathBuf> {
        let path = self.path(artifact);
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote intermediate file");
        Ok(path)
    }
}

/// File stem of `input`, or `"input"` when it has none (e.g. `..`).
fn file_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "input".to_string())
}
