//! External CRF labeler invocation.
//!
//! The labeler is an opaque subprocess (CRF++'s `crf_test` by default) that
//! reads a one-token-per-line CoNLL file and prints `<token>\t<label>` for
//! each token. [`Labeler`] is the seam the pipeline calls through so tests
//! and alternative taggers can stand in for the real binary.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::LabelerConfig;

/// Predicts one label per token of a CoNLL file.
pub trait Labeler {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Label the tokens in `input` using `model`, returning the raw
    /// tab-separated output.
    fn label(&self, model: &Path, input: &Path) -> Result<String>;
}

/// Runs a CRF++-compatible `crf_test` binary as a subprocess.
#[derive(Debug, Clone)]
pub struct CrfTestLabeler {
    binary: PathBuf,
    args: Vec<String>,
    name: String,
}

impl CrfTestLabeler {
    pub fn new(binary: impl Into<PathBuf>, args: Vec<String>) -> Self {
        let binary = binary.into();
        let name = binary.display().to_string();
        Self { binary, args, name }
    }

    pub fn from_config(config: &LabelerConfig) -> Self {
        Self::new(config.binary.clone(), config.args.clone())
    }

    fn command(&self, model: &Path, input: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.args(&self.args);
        cmd.arg("-m").arg(model);
        cmd.arg(input);
        cmd
    }
}

impl Labeler for CrfTestLabeler {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self, model: &Path, input: &Path) -> Result<String> {
        let mut cmd = self.command(model, input);
        tracing::debug!(command = ?cmd, "running labeler");

        let output = cmd.output().with_context(|| {
            format!(
                "Failed to execute '{}'. Is CRF++ installed and on PATH?",
                self.binary.display()
            )
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} failed ({}): {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            );
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            tracing::debug!(stderr = %stderr.trim(), "labeler stderr");
        }

        String::from_utf8(output.stdout)
            .with_context(|| format!("{} produced non-UTF-8 output", self.binary.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_places_extra_args_before_model() {
        let labeler = CrfTestLabeler::new("crf_test", vec!["-v0".to_string()]);
        let cmd = labeler.command(Path::new("model.crf"), Path::new("in.txt"));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(args, vec!["-v0", "-m", "model.crf", "in.txt"]);
        assert_eq!(labeler.name(), "crf_test");
    }

    #[test]
    fn missing_binary_is_reported() {
        let labeler = CrfTestLabeler::new("/nonexistent/crf_test", Vec::new());
        let err = labeler
            .label(Path::new("model"), Path::new("input"))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to execute"));
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_carries_stderr() {
        let labeler = CrfTestLabeler::new(
            "sh",
            vec![
                "-c".to_string(),
                "echo 'model not found' >&2; exit 3".to_string(),
                "sh".to_string(),
            ],
        );
        let err = labeler
            .label(Path::new("model"), Path::new("input"))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("model not found"), "{}", msg);
        assert!(msg.contains("sh failed"), "{}", msg);
    }

    #[cfg(unix)]
    #[test]
    fn successful_run_returns_stdout() {
        // `sh -c script sh -m model input` binds $1=-m $2=model $3=input.
        let labeler = CrfTestLabeler::new(
            "sh",
            vec![
                "-c".to_string(),
                "printf 'x\\t0\\n%s\\t,\\n' \"$3\"".to_string(),
                "sh".to_string(),
            ],
        );
        let out = labeler
            .label(Path::new("model"), Path::new("input"))
            .unwrap();
        assert_eq!(out, "x\t0\ninput\t,\n");
    }
}
