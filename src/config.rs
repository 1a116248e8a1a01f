use anyhow::{Context, Result};
use crf_punctuate_core::chunk::DEFAULT_MAX_TOKENS;
use crf_punctuate_core::reassemble::ReassembleOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub labeler: LabelerConfig,
    #[serde(default)]
    pub reassemble: ReassembleOptions,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChunkingConfig {
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}

#[derive(Debug, Deserialize, Clone)]
pub struct LabelerConfig {
    /// Executable name or path of the CRF tagger.
    #[serde(default = "default_binary")]
    pub binary: PathBuf,
    /// Extra arguments placed before `-m <model> <file>`.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            args: Vec::new(),
        }
    }
}

fn default_binary() -> PathBuf {
    PathBuf::from("crf_test")
}

impl Config {
    /// Built-in defaults, used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_tokens == 0 {
            anyhow::bail!("chunking.max_tokens must be > 0");
        }
        if self.labeler.binary.as_os_str().is_empty() {
            anyhow::bail!("labeler.binary must not be empty");
        }
        if self.reassemble.terminal_mark.trim().is_empty() {
            anyhow::bail!("reassemble.terminal_mark must not be empty");
        }
        if self.reassemble.terminal_mark.chars().any(char::is_whitespace) {
            anyhow::bail!("reassemble.terminal_mark must not contain whitespace");
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
}

/// Load `path` if one was given, otherwise use [`Config::minimal`].
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => load_config(p),
        None => Ok(Config::minimal()),
    }
}
