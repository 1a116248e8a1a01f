//! Core data types shared by the chunker, the prediction parser, and the
//! reassembler.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The label the CRF model uses for "no punctuation after this token".
pub const NO_PUNCTUATION: &str = "0";

/// Predicted label for a single token.
///
/// The label vocabulary comes from the model's training data, so anything
/// other than the sentinel `"0"` is kept verbatim as an opaque mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    None,
    Mark(String),
}

impl Label {
    pub fn parse(raw: &str) -> Self {
        if raw == NO_PUNCTUATION {
            Label::None
        } else {
            Label::Mark(raw.to_string())
        }
    }

    pub fn mark(&self) -> Option<&str> {
        match self {
            Label::None => None,
            Label::Mark(m) => Some(m),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::None => f.write_str(NO_PUNCTUATION),
            Label::Mark(m) => f.write_str(m),
        }
    }
}

/// An original-case token paired with its predicted label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledToken {
    pub token: String,
    pub label: Label,
}

impl LabeledToken {
    pub fn new(token: impl Into<String>, label: Label) -> Self {
        Self {
            token: token.into(),
            label,
        }
    }
}

/// The two chunked record sequences produced from one input text.
///
/// Both vectors have the same length. An empty string is a chunk separator;
/// every other record is a single whitespace-free token. `lower[i]` is
/// always `cased[i].to_lowercase()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConllDocument {
    pub cased: Vec<String>,
    pub lower: Vec<String>,
}

impl ConllDocument {
    pub fn is_empty(&self) -> bool {
        self.cased.is_empty()
    }

    /// Number of real tokens, separators excluded.
    pub fn token_count(&self) -> usize {
        self.cased.iter().filter(|r| !r.is_empty()).count()
    }

    /// Number of chunks (blank-line-delimited groups).
    pub fn chunk_count(&self) -> usize {
        if self.cased.is_empty() {
            return 0;
        }
        1 + self.cased.iter().filter(|r| r.is_empty()).count()
    }
}
