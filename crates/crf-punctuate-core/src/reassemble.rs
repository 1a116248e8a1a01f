//! Rebuild punctuated prose from labeled tokens.
//!
//! Tokens are joined with single spaces; a token with a punctuation label is
//! followed by a space and the mark. The result always ends in a
//! sentence terminator unless it is empty.
//!
//! ```rust
//! use crf_punctuate_core::models::{Label, LabeledToken};
//! use crf_punctuate_core::reassemble::{punctuate, ReassembleOptions};
//!
//! let pairs = vec![
//!     LabeledToken::new("hello", Label::None),
//!     LabeledToken::new("world", Label::Mark(",".into())),
//!     LabeledToken::new("again", Label::None),
//! ];
//! assert_eq!(punctuate(&pairs, &ReassembleOptions::default()), "hello world , again .");
//! ```

use serde::Deserialize;

use crate::models::{Label, LabeledToken};

/// Controls the terminal-punctuation postcondition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReassembleOptions {
    /// Characters that count as already terminating the text.
    #[serde(default = "default_terminators")]
    pub terminators: Vec<char>,
    /// Mark appended (after a space) when the text lacks a terminator.
    #[serde(default = "default_terminal_mark")]
    pub terminal_mark: String,
}

fn default_terminators() -> Vec<char> {
    vec!['.']
}

fn default_terminal_mark() -> String {
    ".".to_string()
}

impl Default for ReassembleOptions {
    fn default() -> Self {
        Self {
            terminators: default_terminators(),
            terminal_mark: default_terminal_mark(),
        }
    }
}

/// Interleave tokens and predicted marks, then trim trailing whitespace.
pub fn place_punctuation(pairs: &[LabeledToken]) -> String {
    let mut text = String::new();
    for pair in pairs {
        text.push_str(&pair.token);
        text.push(' ');
        if let Label::Mark(mark) = &pair.label {
            text.push_str(mark);
            text.push(' ');
        }
    }
    text.truncate(text.trim_end().len());
    text
}

/// Append `" <terminal_mark>"` unless `text` is empty or already ends in
/// one of the configured terminators.
pub fn ensure_terminal(mut text: String, options: &ReassembleOptions) -> String {
    match text.chars().last() {
        None => text,
        Some(last) if options.terminators.contains(&last) => text,
        Some(_) => {
            text.push(' ');
            text.push_str(&options.terminal_mark);
            text
        }
    }
}

/// [`place_punctuation`] followed by [`ensure_terminal`].
pub fn punctuate(pairs: &[LabeledToken], options: &ReassembleOptions) -> String {
    ensure_terminal(place_punctuation(pairs), options)
}

/// Number of pairs carrying a punctuation mark.
pub fn mark_count(pairs: &[LabeledToken]) -> usize {
    pairs.iter().filter(|p| p.label != Label::None).count()
}
