//! # crf-punctuate core
//!
//! Pure, I/O-free logic for restoring punctuation with an external CRF
//! sequence labeler: chunking free text into CoNLL records, parsing the
//! labeler's predictions, aligning them with the original-case tokens, and
//! reassembling punctuated prose.
//!
//! ```text
//! text ──chunk──▶ ConllDocument ──(external labeler)──▶ predictions
//!                      │                                    │
//!                      └──────────── align ◀────────────────┘
//!                                      │
//!                                 reassemble ──▶ punctuated text
//! ```
//!
//! This crate does no filesystem or process work. The `crf-punctuate`
//! crate owns configuration, intermediate files, and the subprocess.

pub mod chunk;
pub mod conll;
pub mod models;
pub mod reassemble;
