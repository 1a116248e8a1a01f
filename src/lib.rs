//! # crf-punctuate
//!
//! Restores punctuation in free-form text using a pre-trained CRF sequence
//! labeler (CRF++ `crf_test`) as an external collaborator.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌──────────────┐   ┌─────────────┐
//! │  input   │──▶│  chunker   │──▶│  crf_test    │──▶│ reassembler │──▶ output
//! │  text    │   │ (CoNLL ×2) │   │ (subprocess) │   │  + align    │
//! └──────────┘   └────────────┘   └──────────────┘   └─────────────┘
//! ```
//!
//! The pure stages live in [`crf_punctuate_core`]; this crate adds
//! configuration, the subprocess seam, scoped intermediate files, and the
//! `punctuate` binary.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`labeler`] | External labeler trait and `crf_test` subprocess |
//! | [`workspace`] | Scoped intermediate-file directory |
//! | [`pipeline`] | End-to-end orchestration |

pub mod config;
pub mod labeler;
pub mod pipeline;
pub mod workspace;
