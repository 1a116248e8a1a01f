//! Fixed-width CoNLL chunker.
//!
//! Splits whitespace-tokenized text into groups of at most `max_tokens`
//! tokens so that no sequence handed to the CRF labeler exceeds its length
//! limit. Groups are separated by an empty record, which becomes a blank
//! line in the CoNLL file. Boundaries carry no meaning beyond that limit.
//!
//! # Algorithm
//!
//! 1. Split the text on Unicode whitespace.
//! 2. Before the token at 0-based position `i`, emit a separator when
//!    `i > 0 && i % max_tokens == 0`.
//! 3. Emit the token as-is into the cased sequence and lower-cased into the
//!    lower sequence.
//!
//! # Example
//!
//! ```rust
//! use crf_punctuate_core::chunk::chunk_text;
//!
//! let doc = chunk_text("Hello World again", 2);
//! assert_eq!(doc.cased, vec!["Hello", "World", "", "again"]);
//! assert_eq!(doc.lower, vec!["hello", "world", "", "again"]);
//! ```

use crate::models::ConllDocument;

/// Default chunk length accepted by the bundled punctuation model.
pub const DEFAULT_MAX_TOKENS: usize = 25;

/// Chunk `text` into cased and lower-cased CoNLL records.
///
/// Empty or whitespace-only text yields two empty sequences. A
/// `max_tokens` of 0 is treated as 1; callers validate it beforehand.
pub fn chunk_text(text: &str, max_tokens: usize) -> ConllDocument {
    let max_tokens = max_tokens.max(1);
    let mut doc = ConllDocument::default();

    for (count, token) in text.split_whitespace().enumerate() {
        if count > 0 && count % max_tokens == 0 {
            doc.cased.push(String::new());
            doc.lower.push(String::new());
        }
        doc.cased.push(token.to_string());
        doc.lower.push(token.to_lowercase());
    }

    doc
}

/// Iterate the real tokens of a record sequence, skipping separators.
pub fn tokens(records: &[String]) -> impl Iterator<Item = &str> {
    records.iter().map(String::as_str).filter(|r| !r.is_empty())
}

/// Render records as CoNLL lines: one record per line, trailing newline.
///
/// An empty sequence renders as a single `"\n"`.
pub fn to_conll_string(records: &[String]) -> String {
    let mut out = records.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_has_no_separators() {
        let doc = chunk_text("hello world this is a test", DEFAULT_MAX_TOKENS);
        assert_eq!(doc.cased.len(), 6);
        assert_eq!(doc.lower.len(), 6);
        assert!(doc.cased.iter().all(|r| !r.is_empty()));
        assert_eq!(doc.chunk_count(), 1);
    }

    #[test]
    fn lower_mirrors_cased() {
        let doc = chunk_text("The Quick BROWN fox", DEFAULT_MAX_TOKENS);
        assert_eq!(doc.cased, vec!["The", "Quick", "BROWN", "fox"]);
        assert_eq!(doc.lower, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn empty_text_yields_empty_sequences() {
        let doc = chunk_text("", DEFAULT_MAX_TOKENS);
        assert!(doc.cased.is_empty());
        assert!(doc.lower.is_empty());

        let doc = chunk_text(" \n\t  ", DEFAULT_MAX_TOKENS);
        assert!(doc.is_empty());
    }

    #[test]
    fn separator_before_every_nth_token() {
        let text = (0..7).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ");
        let doc = chunk_text(&text, 3);
        assert_eq!(
            doc.cased,
            vec!["w0", "w1", "w2", "", "w3", "w4", "w5", "", "w6"]
        );
        assert_eq!(doc.chunk_count(), 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_separator() {
        let doc = chunk_text("a b c d e f", 3);
        assert_eq!(doc.cased, vec!["a", "b", "c", "", "d", "e", "f"]);
        assert_eq!(doc.cased.last().map(String::as_str), Some("f"));
        assert_eq!(doc.chunk_count(), 2);
    }

    #[test]
    fn chunk_count_is_ceil_of_tokens_over_limit() {
        for n in 1..=30usize {
            let text = vec!["tok"; n].join(" ");
            for limit in [1usize, 4, 25] {
                let doc = chunk_text(&text, limit);
                assert_eq!(doc.chunk_count(), n.div_ceil(limit), "n={} limit={}", n, limit);
            }
        }
    }

    #[test]
    fn tokens_preserve_order_across_separators() {
        let text = "One two  Three\nfour\tfive six seven eight nine";
        let doc = chunk_text(text, 2);
        let rebuilt: Vec<&str> = tokens(&doc.cased).collect();
        let expected: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rebuilt, expected);
        assert_eq!(doc.token_count(), expected.len());
    }

    #[test]
    fn limit_of_one_separates_every_token() {
        let doc = chunk_text("a b c", 1);
        assert_eq!(doc.cased, vec!["a", "", "b", "", "c"]);
    }

    #[test]
    fn conll_string_uses_blank_lines_for_separators() {
        let doc = chunk_text("A b C", 2);
        assert_eq!(to_conll_string(&doc.lower), "a\nb\n\nc\n");
        assert_eq!(to_conll_string(&[]), "\n");
    }
}
