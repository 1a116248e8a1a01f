//! Parsing and rendering of the labeler's CoNLL output.
//!
//! The CRF labeler echoes each input token followed by its predicted label,
//! `<token>\t<label>`, one line per token, with blank lines between chunks.
//! Only the label column is used: it is paired by position with the
//! original-case tokens, after checking that the two sequences agree.

use thiserror::Error;

use crate::chunk::tokens;
use crate::models::{Label, LabeledToken};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("prediction line {line}: expected 2 columns, found {found}: {content:?}")]
    ColumnCount {
        line: usize,
        found: usize,
        content: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
    #[error("labeler returned {labels} labels for {tokens} tokens")]
    CountMismatch { tokens: usize, labels: usize },
    #[error("token {position} mismatch: input has {expected:?}, labeler returned {found:?}")]
    TokenMismatch {
        position: usize,
        expected: String,
        found: String,
    },
}

/// Parse labeler output into `(token, label)` pairs, skipping blank lines.
///
/// Columns are split on whitespace; every non-blank line must have exactly
/// two. Line numbers in errors are 1-based.
pub fn parse_predictions(output: &str) -> Result<Vec<LabeledToken>, ParseError> {
    let mut predictions = Vec::new();

    for (idx, line) in output.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let columns: Vec<&str> = trimmed.split_whitespace().collect();
        match columns.as_slice() {
            [token, label] => predictions.push(LabeledToken::new(*token, Label::parse(label))),
            _ => {
                return Err(ParseError::ColumnCount {
                    line: idx + 1,
                    found: columns.len(),
                    content: trimmed.to_string(),
                })
            }
        }
    }

    Ok(predictions)
}

/// Pair original-case tokens with predicted labels.
///
/// `cased` may contain empty separator records; they are skipped. Each
/// prediction's token must equal the lower-cased input token at the same
/// position.
pub fn align(
    cased: &[String],
    predictions: Vec<LabeledToken>,
) -> Result<Vec<LabeledToken>, AlignError> {
    let token_count = tokens(cased).count();
    if token_count != predictions.len() {
        return Err(AlignError::CountMismatch {
            tokens: token_count,
            labels: predictions.len(),
        });
    }

    tokens(cased)
        .zip(predictions)
        .enumerate()
        .map(|(position, (token, prediction))| {
            let expected = token.to_lowercase();
            if prediction.token != expected {
                return Err(AlignError::TokenMismatch {
                    position,
                    expected,
                    found: prediction.token,
                });
            }
            Ok(LabeledToken::new(token, prediction.label))
        })
        .collect()
}

/// Render the label column alone, one line per record, blank at separators.
pub fn render_labels(records: &[String], pairs: &[LabeledToken]) -> String {
    render_aligned(records, pairs, |pair| pair.label.to_string())
}

/// Render `<cased token>\t<label>` lines, blank at separators.
pub fn render_cased_predictions(records: &[String], pairs: &[LabeledToken]) -> String {
    render_aligned(records, pairs, |pair| format!("{}\t{}", pair.token, pair.label))
}

fn render_aligned<F>(records: &[String], pairs: &[LabeledToken], line: F) -> String
where
    F: Fn(&LabeledToken) -> String,
{
    let mut pairs = pairs.iter();
    let mut out = String::new();
    for record in records {
        if !record.is_empty() {
            if let Some(pair) = pairs.next() {
                out.push_str(&line(pair));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::chunk_text;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_tab_separated_lines_and_skips_blanks() {
        let out = "hello\t0\nworld\t,\n\nthis\t0\n";
        let preds = parse_predictions(out).unwrap();
        assert_eq!(preds.len(), 3);
        assert_eq!(preds[1], LabeledToken::new("world", Label::Mark(",".into())));
        assert_eq!(preds[2].label, Label::None);
    }

    #[test]
    fn tolerates_crlf_and_trailing_whitespace() {
        let preds = parse_predictions("a\t0\r\nb\t?  \r\n").unwrap();
        assert_eq!(preds[1].label, Label::Mark("?".into()));
    }

    #[test]
    fn rejects_wrong_column_count() {
        let err = parse_predictions("a\t0\nb\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::ColumnCount {
                line: 2,
                found: 1,
                content: "b".into()
            }
        );

        let err = parse_predictions("a\tb\t0\n").unwrap_err();
        assert!(err.to_string().contains("found 3"));
    }

    #[test]
    fn align_restores_original_case() {
        let doc = chunk_text("Hello World", 25);
        let preds = parse_predictions("hello\t0\nworld\t!\n").unwrap();
        let pairs = align(&doc.cased, preds).unwrap();
        assert_eq!(pairs[0], LabeledToken::new("Hello", Label::None));
        assert_eq!(pairs[1], LabeledToken::new("World", Label::Mark("!".into())));
    }

    #[test]
    fn align_skips_separators() {
        let doc = chunk_text("a b c", 2);
        let preds = parse_predictions("a\t0\nb\t,\n\nc\t0\n").unwrap();
        let pairs = align(&doc.cased, preds).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].token, "c");
    }

    #[test]
    fn align_rejects_count_mismatch() {
        let cased = strings(&["a", "b"]);
        let preds = parse_predictions("a\t0\n").unwrap();
        assert_eq!(
            align(&cased, preds).unwrap_err(),
            AlignError::CountMismatch {
                tokens: 2,
                labels: 1
            }
        );
    }

    #[test]
    fn align_rejects_token_mismatch() {
        let cased = strings(&["Alpha", "Beta"]);
        let preds = parse_predictions("alpha\t0\ngamma\t0\n").unwrap();
        match align(&cased, preds).unwrap_err() {
            AlignError::TokenMismatch {
                position,
                expected,
                found,
            } => {
                assert_eq!(position, 1);
                assert_eq!(expected, "beta");
                assert_eq!(found, "gamma");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn renders_label_and_cased_files_with_separators() {
        let doc = chunk_text("A b C", 2);
        let preds = parse_predictions("a\t0\nb\t.\n\nc\t0\n").unwrap();
        let pairs = align(&doc.cased, preds).unwrap();
        assert_eq!(render_labels(&doc.cased, &pairs), "0\n.\n\n0\n");
        assert_eq!(
            render_cased_predictions(&doc.cased, &pairs),
            "A\t0\nb\t.\n\nC\t0\n"
        );
    }
}
