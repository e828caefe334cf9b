//! Commit subject normalization
//!
//! Strips the decoration people put in front of a conventional type token
//! (ticket brackets, emoji, bullets) so the classifier sees the prefix.

use regex::Regex;
use std::sync::LazyLock;

/// A `[anything]` token at position 0, with trailing whitespace
static LEADING_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[[^\]]*\]\s+").expect("Invalid regex"));

/// A leading run of non-letter characters (emoji, bullets, punctuation)
static LEADING_NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\P{L}+").expect("Invalid regex"));

/// Normalize a raw commit subject.
///
/// Removes, at most once each and in this order: a leading bracketed
/// token plus whitespace, then any leading run of non-letter characters.
/// The bracket form is stripped first so `[#123] feat: x` is not doubly
/// stripped. Idempotent.
pub fn normalize(subject: &str) -> String {
    let stripped = LEADING_BRACKET.replace(subject, "");
    LEADING_NON_LETTER.replace(&stripped, "").into_owned()
}
