//! Emphasis markup for literal query occurrences in display text.
//!
//! Only case-insensitive substring occurrences are marked; subsequence-only
//! and word-partial matches contribute to scoring but are not emphasized.

use regex::RegexBuilder;
use tracing::debug;

/// Opening emphasis marker wrapped around each occurrence.
pub const MARK_OPEN: &str = "<mark>";
/// Closing emphasis marker.
pub const MARK_CLOSE: &str = "</mark>";

/// Wrap every case-insensitive occurrence of the literal `query` in `text`
/// with emphasis markers. An empty query returns the text unchanged.
///
/// The query is escaped before the scanner is built, so metacharacters like
/// `(`, `[` or `*` match themselves instead of erroring or changing the
/// match semantics.
pub fn highlight(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let scanner = match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            // Unreachable with an escaped pattern; degrade to unmarked text.
            debug!(error = %e, "highlight scanner failed to build");
            return text.to_string();
        }
    };

    scanner
        .replace_all(text, format!("{MARK_OPEN}$0{MARK_CLOSE}").as_str())
        .into_owned()
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
