//! Ranking engine: scores and orders tab candidates against a query.
//!
//! Pure functions, no state. Scoring is a sum of independently-triggered
//! bonuses over the tab's title and URL; a candidate that triggers none of
//! them is excluded from the rendered list.

use std::sync::Arc;

use crate::tab::TabEntry;

// ============================================
// ASCII CASE-FOLDING HELPERS
// ============================================
// Case-insensitive comparisons byte-by-byte, no lowercase copies of the
// haystack. The needle must already be lowercase.

/// Check if haystack contains needle using ASCII case-insensitive matching.
/// `needle_lower` must already be lowercase.
#[inline]
pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle_lower: &str) -> bool {
    find_ignore_ascii_case(haystack, needle_lower).is_some()
}

/// Find the position of needle in haystack using ASCII case-insensitive
/// matching. `needle_lower` must already be lowercase.
#[inline]
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle_lower: &str) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle_lower.as_bytes();
    if n.is_empty() {
        return Some(0);
    }
    if n.len() > h.len() {
        return None;
    }
    'outer: for i in 0..=(h.len() - n.len()) {
        for j in 0..n.len() {
            if h[i + j].to_ascii_lowercase() != n[j] {
                continue 'outer;
            }
        }
        return Some(i);
    }
    None
}

/// Check whether every character of `pattern_lower` appears in order (not
/// necessarily contiguously) in `haystack`, scanning left to right.
/// Empty pattern matches everything.
pub fn is_subsequence_match(haystack: &str, pattern_lower: &str) -> bool {
    let mut pattern_chars = pattern_lower.chars().peekable();
    for ch in haystack.chars() {
        if let Some(&p) = pattern_chars.peek() {
            if ch.eq_ignore_ascii_case(&p) {
                pattern_chars.next();
            }
        }
    }
    pattern_chars.peek().is_none()
}

// ============================================
// SCORING
// ============================================

/// Score bonuses, highest-confidence signal first.
const TITLE_PREFIX_BONUS: u32 = 100;
const URL_PREFIX_BONUS: u32 = 90;
const TITLE_SUBSTRING_BONUS: u32 = 50;
const URL_SUBSTRING_BONUS: u32 = 40;
const TITLE_SUBSEQUENCE_BONUS: u32 = 30;
const URL_SUBSEQUENCE_BONUS: u32 = 20;
const WORD_MATCH_BONUS: u32 = 10;

/// Transient pairing of a candidate with its score for one query evaluation.
#[derive(Debug, Clone)]
pub struct TabMatch {
    pub tab: Arc<TabEntry>,
    pub score: u32,
}

/// Composite match score for one tab against a query, higher = better.
/// `query_lower` must already be lowercase. Returns 0 for no match at all.
pub fn score_tab(tab: &TabEntry, query_lower: &str) -> u32 {
    let mut score = 0u32;

    // Substring hits, with an extra bonus when the hit is a prefix.
    if let Some(pos) = find_ignore_ascii_case(&tab.title, query_lower) {
        score += TITLE_SUBSTRING_BONUS;
        if pos == 0 {
            score += TITLE_PREFIX_BONUS;
        }
    }
    if let Some(pos) = find_ignore_ascii_case(&tab.url, query_lower) {
        score += URL_SUBSTRING_BONUS;
        if pos == 0 {
            score += URL_PREFIX_BONUS;
        }
    }

    // Low-confidence fuzzy signal: characters in order, gaps allowed.
    if is_subsequence_match(&tab.title, query_lower) {
        score += TITLE_SUBSEQUENCE_BONUS;
    }
    if is_subsequence_match(&tab.url, query_lower) {
        score += URL_SUBSEQUENCE_BONUS;
    }

    // Word-by-word: each query word (len >= 2) found inside some
    // whitespace-delimited word of title or url counts once.
    for query_word in query_lower.split_whitespace() {
        if query_word.len() < 2 {
            continue;
        }
        let hit = tab
            .title
            .split_whitespace()
            .any(|w| contains_ignore_ascii_case(w, query_word))
            || tab
                .url
                .split_whitespace()
                .any(|w| contains_ignore_ascii_case(w, query_word));
        if hit {
            score += WORD_MATCH_BONUS;
        }
    }

    score
}

/// Filter and order candidates for one query.
///
/// An empty or whitespace-only query returns the candidates in fetch order,
/// unscored. Otherwise zero-score candidates are dropped and the rest are
/// sorted descending by score; `sort_by` is stable, so equal scores keep
/// their fetch order.
pub fn filter_and_rank(candidates: &[Arc<TabEntry>], query: &str) -> Vec<TabMatch> {
    if query.trim().is_empty() {
        return candidates
            .iter()
            .map(|tab| TabMatch {
                tab: Arc::clone(tab),
                score: 0,
            })
            .collect();
    }

    let query_lower = query.to_lowercase();
    let mut matches: Vec<TabMatch> = candidates
        .iter()
        .filter_map(|tab| {
            let score = score_tab(tab, &query_lower);
            (score > 0).then(|| TabMatch {
                tab: Arc::clone(tab),
                score,
            })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
