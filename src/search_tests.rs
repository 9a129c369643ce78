use std::sync::Arc;

use super::*;
use crate::tab::TabId;

/// Helper to build a candidate with the fields the engine scores.
fn tab(id: u32, title: &str, url: &str) -> Arc<TabEntry> {
    Arc::new(TabEntry {
        id: TabId(id),
        title: title.to_string(),
        url: url.to_string(),
        favicon: None,
        window_id: 0,
    })
}

fn ids(matches: &[TabMatch]) -> Vec<u32> {
    matches.iter().map(|m| m.tab.id.0).collect()
}

// ============================================
// SUBSEQUENCE MATCH
// ============================================

#[test]
fn test_subsequence_empty_pattern_matches_everything() {
    assert!(is_subsequence_match("anything", ""));
    assert!(is_subsequence_match("", ""));
}

#[test]
fn test_subsequence_in_order_with_gaps() {
    assert!(is_subsequence_match("GitHub - Pull Requests", "ghpr"));
    assert!(is_subsequence_match("github", "git"));
}

#[test]
fn test_subsequence_respects_order() {
    // All characters present but out of order.
    assert!(!is_subsequence_match("github", "tig"));
}

#[test]
fn test_subsequence_fails_on_missing_char() {
    // No 'i' anywhere in "google".
    assert!(!is_subsequence_match("google", "git"));
}

#[test]
fn test_subsequence_is_case_insensitive() {
    assert!(is_subsequence_match("GitHub", "github"));
}

// ============================================
// CASE-FOLDING HELPERS
// ============================================

#[test]
fn test_find_ignore_ascii_case() {
    assert_eq!(find_ignore_ascii_case("GitHub", "git"), Some(0));
    assert_eq!(find_ignore_ascii_case("My GitHub", "git"), Some(3));
    assert_eq!(find_ignore_ascii_case("Google", "git"), None);
    assert_eq!(find_ignore_ascii_case("", ""), Some(0));
    assert_eq!(find_ignore_ascii_case("ab", "abc"), None);
}

#[test]
fn test_contains_ignore_ascii_case() {
    assert!(contains_ignore_ascii_case("https://GITHUB.com", "github"));
    assert!(!contains_ignore_ascii_case("google", "hub"));
}

// ============================================
// SCORING
// ============================================

#[test]
fn test_score_title_prefix_stacks_with_substring() {
    // Prefix hit triggers both the substring and the prefix bonus, plus
    // subsequence and the word bonus.
    let t = tab(1, "GitHub", "");
    let score = score_tab(&t, "git");
    assert_eq!(score, 100 + 50 + 30 + 10);
}

#[test]
fn test_score_url_only_match() {
    let t = tab(1, "Dashboard", "https://github.com/x");
    let score = score_tab(&t, "github");
    // url substring (not prefix) + url subsequence + word bonus (the url is
    // one whitespace-delimited word containing "github").
    assert_eq!(score, 40 + 20 + 10);
}

#[test]
fn test_score_zero_for_no_match() {
    let t = tab(1, "Google", "https://google.com");
    assert_eq!(score_tab(&t, "git"), 0);
}

#[test]
fn test_score_word_bonus_skips_short_words() {
    let t = tab(1, "a list of things", "");
    // Single-char query words never earn the word bonus; "a" still matches
    // as a substring and subsequence of the title.
    let score = score_tab(&t, "a");
    assert_eq!(score, 100 + 50 + 30);
}

#[test]
fn test_score_word_bonus_counts_each_query_word() {
    let t = tab(1, "rust async book", "");
    // Neither word is a substring of the whole title in order ("book rust"),
    // and "book rust" is not a subsequence either, but both words match
    // individually.
    let score = score_tab(&t, "book rust");
    assert_eq!(score, 10 + 10);
}

// ============================================
// FILTER AND RANK
// ============================================

#[test]
fn test_zero_score_excluded_and_positive_included() {
    let candidates = vec![
        tab(1, "GitHub - PRs", "https://github.com/x"),
        tab(2, "Google", "https://google.com"),
    ];
    let ranked = filter_and_rank(&candidates, "git");
    assert_eq!(ids(&ranked), vec![1]);
    assert!(ranked[0].score > 0);
}

#[test]
fn test_empty_query_returns_input_order_unscored() {
    let candidates = vec![tab(3, "c", ""), tab(1, "a", ""), tab(2, "b", "")];
    let ranked = filter_and_rank(&candidates, "");
    assert_eq!(ids(&ranked), vec![3, 1, 2]);
    assert!(ranked.iter().all(|m| m.score == 0));
}

#[test]
fn test_whitespace_query_returns_input_order() {
    let candidates = vec![tab(1, "a", ""), tab(2, "b", "")];
    let ranked = filter_and_rank(&candidates, "  ");
    assert_eq!(ids(&ranked), vec![1, 2]);
}

#[test]
fn test_equal_scores_keep_fetch_order() {
    // Identical titles score identically; fetch order must survive the sort.
    let candidates = vec![
        tab(5, "Rust Blog", ""),
        tab(2, "Rust Blog", ""),
        tab(9, "Rust Blog", ""),
    ];
    let ranked = filter_and_rank(&candidates, "rust");
    assert_eq!(ids(&ranked), vec![5, 2, 9]);
}

#[test]
fn test_higher_score_sorts_first() {
    let candidates = vec![
        tab(1, "Some page about rust", ""),
        tab(2, "rust-lang", "https://rust-lang.org"),
    ];
    let ranked = filter_and_rank(&candidates, "rust");
    // Tab 2 gets the title prefix bonus and url hits; tab 1 does not.
    assert_eq!(ids(&ranked), vec![2, 1]);
}

#[test]
fn test_score_membership_equivalence() {
    let candidates = vec![
        tab(1, "GitHub", ""),
        tab(2, "Google", ""),
        tab(3, "git hooks guide", ""),
    ];
    let query = "git";
    let ranked = filter_and_rank(&candidates, query);
    for c in &candidates {
        let present = ranked.iter().any(|m| m.tab.id == c.id);
        assert_eq!(present, score_tab(c, query) > 0, "candidate {}", c.id.0);
    }
}
