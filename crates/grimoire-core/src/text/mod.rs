//! Text processing utilities for tokenization and keyword extraction

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Tokens kept per text; bounds cost for very long content
pub const MAX_TOKENS: usize = 200;

/// Tokens this short or shorter are dropped as noise ("a", "to", "is")
pub const MIN_TOKEN_LEN: usize = 3;

/// Matches anything that is neither `[a-z0-9]` nor whitespace
static NON_WORD: OnceLock<Regex> = OnceLock::new();

fn get_non_word() -> &'static Regex {
    NON_WORD.get_or_init(|| Regex::new(r"[^a-z0-9\s]").expect("static regex is valid"))
}

/// Lowercase, blank out punctuation, split on whitespace and drop short tokens.
///
/// Punctuation becomes a space so it splits words instead of merging them.
/// The result holds at most [`MAX_TOKENS`] tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    get_non_word()
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|s| s.len() >= MIN_TOKEN_LEN)
        .take(MAX_TOKENS)
        .map(|s| s.to_string())
        .collect()
}

/// Distinct tokens of a text
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Token counts in first-occurrence order
pub fn term_frequencies(tokens: &[String]) -> Vec<(String, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        match positions.get(token.as_str()) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(token.as_str(), counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }

    counts
}

/// Top `n` tokens by frequency; ties keep first-occurrence order
pub fn top_keywords(tokens: &[String], n: usize) -> Vec<String> {
    let mut counts = term_frequencies(tokens);
    // stable sort preserves first-occurrence order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(n).map(|(t, _)| t).collect()
}

/// Most frequent token, ties broken by first occurrence
pub fn dominant_keyword(tokens: &[String]) -> Option<String> {
    top_keywords(tokens, 1).into_iter().next()
}
