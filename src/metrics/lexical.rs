use std::collections::{HashMap, HashSet};

use crate::model::metrics::safe_ratio;

/// Distinct tokens over total tokens.
pub fn lexical_diversity(tokens: &[String]) -> f64 {
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    safe_ratio(distinct.len(), tokens.len())
}

/// Share of contiguous `n`-gram occurrences whose n-gram appears more than
/// once. Fewer than `n` tokens scores 0.
pub fn repetition(tokens: &[String], n: usize) -> f64 {
    if n == 0 || tokens.len() < n {
        return 0.0;
    }
    let mut counts: HashMap<&[String], usize> = HashMap::new();
    for gram in tokens.windows(n) {
        *counts.entry(gram).or_insert(0) += 1;
    }
    let total = tokens.len() - n + 1;
    let repeated: usize = counts.values().filter(|&&c| c > 1).sum();
    safe_ratio(repeated, total)
}

/// Distinct prompt tokens longer than `min_len` characters.
pub fn prompt_keywords(prompt_tokens: &[String], min_len: usize) -> HashSet<&str> {
    prompt_tokens
        .iter()
        .map(String::as_str)
        .filter(|t| t.chars().count() > min_len)
        .collect()
}

/// Fraction of distinct prompt keywords that also occur in the response.
pub fn keyword_coverage(prompt_tokens: &[String], tokens: &[String], min_len: usize) -> f64 {
    let keywords = prompt_keywords(prompt_tokens, min_len);
    if keywords.is_empty() {
        return 0.0;
    }
    let present: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let covered = keywords.iter().filter(|k| present.contains(*k)).count();
    safe_ratio(covered, keywords.len())
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/lexical.rs"]
mod tests;
