use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::metrics::clip01;
use crate::text::tokenize;

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[-*]\s+").unwrap());
static HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[A-Z].{0,80}:(\s|$)").unwrap());

const PARAGRAPH_CREDIT: f64 = 0.4;
const BULLET_CREDIT: f64 = 0.3;
const HEADING_CREDIT: f64 = 0.3;

/// Token-count fitness: 1 inside `[min, max]`, a linear ramp from 0 below it,
/// and a linear decay above it that reaches 0 at `2 * max`.
pub fn length_ok(n_tokens: usize, min: usize, max: usize) -> f64 {
    if (min..=max).contains(&n_tokens) {
        return 1.0;
    }
    let l = n_tokens as f64;
    if n_tokens < min {
        return clip01(l / min as f64);
    }
    if max == 0 {
        return 0.0;
    }
    let max = max as f64;
    clip01((max - (l - max)) / max)
}

/// Additive layout credit for paragraph breaks, bullet lines and
/// `Label:` headings, capped at 1.
pub fn structure_score(text: &str) -> f64 {
    let mut score = 0.0;
    if text.contains("\n\n") {
        score += PARAGRAPH_CREDIT;
    }
    if BULLET_RE.is_match(text) {
        score += BULLET_CREDIT;
    }
    if HEADING_RE.is_match(text) {
        score += HEADING_CREDIT;
    }
    score.min(1.0)
}

/// Mean sentence length in tokens rated against `[lo, hi]`; outside the band
/// the score falls linearly to 0 over `falloff` words.
pub fn clarity_score(sentences: &[&str], lo: f64, hi: f64, falloff: f64) -> f64 {
    let lengths: Vec<usize> = sentences
        .iter()
        .map(|s| tokenize(s).len())
        .filter(|&n| n > 0)
        .collect();
    if lengths.is_empty() {
        return 0.0;
    }
    let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
    if (lo..=hi).contains(&avg) {
        return 1.0;
    }
    let distance = if avg < lo { lo - avg } else { avg - hi };
    clip01(1.0 - distance / falloff)
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/shape.rs"]
mod tests;
