use thiserror::Error;

use crate::model::metrics::clip01;
use crate::model::profile::ScoringProfile;
use crate::text::{count_syllables, split_sentences, tokenize};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReadabilityError {
    /// Empty or word-free text. Scored as a failure, so it takes the neutral
    /// value (0.5) rather than the formula's unclamped maximum of 206.835,
    /// which would clamp to 1.0.
    #[error("text has no words")]
    NoWords,
    #[error("reading ease is not finite: {0}")]
    NonFinite(f64),
}

/// Reading-ease capability backing the readability metric.
pub trait ReadingEase: Sync {
    fn estimate_reading_ease(&self, text: &str) -> Result<f64, ReadabilityError>;
}

/// Flesch Reading Ease with a vowel-group syllable heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschReadingEase;

impl ReadingEase for FleschReadingEase {
    fn estimate_reading_ease(&self, text: &str) -> Result<f64, ReadabilityError> {
        let words: Vec<String> = tokenize(text)
            .into_iter()
            .filter(|w| w.chars().any(|c| c.is_ascii_alphabetic()))
            .collect();
        if words.is_empty() {
            return Err(ReadabilityError::NoWords);
        }
        let n_sentences = split_sentences(text).len().max(1) as f64;
        let n_words = words.len() as f64;
        let n_syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

        let ease = 206.835 - 1.015 * (n_words / n_sentences) - 84.6 * (n_syllables as f64 / n_words);
        if ease.is_finite() {
            Ok(ease)
        } else {
            Err(ReadabilityError::NonFinite(ease))
        }
    }
}

/// Reading ease clamped to the profile range and remapped to `[0, 1]`.
/// Estimation failures fall back to the neutral raw value.
pub fn readability_score(
    text: &str,
    estimator: &dyn ReadingEase,
    profile: &ScoringProfile,
) -> f64 {
    let raw = match estimator.estimate_reading_ease(text) {
        Ok(v) if v.is_finite() => v,
        Ok(v) => {
            tracing::debug!(value = v, "non-finite reading ease; using neutral value");
            profile.readability_neutral
        }
        Err(err) => {
            tracing::debug!(%err, "reading ease unavailable; using neutral value");
            profile.readability_neutral
        }
    };
    let lo = profile.readability_floor;
    let hi = profile.readability_ceil;
    clip01((raw.clamp(lo, hi) - lo) / (hi - lo))
}

#[cfg(test)]
#[path = "../../tests/src_inline/metrics/readability.rs"]
mod tests;
