use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AggregateMode {
    /// Seven-term weighting including clarity.
    SevenTerm,
    /// Earlier six-term weighting; clarity is reported but not weighted.
    LegacySixTerm,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateWeights {
    pub lexical_diversity: f64,
    pub inverse_repetition: f64,
    pub length_ok: f64,
    pub structure: f64,
    pub keyword_coverage: f64,
    pub readability: f64,
    pub clarity_score: f64,
}

impl AggregateWeights {
    pub fn seven_term() -> Self {
        Self {
            lexical_diversity: 0.18,
            inverse_repetition: 0.12,
            length_ok: 0.18,
            structure: 0.14,
            keyword_coverage: 0.14,
            readability: 0.12,
            clarity_score: 0.12,
        }
    }

    pub fn legacy_six_term() -> Self {
        Self {
            lexical_diversity: 0.20,
            inverse_repetition: 0.15,
            length_ok: 0.20,
            structure: 0.15,
            keyword_coverage: 0.15,
            readability: 0.15,
            clarity_score: 0.0,
        }
    }

    pub fn as_array(&self) -> [f64; 7] {
        [
            self.lexical_diversity,
            self.inverse_repetition,
            self.length_ok,
            self.structure,
            self.keyword_coverage,
            self.readability,
            self.clarity_score,
        ]
    }

    pub fn sum(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    pub ngram_n: usize,
    pub length_min: usize,
    pub length_max: usize,
    /// Prompt tokens must be strictly longer than this to count as keywords.
    pub keyword_min_len: usize,
    pub readability_floor: f64,
    pub readability_ceil: f64,
    pub readability_neutral: f64,
    pub clarity_lo: f64,
    pub clarity_hi: f64,
    pub clarity_falloff: f64,
    pub weights: AggregateWeights,
    pub aggregate_mode: AggregateMode,
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid profile: {0}")]
    Invalid(String),
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            ngram_n: 3,
            length_min: 30,
            length_max: 220,
            keyword_min_len: 3,
            readability_floor: -20.0,
            readability_ceil: 120.0,
            readability_neutral: 50.0,
            clarity_lo: 12.0,
            clarity_hi: 24.0,
            clarity_falloff: 24.0,
            weights: AggregateWeights::seven_term(),
            aggregate_mode: AggregateMode::SevenTerm,
        }
    }

    pub fn legacy_v0() -> Self {
        let mut base = Self::default_v1();
        base.weights = AggregateWeights::legacy_six_term();
        base.aggregate_mode = AggregateMode::LegacySixTerm;
        base
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ProfileError> {
        let raw = std::fs::read_to_string(path)?;
        let profile: Self = serde_json::from_str(&raw)?;
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.ngram_n == 0 {
            return Err(ProfileError::Invalid("ngram_n must be positive".to_string()));
        }
        if self.length_min > self.length_max {
            return Err(ProfileError::Invalid(format!(
                "length band is inverted: [{}, {}]",
                self.length_min, self.length_max
            )));
        }
        if !(self.readability_floor < self.readability_ceil) {
            return Err(ProfileError::Invalid(format!(
                "readability clamp is empty: [{}, {}]",
                self.readability_floor, self.readability_ceil
            )));
        }
        if !self.readability_neutral.is_finite() {
            return Err(ProfileError::Invalid(
                "readability_neutral must be finite".to_string(),
            ));
        }
        if !(self.clarity_lo <= self.clarity_hi) {
            return Err(ProfileError::Invalid(format!(
                "clarity band is inverted: [{}, {}]",
                self.clarity_lo, self.clarity_hi
            )));
        }
        if !(self.clarity_falloff > 0.0) {
            return Err(ProfileError::Invalid(
                "clarity_falloff must be positive".to_string(),
            ));
        }
        for w in self.weights.as_array() {
            if !w.is_finite() || w < 0.0 {
                return Err(ProfileError::Invalid(format!(
                    "aggregate weight out of range: {w}"
                )));
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ProfileError::Invalid(format!(
                "aggregate weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
