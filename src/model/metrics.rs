use serde::{Deserialize, Serialize};

/// Per-response quality scores. Every field lies in `[0, 1]` and is rounded
/// to four decimals for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricVector {
    pub lexical_diversity: f64,
    pub repetition: f64,
    pub length_ok: f64,
    pub structure: f64,
    pub keyword_coverage: f64,
    pub readability: f64,
    pub clarity_score: f64,
    pub aggregate_score: f64,
}

/// Raw sub-scores before aggregation and rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubScores {
    pub lexical_diversity: f64,
    pub repetition: f64,
    pub length_ok: f64,
    pub structure: f64,
    pub keyword_coverage: f64,
    pub readability: f64,
    pub clarity_score: f64,
}

pub const METRIC_NAMES: [&str; 8] = [
    "lexical_diversity",
    "repetition",
    "length_ok",
    "structure",
    "keyword_coverage",
    "readability",
    "clarity_score",
    "aggregate_score",
];

impl MetricVector {
    pub fn from_sub_scores(sub: &SubScores, aggregate: f64) -> Self {
        Self {
            lexical_diversity: round4(sub.lexical_diversity),
            repetition: round4(sub.repetition),
            length_ok: round4(sub.length_ok),
            structure: round4(sub.structure),
            keyword_coverage: round4(sub.keyword_coverage),
            readability: round4(sub.readability),
            clarity_score: round4(sub.clarity_score),
            aggregate_score: round4(aggregate),
        }
    }

    /// Values in `METRIC_NAMES` order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.lexical_diversity,
            self.repetition,
            self.length_ok,
            self.structure,
            self.keyword_coverage,
            self.readability,
            self.clarity_score,
            self.aggregate_score,
        ]
    }
}

/// Clamps to `[0, 1]`; NaN maps to 0.
pub fn clip01(x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        0.0
    } else if x > 1.0 {
        1.0
    } else {
        x
    }
}

pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Ratio with an empty denominator mapped to zero.
pub fn safe_ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}
