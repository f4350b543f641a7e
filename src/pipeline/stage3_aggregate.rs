use crate::model::metrics::{MetricVector, SubScores, clip01};
use crate::model::profile::AggregateWeights;

/// Weighted sum of the sub-scores with repetition inverted.
pub fn aggregate(sub: &SubScores, weights: &AggregateWeights) -> f64 {
    clip01(
        weights.lexical_diversity * sub.lexical_diversity
            + weights.inverse_repetition * (1.0 - sub.repetition)
            + weights.length_ok * sub.length_ok
            + weights.structure * sub.structure
            + weights.keyword_coverage * sub.keyword_coverage
            + weights.readability * sub.readability
            + weights.clarity_score * sub.clarity_score,
    )
}

pub fn run_stage3(sub: &SubScores, weights: &AggregateWeights) -> MetricVector {
    MetricVector::from_sub_scores(sub, aggregate(sub, weights))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_aggregate.rs"]
mod tests;
