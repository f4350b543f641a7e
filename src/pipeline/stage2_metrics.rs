use crate::metrics::{
    ReadingEase, clarity_score, keyword_coverage, length_ok, lexical_diversity,
    readability_score, repetition, structure_score,
};
use crate::model::metrics::SubScores;
use crate::model::profile::ScoringProfile;
use crate::pipeline::stage1_prepare::{PreparedPrompt, PreparedText};

pub struct Stage2Inputs<'a> {
    pub text: &'a PreparedText<'a>,
    pub prompt: &'a PreparedPrompt,
    pub profile: &'a ScoringProfile,
    pub estimator: &'a dyn ReadingEase,
}

pub fn run_stage2(inputs: &Stage2Inputs<'_>) -> SubScores {
    let text = inputs.text;
    let profile = inputs.profile;
    SubScores {
        lexical_diversity: lexical_diversity(&text.tokens),
        repetition: repetition(&text.tokens, profile.ngram_n),
        length_ok: length_ok(text.tokens.len(), profile.length_min, profile.length_max),
        structure: structure_score(text.raw),
        keyword_coverage: keyword_coverage(
            &inputs.prompt.tokens,
            &text.tokens,
            profile.keyword_min_len,
        ),
        readability: readability_score(text.raw, inputs.estimator, profile),
        clarity_score: clarity_score(
            &text.sentences,
            profile.clarity_lo,
            profile.clarity_hi,
            profile.clarity_falloff,
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_metrics.rs"]
mod tests;
