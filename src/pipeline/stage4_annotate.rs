use rayon::prelude::*;

use crate::metrics::{FleschReadingEase, ReadingEase};
use crate::model::entry::{AnnotatedEntry, GeneratedEntry};
use crate::model::metrics::MetricVector;
use crate::model::profile::{ProfileError, ScoringProfile};
use crate::pipeline::stage1_prepare::{PreparedPrompt, prepare_prompt, prepare_text};
use crate::pipeline::stage2_metrics::{Stage2Inputs, run_stage2};
use crate::pipeline::stage3_aggregate::run_stage3;

/// Stateless scoring engine: a profile plus a reading-ease backend.
pub struct Scorer {
    profile: ScoringProfile,
    estimator: Box<dyn ReadingEase + Send>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            profile: ScoringProfile::default_v1(),
            estimator: Box::new(FleschReadingEase),
        }
    }
}

impl Scorer {
    pub fn new(profile: ScoringProfile) -> Result<Self, ProfileError> {
        Self::with_estimator(profile, Box::new(FleschReadingEase))
    }

    /// Rejects profiles that fail [`ScoringProfile::validate`].
    pub fn with_estimator(
        profile: ScoringProfile,
        estimator: Box<dyn ReadingEase + Send>,
    ) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self { profile, estimator })
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn analyze_response(&self, prompt: &str, text: &str) -> MetricVector {
        self.score_prepared(&prepare_prompt(prompt), text)
    }

    fn score_prepared(&self, prompt: &PreparedPrompt, text: &str) -> MetricVector {
        let prepared = prepare_text(text);
        let sub = run_stage2(&Stage2Inputs {
            text: &prepared,
            prompt,
            profile: &self.profile,
            estimator: self.estimator.as_ref(),
        });
        run_stage3(&sub, &self.profile.weights)
    }

    /// Scores every entry against the shared prompt. Output order matches
    /// input order; entries are scored in parallel.
    #[tracing::instrument(skip_all, fields(n_entries = entries.len()))]
    pub fn score_batch(&self, prompt: &str, entries: Vec<GeneratedEntry>) -> Vec<AnnotatedEntry> {
        let prompt = prepare_prompt(prompt);
        entries
            .into_par_iter()
            .map(|entry| {
                let metrics = self.score_prepared(&prompt, &entry.text);
                AnnotatedEntry::new(entry, metrics)
            })
            .collect()
    }

    pub fn score_batch_sequential(
        &self,
        prompt: &str,
        entries: Vec<GeneratedEntry>,
    ) -> Vec<AnnotatedEntry> {
        let prompt = prepare_prompt(prompt);
        entries
            .into_iter()
            .map(|entry| {
                let metrics = self.score_prepared(&prompt, &entry.text);
                AnnotatedEntry::new(entry, metrics)
            })
            .collect()
    }
}

/// Scores a batch with the default profile.
pub fn score_batch(prompt: &str, entries: Vec<GeneratedEntry>) -> Vec<AnnotatedEntry> {
    Scorer::default().score_batch(prompt, entries)
}

/// Scores a single response with the default profile.
pub fn analyze_response(prompt: &str, text: &str) -> MetricVector {
    Scorer::default().analyze_response(prompt, text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_annotate.rs"]
mod tests;
