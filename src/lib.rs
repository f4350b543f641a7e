//! Deterministic quality scoring for machine-generated text responses.
//!
//! A batch of responses sharing one prompt is scored on seven bounded text
//! metrics and a weighted aggregate; see [`score_batch`].

pub mod input;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod text;

pub use metrics::{FleschReadingEase, ReadabilityError, ReadingEase};
pub use model::entry::{AnnotatedEntry, GeneratedEntry, ParamSet};
pub use model::metrics::MetricVector;
pub use model::profile::{AggregateMode, AggregateWeights, ScoringProfile};
pub use pipeline::stage4_annotate::{Scorer, analyze_response, score_batch};
