//! Closed-form text metrics. Each function is total and returns a value in
//! `[0, 1]`; degenerate inputs map to documented edge values.

pub mod lexical;
pub mod readability;
pub mod shape;

pub use lexical::{keyword_coverage, lexical_diversity, prompt_keywords, repetition};
pub use readability::{FleschReadingEase, ReadabilityError, ReadingEase, readability_score};
pub use shape::{clarity_score, length_ok, structure_score};
