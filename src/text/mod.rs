pub mod sentences;
pub mod syllables;
pub mod tokenize;

pub use sentences::split_sentences;
pub use syllables::count_syllables;
pub use tokenize::tokenize;
