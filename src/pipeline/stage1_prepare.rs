use crate::metrics::prompt_keywords;
use crate::text::{split_sentences, tokenize};

/// Tokenized and sentence-split view of one response.
#[derive(Debug, Clone)]
pub struct PreparedText<'a> {
    pub raw: &'a str,
    pub tokens: Vec<String>,
    pub sentences: Vec<&'a str>,
}

/// Prompt tokens, computed once and shared by every entry of a batch.
#[derive(Debug, Clone, Default)]
pub struct PreparedPrompt {
    pub tokens: Vec<String>,
}

impl PreparedPrompt {
    /// Number of distinct keywords that keyword coverage can credit.
    pub fn keyword_count(&self, min_len: usize) -> usize {
        prompt_keywords(&self.tokens, min_len).len()
    }
}

pub fn prepare_text(text: &str) -> PreparedText<'_> {
    PreparedText {
        raw: text,
        tokens: tokenize(text),
        sentences: split_sentences(text),
    }
}

pub fn prepare_prompt(prompt: &str) -> PreparedPrompt {
    PreparedPrompt {
        tokens: tokenize(prompt),
    }
}
