use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z']+").unwrap());

/// Lowercase word tokens: maximal runs of ASCII letters and apostrophes.
/// Digits and punctuation only separate tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/text/tokenize.rs"]
mod tests;
