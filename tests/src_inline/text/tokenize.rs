use super::*;

#[test]
fn test_lowercases_and_splits() {
    assert_eq!(
        tokenize("Binary Search, repeatedly!"),
        vec!["binary", "search", "repeatedly"]
    );
}

#[test]
fn test_keeps_apostrophes() {
    assert_eq!(tokenize("It's the user's"), vec!["it's", "the", "user's"]);
}

#[test]
fn test_digits_are_separators() {
    assert_eq!(tokenize("abc123def 42"), vec!["abc", "def"]);
}

#[test]
fn test_empty_and_punctuation_only() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("... -- !!! 123").is_empty());
}

#[test]
fn test_non_ascii_letters_split_tokens() {
    assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
}

#[test]
fn test_deterministic() {
    let text = "Same input, same output.";
    assert_eq!(tokenize(text), tokenize(text));
}
