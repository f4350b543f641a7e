fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Vowel-group syllable estimate for a lowercase token. A trailing silent `e`
/// is dropped unless the word ends in `le`; every word counts at least once.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0usize;
    let mut prev_vowel = false;
    for &c in &letters {
        let v = is_vowel(c.to_ascii_lowercase());
        if v && !prev_vowel {
            groups += 1;
        }
        prev_vowel = v;
    }

    let n = letters.len();
    if n > 2 && letters[n - 1].eq_ignore_ascii_case(&'e') {
        let before = letters[n - 2].to_ascii_lowercase();
        if !is_vowel(before) && before != 'l' {
            groups = groups.saturating_sub(1);
        }
    }

    groups.max(1)
}
