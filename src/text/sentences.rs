fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Heuristic sentence splitter: breaks after `.`, `!` or `?` when followed by
/// whitespace. Abbreviations and quotations are not special-cased.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let end = idx + c.len_utf8();
        let Some(&(_, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }
        push_segment(&mut out, &text[start..end]);
        while let Some(&(_, ws)) = chars.peek() {
            if !ws.is_whitespace() {
                break;
            }
            chars.next();
        }
        start = chars.peek().map(|&(i, _)| i).unwrap_or(text.len());
    }
    push_segment(&mut out, &text[start..]);
    out
}

fn push_segment<'a>(out: &mut Vec<&'a str>, segment: &'a str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/text/sentences.rs"]
mod tests;
