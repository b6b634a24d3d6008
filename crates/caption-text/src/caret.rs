/// Number of code points in `text`, i.e. the largest valid caret index.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Clamp a (possibly negative) caret index into `0..=char_count(text)`.
pub fn clamp_caret(text: &str, index: isize) -> usize {
    if index <= 0 {
        return 0;
    }
    (index as usize).min(char_count(text))
}

/// Byte offset of the caret index. Indices past the end map to `text.len()`.
pub fn byte_offset(text: &str, index: usize) -> usize {
    text.char_indices()
        .nth(index)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

/// Insert `ch` before the code point at `index`.
pub fn insert_char(text: &mut String, index: usize, ch: char) {
    let at = byte_offset(text, index);
    text.insert(at, ch);
}

/// Remove the code point at `index`, returning it if there was one.
pub fn remove_char(text: &mut String, index: usize) -> Option<char> {
    if index >= char_count(text) {
        return None;
    }
    let at = byte_offset(text, index);
    Some(text.remove(at))
}
