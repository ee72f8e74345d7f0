//! Initials extraction for avatar text

/// Reduce a display name to the text shown inside an avatar.
///
/// - two or more words: first character of the first two words
/// - a single word: its first two characters
/// - blank input: empty string
///
/// Surrounding Unicode whitespace is trimmed, but words are separated only by
/// ASCII whitespace, so a no-break space stays inside a word.
pub fn initials(text: &str) -> String {
    let mut words = text
        .trim()
        .split(is_word_separator)
        .filter(|word| !word.is_empty());

    match (words.next(), words.next()) {
        (Some(first), Some(second)) => first.chars().take(1).chain(second.chars().take(1)).collect(),
        (Some(only), None) => only.chars().take(2).collect(),
        _ => String::new(),
    }
}

/// `[ \t\n\x0B\f\r]`, the regex `\s` class
fn is_word_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Uppercase without locale-specific rules
pub fn to_upper(text: &str) -> String {
    text.chars().flat_map(char::to_uppercase).collect()
}
