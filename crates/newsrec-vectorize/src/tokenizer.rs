use newsrec_core::constants::MIN_TOKEN_CHARS;

/// Split text into lowercase tokens of Latin/Cyrillic letters and digits.
///
/// Characters outside those classes are removed outright, not replaced with
/// spaces, so `"co-op"` yields the single token `coop`. Tokens shorter than
/// [`MIN_TOKEN_CHARS`] characters are discarded. Empty text yields an empty
/// list.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| is_token_char(*c) || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(String::from)
        .collect()
}

/// Latin `a-z`, Cyrillic `а-я`, or an ASCII digit (text is lowercased first).
fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ('а'..='я').contains(&c)
}
