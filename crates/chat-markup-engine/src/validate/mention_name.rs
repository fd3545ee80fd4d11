/// Longest mention label kept, in characters.
pub const MAX_MENTION_NAME_CHARS: usize = 50;

/// Characters allowed in a mention label: ASCII letters, digits, `_` and `-`.
pub fn is_mention_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Bounds a raw mention label.
///
/// Keeps the leading run of [`is_mention_name_char`] characters and then
/// truncates to [`MAX_MENTION_NAME_CHARS`]. Names coming out of the
/// tokenizer are already restricted to the class, so for them this is only
/// the length bound.
pub fn normalize_mention_name(raw: &str) -> String {
    raw.chars()
        .take_while(|&c| is_mention_name_char(c))
        .take(MAX_MENTION_NAME_CHARS)
        .collect()
}
