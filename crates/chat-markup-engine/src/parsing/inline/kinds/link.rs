/// Explicit link syntax, `[text](url)`.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: char = ']';
    /// The `](` sequence joining link text and target.
    pub const JOIN: &'static [u8; 2] = b"](";
    pub const URL_OPEN: char = '(';
    pub const URL_CLOSE: char = ')';
}
