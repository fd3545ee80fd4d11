/// Line-level quote type with owned prefix constant.
///
/// A quote covers exactly one input line; there is no lazy continuation.
pub struct Quote;

impl Quote {
    /// The quote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the quote prefix from a line, returning the quoted remainder.
    ///
    /// Leading whitespace before `>` is ignored, and one space after it is
    /// consumed. Returns `None` if the line is not a quote.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::PREFIX)?;
        Some(rest.strip_prefix(' ').unwrap_or(rest))
    }
}
