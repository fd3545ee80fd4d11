/// A bare URL in running text.
pub struct Autolink;

impl Autolink {
    /// Prefixes that start an autolink. Matched case-sensitively.
    pub const PREFIXES: [&'static str; 2] = ["https://", "http://"];

    /// Length of the autolink prefix at the start of `s`, if any.
    pub fn prefix_len(s: &str) -> Option<usize> {
        Self::PREFIXES
            .iter()
            .find(|p| s.starts_with(*p))
            .map(|p| p.len())
    }

    /// Characters that continue an autolink: anything but whitespace,
    /// square brackets and angle brackets.
    pub fn is_url_char(c: char) -> bool {
        !c.is_whitespace() && !matches!(c, '[' | ']' | '<' | '>')
    }
}
