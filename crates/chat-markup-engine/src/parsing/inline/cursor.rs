/// A cursor for left-to-right inline scanning.
///
/// Positions are byte offsets into `s` and always sit on a `char` boundary:
/// the only ways to move are [`Cursor::bump_char`] and [`Cursor::bump_n`]
/// with a length measured from ASCII delimiters or a previous match.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks at the current `char` without advancing.
    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The unscanned remainder of the input.
    pub fn rest(&self) -> &'a str {
        self.s.get(self.i..).unwrap_or("")
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().as_bytes().starts_with(pat)
    }

    /// Advances past one whole `char`, returning it.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances by `n` bytes. The caller guarantees `i + n` is a char boundary.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Consumes characters while `pred` holds, returning the consumed slice.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.i += c.len_utf8();
        }
        &self.s[start..self.i]
    }

    /// Finds the next occurrence of `pat` at or after the current position
    /// plus `skip` whole chars, returning its absolute byte index.
    ///
    /// Returns `None` if fewer than `skip` chars remain or `pat` never occurs.
    pub fn find_after(&self, skip: usize, pat: &str) -> Option<usize> {
        let rest = self.rest();
        let offset = match rest.char_indices().nth(skip) {
            Some((idx, _)) => idx,
            None if rest.chars().count() == skip => rest.len(),
            None => return None,
        };
        rest[offset..].find(pat).map(|at| self.i + offset + at)
    }
}
