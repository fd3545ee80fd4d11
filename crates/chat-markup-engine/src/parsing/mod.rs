pub mod inline;

use inline::{Token, kinds::Quote, parse_inline};

/// Tokenizes a chat message.
///
/// Lines are split on `\n` and joined by [`Token::LineBreak`]. A line whose
/// first non-blank character is `>` becomes a single [`Token::Quote`]
/// holding the rest of that line parsed inline. Quotes do not nest, so
/// `> > x` is one quote around the text `> x`. Every other line goes
/// through [`parse_inline`].
///
/// This never fails. Anything that does not form a valid construct is kept
/// as literal text.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut out = Vec::new();
    for (n, line) in text.split('\n').enumerate() {
        if n > 0 {
            out.push(Token::LineBreak);
        }
        out.extend(parse_line(line));
    }
    out
}

fn parse_line(line: &str) -> Vec<Token> {
    match Quote::strip_prefix(line) {
        Some(quoted) => vec![Token::Quote {
            content: parse_inline(quoted),
        }],
        None => parse_inline(line),
    }
}
