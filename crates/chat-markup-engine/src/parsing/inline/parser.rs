use crate::validate::{MentionId, SafeUrl, is_mention_name_char, normalize_mention_name};

use super::{
    cursor::Cursor,
    kinds::{self, Autolink, Bold, Italic, Link, Mention, Spoiler},
    types::{MentionKind, Token},
};

/// A single pattern attempt. Returns `None` and leaves the cursor where it
/// was if the pattern does not match at the current position.
type Pattern = fn(&mut Cursor<'_>) -> Option<Token>;

/// Patterns in priority order. At any position the first match wins.
const PATTERNS: [Pattern; 7] = [
    try_parse_mention_with_id,
    try_parse_mention,
    try_parse_link,
    try_parse_bold,
    try_parse_spoiler,
    try_parse_italic,
    try_parse_autolink,
];

/// Parses one line (or the inside of a container) into tokens.
///
/// # Priority
/// Mentions with an identifier, then bare mentions, explicit links, bold,
/// spoiler, italic and autolinks. Anything else is gathered into `Text`
/// runs up to the next trigger character.
///
/// # Returns
/// Tokens covering the whole input. Never fails: input that matches no
/// pattern comes back as `Text`, one character at a time if need be.
pub fn parse_inline(s: &str) -> Vec<Token> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    'scan: while !cur.eof() {
        for pattern in PATTERNS {
            if let Some(token) = pattern(&mut cur) {
                out.push(token);
                continue 'scan;
            }
        }
        out.push(take_text_run(&mut cur));
    }

    out
}

/// Consumes plain text up to the next trigger, or a single char if the
/// cursor is sitting on a trigger that matched nothing.
fn take_text_run(cur: &mut Cursor<'_>) -> Token {
    let start = cur.i;
    while !cur.eof() && !kinds::at_trigger(cur.rest()) {
        cur.bump_char();
    }
    if cur.i == start {
        cur.bump_char();
    }
    Token::text(&cur.s[start..cur.i])
}

/// Runs `attempt`, putting the cursor back if it does not match.
fn backtrack<'a>(
    cur: &mut Cursor<'a>,
    attempt: impl FnOnce(&mut Cursor<'a>) -> Option<Token>,
) -> Option<Token> {
    let saved = cur.clone();
    let parsed = attempt(cur);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

/// Reads the trigger and name of a mention.
fn mention_head<'a>(cur: &mut Cursor<'a>) -> Option<(MentionKind, &'a str)> {
    let kind = Mention::kind_for(cur.peek()?)?;
    cur.bump_n(1);
    let name = cur.eat_while(is_mention_name_char);
    if name.is_empty() {
        return None;
    }
    Some((kind, name))
}

/// `@name[id]` / `#name[id]`. An identifier that fails validation still
/// yields a mention, just without an id.
fn try_parse_mention_with_id(cur: &mut Cursor<'_>) -> Option<Token> {
    backtrack(cur, |cur| {
        let (kind, name) = mention_head(cur)?;
        if cur.peek() != Some(Mention::ID_OPEN) {
            return None;
        }
        cur.bump_n(1);
        let raw_id = cur.eat_while(|c| c != Mention::ID_CLOSE);
        if raw_id.is_empty() || cur.peek_char() != Some(Mention::ID_CLOSE) {
            return None;
        }
        cur.bump_char();

        let id = match MentionId::parse(raw_id) {
            Ok(id) => Some(id),
            Err(reason) => {
                log::debug!("mention identifier rejected: {reason}");
                None
            }
        };
        Some(Token::Mention {
            name: normalize_mention_name(name),
            kind,
            id,
        })
    })
}

/// `@name` / `#name` with no identifier.
fn try_parse_mention(cur: &mut Cursor<'_>) -> Option<Token> {
    backtrack(cur, |cur| {
        let (kind, name) = mention_head(cur)?;
        Some(Token::Mention {
            name: normalize_mention_name(name),
            kind,
            id: None,
        })
    })
}

/// `[text](url)`. The target runs to the `)` balancing the opening `(`.
/// A target that fails validation turns the whole span into literal text.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Token> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.i;
    cur.bump_n(1);

    let text = cur.eat_while(|c| c != Link::TEXT_CLOSE);
    if text.is_empty() || !cur.starts_with(Link::JOIN) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::JOIN.len());

    let url_start = cur.i;
    let mut depth = 0usize;
    loop {
        match cur.peek_char() {
            None => {
                // Not closed, restore cursor
                *cur = saved;
                return None;
            }
            Some(Link::URL_CLOSE) if depth == 0 => break,
            Some(Link::URL_CLOSE) => depth -= 1,
            Some(Link::URL_OPEN) => depth += 1,
            Some(_) => {}
        }
        cur.bump_char();
    }
    let target = &cur.s[url_start..cur.i];
    if target.is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump_char(); // closing )

    match SafeUrl::parse(target) {
        Ok(url) => Some(Token::Link {
            text: text.to_string(),
            url,
        }),
        Err(reason) => {
            log::debug!("link target rejected: {reason}");
            Some(Token::text(&cur.s[start..cur.i]))
        }
    }
}

/// Shortest non-empty span enclosed by `delim` on both sides.
fn take_delimited<'a>(cur: &mut Cursor<'a>, delim: &str) -> Option<&'a str> {
    if !cur.starts_with(delim.as_bytes()) {
        return None;
    }
    // the opening delimiter plus at least one inner char
    let close = cur.find_after(delim.len() + 1, delim)?;
    let inner = &cur.s[cur.i + delim.len()..close];
    let consumed = close + delim.len() - cur.i;
    cur.bump_n(consumed);
    Some(inner)
}

fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<Token> {
    take_delimited(cur, Bold::DELIM).map(|inner| Token::Bold {
        content: parse_inline(inner),
    })
}

fn try_parse_spoiler(cur: &mut Cursor<'_>) -> Option<Token> {
    take_delimited(cur, Spoiler::DELIM).map(|inner| Token::Spoiler {
        content: parse_inline(inner),
    })
}

/// `*inner*` where inner has no `*` and no newline.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<Token> {
    if cur.peek() != Some(Italic::DELIM) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(1);
    let inner = cur.eat_while(|c| c != char::from(Italic::DELIM) && c != '\n');
    if inner.is_empty() || cur.peek() != Some(Italic::DELIM) {
        *cur = saved;
        return None;
    }
    cur.bump_n(1);

    Some(Token::Italic {
        content: parse_inline(inner),
    })
}

/// A bare `http://` or `https://` URL, validated like an explicit link.
fn try_parse_autolink(cur: &mut Cursor<'_>) -> Option<Token> {
    let prefix = Autolink::prefix_len(cur.rest())?;

    let saved = cur.clone();
    let start = cur.i;
    cur.bump_n(prefix);
    if cur.eat_while(Autolink::is_url_char).is_empty() {
        *cur = saved;
        return None;
    }

    let raw = &cur.s[start..cur.i];
    match SafeUrl::parse(raw) {
        Ok(url) => Some(Token::Link {
            text: raw.to_string(),
            url,
        }),
        Err(reason) => {
            log::debug!("autolink rejected: {reason}");
            Some(Token::text(raw))
        }
    }
}
