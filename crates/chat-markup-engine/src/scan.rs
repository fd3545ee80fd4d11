//! Walking token trees for mentions.
//!
//! Used for features like unread-mention counts: given a batch of stored
//! messages, how many times does a given user or channel get referenced?
//! Only mentions whose identifier survived validation count as references.

use crate::{
    parsing::{
        inline::{MentionKind, Token},
        tokenize,
    },
    validate::MentionId,
};

/// A borrowed view of one `Mention` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionRef<'a> {
    pub name: &'a str,
    pub kind: MentionKind,
    pub id: Option<&'a MentionId>,
}

/// Visits every token depth-first, parents before children.
pub fn walk<'a>(tokens: &'a [Token], visit: &mut impl FnMut(&'a Token)) {
    for token in tokens {
        visit(token);
        if let Some(children) = token.children() {
            walk(children, visit);
        }
    }
}

/// All mentions in `tokens`, including those nested in containers.
pub fn mentions(tokens: &[Token]) -> Vec<MentionRef<'_>> {
    let mut found = Vec::new();
    walk(tokens, &mut |token| {
        if let Token::Mention { name, kind, id } = token {
            found.push(MentionRef {
                name,
                kind: *kind,
                id: id.as_ref(),
            });
        }
    });
    found
}

/// Number of mentions of `kind` whose identifier equals `id`.
///
/// Identifiers compare case-insensitively. Mentions without an id never match.
pub fn count_mentions(tokens: &[Token], kind: MentionKind, id: &str) -> usize {
    mentions(tokens)
        .into_iter()
        .filter(|m| m.kind == kind && m.id.is_some_and(|mid| mid.matches(id)))
        .count()
}

/// Tokenizes each message and sums [`count_mentions`] across the batch.
pub fn count_mentions_in_messages<I, S>(messages: I, kind: MentionKind, id: &str) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    messages
        .into_iter()
        .map(|message| count_mentions(&tokenize(message.as_ref()), kind, id))
        .sum()
}
