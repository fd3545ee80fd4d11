use serde::{Deserialize, Serialize};

use crate::validate::{MentionId, SafeUrl};

/// What a mention points at. The trigger character decides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionKind {
    /// `@name`
    User,
    /// `#name`
    Channel,
}

impl MentionKind {
    pub const fn trigger(self) -> char {
        match self {
            MentionKind::User => '@',
            MentionKind::Channel => '#',
        }
    }
}

/// One node of a tokenized message.
///
/// Containers (`Bold`, `Italic`, `Spoiler`, `Quote`) own their children.
/// `LineBreak` only ever appears at the top level, between input lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Token {
    /// Literal text, including any construct that was rejected.
    Text { content: String },
    Bold { content: Vec<Token> },
    Italic { content: Vec<Token> },
    Spoiler { content: Vec<Token> },
    /// A whole `>` line.
    Quote { content: Vec<Token> },
    /// A link whose target passed validation.
    Link { text: String, url: SafeUrl },
    /// `@name` / `#name`, with an id only when it passed validation.
    Mention {
        name: String,
        kind: MentionKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        id: Option<MentionId>,
    },
    LineBreak,
}

impl Token {
    pub fn text(content: impl Into<String>) -> Self {
        Token::Text {
            content: content.into(),
        }
    }

    /// Child tokens of a container, `None` for leaves.
    pub fn children(&self) -> Option<&[Token]> {
        match self {
            Token::Bold { content }
            | Token::Italic { content }
            | Token::Spoiler { content }
            | Token::Quote { content } => Some(content),
            Token::Text { .. } | Token::Link { .. } | Token::Mention { .. } | Token::LineBreak => {
                None
            }
        }
    }
}
