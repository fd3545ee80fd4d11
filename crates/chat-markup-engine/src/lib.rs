//! # chat-markup-engine
//!
//! Message markdown for a group chat: a tokenizer that turns stored message
//! text into a token tree, the validators that decide which links and
//! mentions may become clickable, and the serializer that turns the rich
//! editor's document back into stored text.
//!
//! ```
//! use chat_markup_engine::{MentionKind, Token, tokenize};
//!
//! let tokens = tokenize("hey @alice[550e8400-e29b-41d4-a716-446655440000]");
//! assert!(matches!(
//!     &tokens[1],
//!     Token::Mention { kind: MentionKind::User, id: Some(_), .. }
//! ));
//!
//! // unsafe targets stay literal text
//! assert_eq!(
//!     tokenize("[Click](javascript:alert(1))"),
//!     vec![Token::text("[Click](javascript:alert(1))")]
//! );
//! ```
//!
//! Everything here is pure and synchronous. Each call returns an owned
//! tree, so the engine can be used from any number of threads at once.
//! Callers should cap message length before tokenizing.

pub mod parsing;
pub mod render;
pub mod scan;
pub mod serialize;
pub mod validate;

// Re-export key types for easier usage
pub use parsing::{
    inline::{MentionKind, Token},
    tokenize,
};
pub use render::{RenderOptions, to_html, to_html_with, to_plain_text};
pub use scan::{MentionRef, count_mentions, count_mentions_in_messages, mentions};
pub use serialize::{Paragraph, RichDocument, Run, serialize};
pub use validate::{
    InvalidIdentifier, MentionId, SafeUrl, UrlRejection, is_valid_identifier, is_valid_url,
    normalize_mention_name, validate_url,
};
