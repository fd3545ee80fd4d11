//! # Validation
//!
//! The checks that decide whether parsed content may become navigable.
//!
//! - **`url`**: scheme allow-listing for link targets ([`SafeUrl`])
//! - **`identifier`**: canonical v4 UUID check for mention ids ([`MentionId`])
//! - **`mention_name`**: character class and length bound for mention labels
//!
//! The typed constructors return the reason for a rejection. The free
//! functions below are the boolean/optional forms used by the tokenizer and
//! renderer, which only care whether a value passed.

pub mod identifier;
pub mod mention_name;
pub mod url;

pub use identifier::{InvalidIdentifier, MentionId};
pub use mention_name::{MAX_MENTION_NAME_CHARS, is_mention_name_char, normalize_mention_name};
pub use url::{ALLOWED_SCHEMES, SafeUrl, UrlRejection};

/// Returns true if `candidate` may be rendered as a navigable link.
pub fn is_valid_url(candidate: &str) -> bool {
    SafeUrl::parse(candidate).is_ok()
}

/// Returns the trimmed form of `candidate` if it passes URL validation.
pub fn validate_url(candidate: &str) -> Option<String> {
    SafeUrl::parse(candidate).ok().map(String::from)
}

/// Returns true if `candidate` is a canonical hyphenated v4 UUID.
pub fn is_valid_identifier(candidate: &str) -> bool {
    MentionId::parse(candidate).is_ok()
}
