//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser asks
//! these types for their delimiters and never hardcodes `**` or `[`.
//!
//! ## Types
//!
//! - **`Mention`**: `@` / `#` triggers, `[`..`]` identifier brackets
//! - **`Link`**: `[text](url)` brackets and parentheses
//! - **`Bold`**: `**`
//! - **`Spoiler`**: `||`
//! - **`Italic`**: `*`
//! - **`Autolink`**: `http://` / `https://` prefixes and the URL character class
//! - **`Quote`**: line-level `>` prefix

pub mod autolink;
pub mod bold;
pub mod italic;
pub mod link;
pub mod mention;
pub mod quote;
pub mod spoiler;

pub use autolink::Autolink;
pub use bold::Bold;
pub use italic::Italic;
pub use link::Link;
pub use mention::Mention;
pub use quote::Quote;
pub use spoiler::Spoiler;

/// Bytes at which some inline construct may begin.
///
/// `h` is not listed; autolinks are detected by their full scheme prefix.
pub const TRIGGER_BYTES: [u8; 5] = [
    Link::TEXT_OPEN,
    Italic::DELIM,
    Spoiler::DELIM.as_bytes()[0],
    Mention::USER_TRIGGER,
    Mention::CHANNEL_TRIGGER,
];

/// Returns true if a construct could start at the beginning of `rest`.
pub fn at_trigger(rest: &str) -> bool {
    match rest.as_bytes().first() {
        Some(b) if TRIGGER_BYTES.contains(b) => true,
        Some(_) => Autolink::prefix_len(rest).is_some(),
        None => false,
    }
}
