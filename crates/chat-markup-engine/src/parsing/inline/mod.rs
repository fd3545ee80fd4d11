//! # Inline Parsing
//!
//! Cursor-based parsing of a single line (or a container's inside) into
//! [`Token`]s.
//!
//! ## Architecture
//!
//! At every cursor position the parser tries a fixed list of patterns in
//! priority order. Each pattern is a `try_parse_*` function that either
//! consumes input and returns a token, or leaves the cursor untouched:
//!
//! 1. mention with identifier, `@name[id]`
//! 2. mention, `@name`
//! 3. link, `[text](url)`
//! 4. bold, `**inner**`
//! 5. spoiler, `||inner||`
//! 6. italic, `*inner*`
//! 7. autolink, `https://...`
//!
//! If nothing matches, text is gathered up to the next trigger character.
//! Containers re-enter [`parse_inline`] on their inner text.
//!
//! ## Modules
//!
//! - **`types`**: `Token` enum and `MentionKind`
//! - **`kinds`**: per-construct types owning their delimiters
//! - **`cursor`**: `Cursor` for char-boundary-safe scanning
//! - **`parser`**: `parse_inline()` entry point with `try_parse_*` helpers
//!
//! ## Degradation
//!
//! Rejected link targets come back as `Text` holding the literal source.
//! Rejected mention identifiers leave a `Mention` without an id. Unclosed
//! markers are plain `Text`.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{MentionKind, Token};
