use crate::parsing::inline::types::MentionKind;

/// Mention syntax, `@name`, `#name`, optionally followed by `[identifier]`.
pub struct Mention;

impl Mention {
    pub const USER_TRIGGER: u8 = b'@';
    pub const CHANNEL_TRIGGER: u8 = b'#';
    pub const ID_OPEN: u8 = b'[';
    pub const ID_CLOSE: char = ']';

    /// The mention kind introduced by byte `b`, if it is a trigger.
    pub fn kind_for(b: u8) -> Option<MentionKind> {
        match b {
            Self::USER_TRIGGER => Some(MentionKind::User),
            Self::CHANNEL_TRIGGER => Some(MentionKind::Channel),
            _ => None,
        }
    }
}
