use std::{fmt, sync::OnceLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::{Uuid, Variant, Version};

/// Length of the hyphenated textual UUID form.
pub const IDENTIFIER_LEN: usize = 36;

fn hyphenated_layout() -> &'static Regex {
    static LAYOUT: OnceLock<Regex> = OnceLock::new();
    LAYOUT.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .expect("Invalid identifier regex")
    })
}

/// Why a candidate mention identifier was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidIdentifier {
    #[error("identifier must be 36 bytes, got {0}")]
    Length(usize),
    #[error("identifier is not in hyphenated 8-4-4-4-12 form")]
    Layout,
    #[error("identifier is not hexadecimal")]
    NotHex,
    #[error("identifier is not a version 4 UUID")]
    Version,
    #[error("identifier does not use the RFC 4122 variant")]
    Variant,
}

/// An opaque mention reference in canonical hyphenated v4 UUID form.
///
/// The original spelling (including letter case) is kept so that
/// serialized messages round-trip byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MentionId(String);

impl MentionId {
    pub fn parse(candidate: &str) -> Result<Self, InvalidIdentifier> {
        if candidate.len() != IDENTIFIER_LEN {
            return Err(InvalidIdentifier::Length(candidate.len()));
        }

        // uuid also accepts simple, braced and urn forms, so pin the layout first
        if !hyphenated_layout().is_match(candidate) {
            let only_hex_misplaced = candidate
                .bytes()
                .all(|b| b == b'-' || b.is_ascii_hexdigit());
            return Err(if only_hex_misplaced {
                InvalidIdentifier::Layout
            } else {
                InvalidIdentifier::NotHex
            });
        }

        let uuid = Uuid::parse_str(candidate).map_err(|_| InvalidIdentifier::NotHex)?;
        if uuid.get_version() != Some(Version::Random) {
            return Err(InvalidIdentifier::Version);
        }
        if uuid.get_variant() != Variant::RFC4122 {
            return Err(InvalidIdentifier::Variant);
        }

        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares two identifiers the way UUIDs compare: ignoring hex letter case.
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl AsRef<str> for MentionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MentionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MentionId {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MentionId> for String {
    fn from(id: MentionId) -> Self {
        id.0
    }
}

impl From<Uuid> for MentionId {
    /// Wraps a freshly generated id. Callers pass `Uuid::new_v4()`.
    fn from(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}
