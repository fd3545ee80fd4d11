use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schemes a link may use to become navigable. Compared case-insensitively.
pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Why a candidate URL was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlRejection {
    #[error("URL is empty")]
    Empty,
    #[error("protocol-relative URLs are not allowed")]
    ProtocolRelative,
    #[error("URL has no scheme")]
    MissingScheme,
    #[error("scheme `{0}` is not allowed")]
    DisallowedScheme(String),
    #[error("percent-decoded scheme `{0}` is not allowed")]
    EncodedScheme(String),
    #[error("mailto target embeds scheme `{0}`")]
    NestedScheme(String),
}

/// A URL that passed scheme allow-listing, stored in trimmed form.
///
/// The only constructor is [`SafeUrl::parse`]; deserialization goes through
/// it as well, so a token tree read from outside cannot carry an unchecked
/// link target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SafeUrl(String);

impl SafeUrl {
    /// Validates `candidate` against both its raw and percent-decoded scheme.
    pub fn parse(candidate: &str) -> Result<Self, UrlRejection> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(UrlRejection::Empty);
        }

        check_scheme(trimmed)?;

        // invalid UTF-8 becomes U+FFFD, which can never form a scheme or `:`
        let decoded_bytes = urlencoding::decode_binary(trimmed.as_bytes());
        let decoded = String::from_utf8_lossy(&decoded_bytes);
        check_scheme(decoded.trim()).map_err(|rejection| match rejection {
            UrlRejection::DisallowedScheme(scheme) => UrlRejection::EncodedScheme(scheme),
            other => other,
        })?;

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SafeUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SafeUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SafeUrl {
    type Error = UrlRejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SafeUrl> for String {
    fn from(url: SafeUrl) -> Self {
        url.0
    }
}

/// Checks the scheme of an already-trimmed URL.
fn check_scheme(url: &str) -> Result<(), UrlRejection> {
    if url.starts_with("//") {
        return Err(UrlRejection::ProtocolRelative);
    }

    let Some((scheme, rest)) = url.split_once(':') else {
        return Err(UrlRejection::MissingScheme);
    };
    if scheme.is_empty() {
        return Err(UrlRejection::MissingScheme);
    }

    let scheme = scheme.to_ascii_lowercase();
    if !is_allowed(&scheme) {
        return Err(UrlRejection::DisallowedScheme(scheme));
    }

    if scheme == "mailto" {
        // Control characters and whitespace are dropped the way browsers drop them
        let compact: String = rest
            .chars()
            .filter(|c| !c.is_ascii_control() && !c.is_whitespace())
            .collect();
        if let Some(nested) = leading_scheme(&compact) {
            let nested = nested.to_ascii_lowercase();
            if !is_allowed(&nested) {
                return Err(UrlRejection::NestedScheme(nested));
            }
        }
    }

    Ok(())
}

fn is_allowed(scheme: &str) -> bool {
    ALLOWED_SCHEMES.contains(&scheme)
}

/// Returns the RFC 3986 scheme at the start of `s`, if `s` begins with one.
fn leading_scheme(s: &str) -> Option<&str> {
    let (candidate, _) = s.split_once(':')?;
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    chars
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        .then_some(candidate)
}
