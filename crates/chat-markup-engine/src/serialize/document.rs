use serde::{Deserialize, Serialize};

use crate::parsing::inline::MentionKind;

/// The editor's view of a message: paragraphs of runs.
///
/// Owned and mutated by the editor. This crate only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichDocument {
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub runs: Vec<Run>,
}

/// A styled span inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Run {
    Text {
        text: String,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
    },
    Link {
        text: String,
        url: String,
    },
    Mention {
        name: String,
        kind: MentionKind,
        #[serde(default)]
        id: Option<String>,
    },
}

impl RichDocument {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Serializes to the stored markdown form. See [`super::serialize`].
    pub fn to_markdown(&self) -> String {
        super::serialize(self)
    }
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self { runs }
    }
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Run::Text {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn styled(text: impl Into<String>, bold: bool, italic: bool) -> Self {
        Run::Text {
            text: text.into(),
            bold,
            italic,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Run::Link {
            text: text.into(),
            url: url.into(),
        }
    }

    pub fn mention(name: impl Into<String>, kind: MentionKind, id: Option<&str>) -> Self {
        Run::Mention {
            name: name.into(),
            kind,
            id: id.map(str::to_string),
        }
    }
}
