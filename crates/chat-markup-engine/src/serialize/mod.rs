//! # Markdown Serialization
//!
//! The editor-to-storage direction: a [`RichDocument`] folds into the same
//! markdown source that [`crate::tokenize`] reads back.
//!
//! | Run | Output |
//! |-----|--------|
//! | user mention | `@name[id]` |
//! | channel mention | `#name[id]` |
//! | link | `[text](url)` |
//! | bold + italic | `***text***` |
//! | bold | `**text**` |
//! | italic | `*text*` |
//! | plain | `text` |
//!
//! Paragraphs are joined with `\n`.
//!
//! Literal `*`, `[`, `|`, `@` and `#` typed into plain runs are written
//! as-is, not escaped. Such text may come back formatted on the next parse.

pub mod document;

pub use document::{Paragraph, RichDocument, Run};

/// Serializes `document` to markdown. Pure; `document` is not modified.
pub fn serialize(document: &RichDocument) -> String {
    let mut out = String::new();
    for (n, paragraph) in document.paragraphs.iter().enumerate() {
        if n > 0 {
            out.push('\n');
        }
        for run in &paragraph.runs {
            write_run(&mut out, run);
        }
    }
    out
}

fn write_run(out: &mut String, run: &Run) {
    match run {
        // empty delimiters would not parse back as formatting
        Run::Text { text, .. } if text.is_empty() => {}
        Run::Text { text, bold, italic } => {
            let delim = match (bold, italic) {
                (true, true) => "***",
                (true, false) => "**",
                (false, true) => "*",
                (false, false) => "",
            };
            out.push_str(delim);
            out.push_str(text);
            out.push_str(delim);
        }
        Run::Link { text, url } => {
            out.push('[');
            out.push_str(text);
            out.push_str("](");
            out.push_str(url);
            out.push(')');
        }
        // `@` alone, or `@[id]`, would not parse back as a mention
        Run::Mention { name, .. } if name.is_empty() => {}
        Run::Mention { name, kind, id } => {
            out.push(kind.trigger());
            out.push_str(name);
            if let Some(id) = id.as_deref().filter(|id| !id.is_empty()) {
                out.push('[');
                out.push_str(id);
                out.push(']');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::MentionKind;
    use rstest::rstest;

    const ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn one(run: Run) -> RichDocument {
        RichDocument::new(vec![Paragraph::new(vec![run])])
    }

    #[rstest]
    #[case(Run::plain("hi"), "hi")]
    #[case(Run::styled("hi", true, false), "**hi**")]
    #[case(Run::styled("hi", false, true), "*hi*")]
    #[case(Run::styled("hi", true, true), "***hi***")]
    #[case(Run::styled("", true, true), "")]
    #[case(Run::link("docs", "https://example.com"), "[docs](https://example.com)")]
    #[case(Run::mention("alice", MentionKind::User, Some(ID)), "@alice[550e8400-e29b-41d4-a716-446655440000]")]
    #[case(Run::mention("general", MentionKind::Channel, Some(ID)), "#general[550e8400-e29b-41d4-a716-446655440000]")]
    #[case(Run::mention("bob", MentionKind::User, None), "@bob")]
    #[case(Run::mention("bob", MentionKind::User, Some("")), "@bob")]
    #[case(Run::mention("", MentionKind::User, Some(ID)), "")]
    #[case(Run::mention("", MentionKind::Channel, None), "")]
    fn single_run(#[case] run: Run, #[case] expected: &str) {
        assert_eq!(serialize(&one(run)), expected);
    }

    #[test]
    fn paragraphs_join_with_newline() {
        let doc = RichDocument::new(vec![
            Paragraph::new(vec![Run::plain("one")]),
            Paragraph::default(),
            Paragraph::new(vec![Run::plain("three")]),
        ]);
        assert_eq!(serialize(&doc), "one\n\nthree");
    }

    #[test]
    fn empty_document() {
        assert_eq!(serialize(&RichDocument::default()), "");
    }

    #[test]
    fn literal_metacharacters_are_not_escaped() {
        let doc = one(Run::plain("2 * 3 * 4 [x] @y"));
        assert_eq!(doc.to_markdown(), "2 * 3 * 4 [x] @y");
    }

    #[test]
    fn mixed_runs() {
        let doc = RichDocument::new(vec![Paragraph::new(vec![
            Run::plain("hey "),
            Run::mention("alice", MentionKind::User, Some(ID)),
            Run::plain(", see "),
            Run::link("this", "https://example.com"),
            Run::styled(" now", true, false),
        ])]);
        assert_eq!(
            serialize(&doc),
            format!("hey @alice[{ID}], see [this](https://example.com)** now**")
        );
    }
}
