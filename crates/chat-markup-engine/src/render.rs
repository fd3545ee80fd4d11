//! Turning token trees into output.
//!
//! Trees may come from somewhere other than [`crate::tokenize`] (for
//! example, deserialized from an import), so links and mention ids are
//! validated again here before anything navigable is emitted. All text is
//! HTML-escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    parsing::inline::{MentionKind, Token},
    validate::{MentionId, SafeUrl},
};

/// Knobs for [`to_html_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Open links in a new browsing context.
    pub link_target_blank: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            link_target_blank: true,
        }
    }
}

/// Renders tokens to an HTML fragment with default options.
pub fn to_html(tokens: &[Token]) -> String {
    to_html_with(tokens, &RenderOptions::default())
}

pub fn to_html_with(tokens: &[Token], options: &RenderOptions) -> String {
    let mut out = String::new();
    write_html(&mut out, tokens, options);
    out
}

fn write_html(out: &mut String, tokens: &[Token], options: &RenderOptions) {
    for token in tokens {
        match token {
            Token::Text { content } => out.push_str(&encode_text(content)),
            Token::Bold { content } => wrap(out, "<strong>", "</strong>", content, options),
            Token::Italic { content } => wrap(out, "<em>", "</em>", content, options),
            Token::Spoiler { content } => {
                wrap(out, "<span class=\"spoiler\">", "</span>", content, options)
            }
            Token::Quote { content } => {
                wrap(out, "<blockquote>", "</blockquote>", content, options)
            }
            Token::Link { text, url } => write_link(out, text, url, options),
            Token::Mention { name, kind, id } => {
                let label = format!("{}{}", kind.trigger(), name);
                match id.as_ref().and_then(|id| MentionId::parse(id.as_str()).ok()) {
                    Some(id) => {
                        let kind_class = match kind {
                            MentionKind::User => "mention-user",
                            MentionKind::Channel => "mention-channel",
                        };
                        out.push_str("<span class=\"mention ");
                        out.push_str(kind_class);
                        out.push_str("\" data-mention-id=\"");
                        out.push_str(&encode_double_quoted_attribute(id.as_str()));
                        out.push_str("\">");
                        out.push_str(&encode_text(&label));
                        out.push_str("</span>");
                    }
                    None => out.push_str(&encode_text(&label)),
                }
            }
            Token::LineBreak => out.push_str("<br>"),
        }
    }
}

fn wrap(out: &mut String, open: &str, close: &str, content: &[Token], options: &RenderOptions) {
    out.push_str(open);
    write_html(out, content, options);
    out.push_str(close);
}

fn write_link(out: &mut String, text: &str, url: &SafeUrl, options: &RenderOptions) {
    let Ok(checked) = SafeUrl::parse(url.as_str()) else {
        log::warn!("link token carried an unsafe target; rendering as text");
        out.push_str(&encode_text(&format!("[{text}]({url})")));
        return;
    };

    out.push_str("<a href=\"");
    out.push_str(&encode_double_quoted_attribute(checked.as_str()));
    out.push_str("\" rel=\"noopener noreferrer nofollow\"");
    if options.link_target_blank {
        out.push_str(" target=\"_blank\"");
    }
    out.push('>');
    out.push_str(&encode_text(text));
    out.push_str("</a>");
}

/// Flattens tokens to readable text, for previews and notifications.
///
/// Formatting markers are dropped, links show their text, mentions show
/// their trigger and name, and quoted lines are prefixed with `> `.
pub fn to_plain_text(tokens: &[Token]) -> String {
    let mut out = String::new();
    write_plain(&mut out, tokens);
    out
}

fn write_plain(out: &mut String, tokens: &[Token]) {
    for token in tokens {
        match token {
            Token::Text { content } => out.push_str(content),
            Token::Bold { content } | Token::Italic { content } | Token::Spoiler { content } => {
                write_plain(out, content)
            }
            Token::Quote { content } => {
                out.push_str("> ");
                write_plain(out, content);
            }
            Token::Link { text, .. } => out.push_str(text),
            Token::Mention { name, kind, .. } => {
                out.push(kind.trigger());
                out.push_str(name);
            }
            Token::LineBreak => out.push('\n'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn escapes_text() {
        assert_eq!(
            to_html(&tokenize("<script>alert(1)</script>")),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn renders_formatting() {
        assert_eq!(
            to_html(&tokenize("**b** *i* ||s||\n> q")),
            "<strong>b</strong> <em>i</em> <span class=\"spoiler\">s</span><br><blockquote>q</blockquote>"
        );
    }

    #[test]
    fn renders_link_with_rel() {
        assert_eq!(
            to_html(&tokenize("[a & b](https://example.com/?x=1&y=\"2\")")),
            "<a href=\"https://example.com/?x=1&amp;y=&quot;2&quot;\" rel=\"noopener noreferrer nofollow\" target=\"_blank\">a &amp; b</a>"
        );
    }

    #[test]
    fn target_blank_is_optional() {
        let html = to_html_with(
            &tokenize("https://example.com"),
            &RenderOptions {
                link_target_blank: false,
            },
        );
        assert!(!html.contains("target="));
        assert!(html.starts_with("<a href=\"https://example.com\""));
    }

    #[test]
    fn rejected_link_renders_as_escaped_literal() {
        assert_eq!(
            to_html(&tokenize("[x](javascript:alert(1))")),
            "[x](javascript:alert(1))"
        );
    }

    #[test]
    fn mention_with_id_is_navigable() {
        assert_eq!(
            to_html(&tokenize("@alice[550e8400-e29b-41d4-a716-446655440000]")),
            "<span class=\"mention mention-user\" data-mention-id=\"550e8400-e29b-41d4-a716-446655440000\">@alice</span>"
        );
    }

    #[test]
    fn mention_without_id_is_plain_label() {
        assert_eq!(to_html(&tokenize("#random")), "#random");
    }

    #[test]
    fn plain_text_projection() {
        assert_eq!(
            to_plain_text(&tokenize(
                "**hi** @bob, see [docs](https://example.com)\n> ||spoiler||"
            )),
            "hi @bob, see docs\n> spoiler"
        );
    }
}
