use chat_markup_engine::{MentionId, MentionKind, SafeUrl, Token, tokenize};
use pretty_assertions::assert_eq;
use rstest::rstest;

const ID: &str = "550e8400-e29b-41d4-a716-446655440000";

fn mention(name: &str, kind: MentionKind, id: Option<&str>) -> Token {
    Token::Mention {
        name: name.to_string(),
        kind,
        id: id.map(|id| MentionId::parse(id).unwrap()),
    }
}

#[test]
fn javascript_link_stays_literal() {
    assert_eq!(
        tokenize("[Click](javascript:alert(1))"),
        vec![Token::text("[Click](javascript:alert(1))")]
    );
}

#[test]
fn invalid_mention_id_drops_id_only() {
    assert_eq!(
        tokenize("@user[not-a-uuid]"),
        vec![mention("user", MentionKind::User, None)]
    );
}

#[test]
fn bold_with_nested_italic() {
    insta::assert_debug_snapshot!(tokenize("**bold *and italic* text**"), @r#"
    [
        Bold {
            content: [
                Text {
                    content: "bold ",
                },
                Italic {
                    content: [
                        Text {
                            content: "and italic",
                        },
                    ],
                },
                Text {
                    content: " text",
                },
            ],
        },
    ]
    "#);
}

#[test]
fn two_lines() {
    insta::assert_debug_snapshot!(tokenize("Line 1\nLine 2"), @r#"
    [
        Text {
            content: "Line 1",
        },
        LineBreak,
        Text {
            content: "Line 2",
        },
    ]
    "#);
}

#[test]
fn long_mention_name_truncates_to_fifty() {
    let name = "abcdefghij".repeat(10);
    let tokens = tokenize(&format!("@{name}[{ID}]"));
    assert_eq!(
        tokens,
        vec![mention(&name[..50], MentionKind::User, Some(ID))]
    );
}

#[test]
fn channel_mention_with_id() {
    assert_eq!(
        tokenize(&format!("see #general[{ID}]!")),
        vec![
            Token::text("see "),
            mention("general", MentionKind::Channel, Some(ID)),
            Token::text("!"),
        ]
    );
}

#[test]
fn mixed_message() {
    let input = format!(
        "hey @alice[{ID}], check [the docs](https://example.com/docs) and ||don't tell||\n> **quoted** https://x.example"
    );
    assert_eq!(
        tokenize(&input),
        vec![
            Token::text("hey "),
            mention("alice", MentionKind::User, Some(ID)),
            Token::text(", check "),
            Token::Link {
                text: "the docs".into(),
                url: SafeUrl::parse("https://example.com/docs").unwrap(),
            },
            Token::text(" and "),
            Token::Spoiler {
                content: vec![Token::text("don't tell")]
            },
            Token::LineBreak,
            Token::Quote {
                content: vec![
                    Token::Bold {
                        content: vec![Token::text("quoted")]
                    },
                    Token::text(" "),
                    Token::Link {
                        text: "https://x.example".into(),
                        url: SafeUrl::parse("https://x.example").unwrap(),
                    },
                ]
            },
        ]
    );
}

#[rstest]
#[case("[x](javascript:alert(1))")]
#[case("[x](JAVASCRIPT:alert(1))")]
#[case("[x](data:text/html;base64,PHNjcmlwdD4=)")]
#[case("[x](vbscript:msgbox(1))")]
#[case("[x](javascript%3Aalert(1))")]
#[case("[x](%6Aavascript:alert(1))")]
#[case("[x](//evil.example/steal)")]
#[case("[x](mailto:javascript:alert(1))")]
#[case("[x](mailto:%6Aavascript:alert(1))")]
#[case("[x]( )")]
fn unsafe_links_never_become_links(#[case] input: &str) {
    let tokens = tokenize(input);
    assert_eq!(tokens, vec![Token::text(input)]);
}

#[rstest]
#[case("http://example.com", "http://example.com")]
#[case("HTTPS://EXAMPLE.COM/A", "HTTPS://EXAMPLE.COM/A")]
#[case("mailto:someone@example.com", "mailto:someone@example.com")]
#[case(" https://padded.example ", "https://padded.example")]
fn safe_link_targets(#[case] target: &str, #[case] stored: &str) {
    let tokens = tokenize(&format!("[x]({target})"));
    match tokens.as_slice() {
        [Token::Link { text, url }] => {
            assert_eq!(text, "x");
            assert_eq!(url.as_str(), stored);
        }
        other => panic!("expected a single link, got {other:?}"),
    }
}

#[rstest]
#[case("../../../etc/passwd")]
#[case("550e8400-e29b-41d4-a716-446655440000extra")]
#[case("550e8400-e29b-11d4-a716-446655440000")]
#[case("550e8400-e29b-41d4-c716-446655440000")]
#[case("550e8400e29b41d4a716446655440000")]
#[case("1' OR '1'='1")]
#[case("550e8400%2De29b%2D41d4%2Da716%2D446655440000")]
fn forged_identifiers_leave_mention_without_id(#[case] id: &str) {
    assert_eq!(
        tokenize(&format!("@mallory[{id}]")),
        vec![mention("mallory", MentionKind::User, None)]
    );
}
