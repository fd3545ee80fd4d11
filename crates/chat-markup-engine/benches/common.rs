// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub const MENTION_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

#[allow(dead_code)]
pub fn generate_chat_message(lines: usize) -> String {
    let mut content = String::new();
    for line in 0..lines {
        if line > 0 {
            content.push('\n');
        }
        match line % 4 {
            0 => content.push_str(&format!(
                "hey @alice[{MENTION_ID}], **line {line}** has *some* ||hidden|| text"
            )),
            1 => content.push_str("> quoted reply with a link https://example.com/thread"),
            2 => content.push_str("see [the docs](https://example.com/docs/page) in #general"),
            _ => content.push_str("plain words with a stray * and a | pipe"),
        }
    }
    content
}

#[allow(dead_code)]
pub fn generate_nested_message(depth: usize) -> String {
    let open = ["**", "||", "*"];
    let mut content = String::new();
    for level in 0..depth {
        content.push_str(open[level % open.len()]);
        content.push_str("x ");
    }
    content.push_str("core");
    for level in (0..depth).rev() {
        content.push_str(open[level % open.len()]);
    }
    content
}
