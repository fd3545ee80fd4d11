use anyhow::{Context, Result, bail};
use chat_markup_config::Config;
use chat_markup_engine::{
    MentionKind, RenderOptions, RichDocument, count_mentions_in_messages, serialize,
    to_html_with, to_plain_text, tokenize,
};
use std::{
    env,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "\
Usage:
  chat-markup tokens [FILE]
  chat-markup html [FILE]
  chat-markup text [FILE]
  chat-markup mentions <user|channel> <ID> [FILE]...
  chat-markup serialize <DOC.toml>

Reads the message from stdin when no FILE is given.";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Tokens(Option<PathBuf>),
    Html(Option<PathBuf>),
    Text(Option<PathBuf>),
    Mentions {
        kind: MentionKind,
        id: String,
        files: Vec<PathBuf>,
    },
    Serialize(PathBuf),
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((command, rest)) = args.split_first() else {
        bail!("missing command");
    };

    let single_file = |rest: &[String]| -> Result<Option<PathBuf>> {
        match rest {
            [] => Ok(None),
            [file] => Ok(Some(PathBuf::from(file))),
            _ => bail!("`{command}` takes at most one FILE"),
        }
    };

    match command.as_str() {
        "tokens" => Ok(Command::Tokens(single_file(rest)?)),
        "html" => Ok(Command::Html(single_file(rest)?)),
        "text" => Ok(Command::Text(single_file(rest)?)),
        "mentions" => {
            let [kind, id, files @ ..] = rest else {
                bail!("`mentions` needs a kind and an ID");
            };
            let kind = match kind.as_str() {
                "user" => MentionKind::User,
                "channel" => MentionKind::Channel,
                other => bail!("unknown mention kind `{other}`, expected user or channel"),
            };
            Ok(Command::Mentions {
                kind,
                id: id.clone(),
                files: files.iter().map(PathBuf::from).collect(),
            })
        }
        "serialize" => match rest {
            [doc] => Ok(Command::Serialize(PathBuf::from(doc))),
            _ => bail!("`serialize` needs exactly one DOC.toml"),
        },
        other => bail!("unknown command `{other}`"),
    }
}

fn read_message(file: Option<&Path>, config: &Config) -> Result<String> {
    let message = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    check_length(&message, config)?;
    Ok(message)
}

fn check_length(message: &str, config: &Config) -> Result<()> {
    let chars = message.chars().count();
    log::debug!(
        "message is {chars} characters, limit {}",
        config.max_message_length
    );
    if !config.allows_length(chars) {
        bail!(
            "message is {chars} characters, over the limit of {}",
            config.max_message_length
        );
    }
    Ok(())
}

fn render_options(config: &Config) -> RenderOptions {
    RenderOptions {
        link_target_blank: config.render.link_target_blank,
    }
}

fn run(command: Command, config: &Config) -> Result<String> {
    match command {
        Command::Tokens(file) => {
            let message = read_message(file.as_deref(), config)?;
            Ok(format!("{:#?}", tokenize(&message)))
        }
        Command::Html(file) => {
            let message = read_message(file.as_deref(), config)?;
            Ok(to_html_with(&tokenize(&message), &render_options(config)))
        }
        Command::Text(file) => {
            let message = read_message(file.as_deref(), config)?;
            Ok(to_plain_text(&tokenize(&message)))
        }
        Command::Mentions { kind, id, files } => {
            let messages = if files.is_empty() {
                vec![read_message(None, config)?]
            } else {
                files
                    .iter()
                    .map(|file| read_message(Some(file), config))
                    .collect::<Result<Vec<_>>>()?
            };
            Ok(count_mentions_in_messages(&messages, kind, &id).to_string())
        }
        Command::Serialize(doc) => {
            let content = std::fs::read_to_string(&doc)
                .with_context(|| format!("Failed to read {}", doc.display()))?;
            let document: RichDocument = toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", doc.display()))?;
            Ok(serialize(&document))
        }
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {e}\n\n{USAGE}");
            process::exit(2);
        }
    };

    log::info!("Config path: {}", Config::config_path().display());
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            log::info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match run(command, &config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const ALICE: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_args(&args(&["tokens"])).unwrap(), Command::Tokens(None));
        assert_eq!(
            parse_args(&args(&["html", "msg.txt"])).unwrap(),
            Command::Html(Some(PathBuf::from("msg.txt")))
        );
        assert_eq!(
            parse_args(&args(&["mentions", "channel", ALICE, "a", "b"])).unwrap(),
            Command::Mentions {
                kind: MentionKind::Channel,
                id: ALICE.to_string(),
                files: vec![PathBuf::from("a"), PathBuf::from("b")],
            }
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_args(&[]).is_err());
        assert!(parse_args(&args(&["frobnicate"])).is_err());
        assert!(parse_args(&args(&["text", "a", "b"])).is_err());
        assert!(parse_args(&args(&["mentions", "robot", ALICE])).is_err());
        assert!(parse_args(&args(&["mentions", "user"])).is_err());
        assert!(parse_args(&args(&["serialize"])).is_err());
    }

    #[test]
    fn enforces_length_cap() {
        let config = Config {
            max_message_length: 5,
            ..Config::default()
        };
        assert!(check_length("héllo", &config).is_ok());
        let err = check_length("hello!", &config).unwrap_err();
        assert!(err.to_string().contains("limit of 5"));
    }

    #[test]
    fn renders_file_with_configured_options() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("msg.txt");
        std::fs::write(&file, "see [docs](https://example.com)").unwrap();
        let config = Config {
            render: chat_markup_config::RenderConfig {
                link_target_blank: false,
            },
            ..Config::default()
        };

        let html = run(Command::Html(Some(file.clone())), &config).unwrap();
        assert!(html.contains("<a href=\"https://example.com\""));
        assert!(!html.contains("target="));

        assert_eq!(
            run(Command::Text(Some(file)), &config).unwrap(),
            "see docs"
        );
    }

    #[test]
    fn counts_mentions_across_files() {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("1.txt");
        let second = temp_dir.path().join("2.txt");
        std::fs::write(&first, format!("@alice[{ALICE}] and **@alice[{ALICE}]**")).unwrap();
        std::fs::write(&second, format!("#alice[{ALICE}] @alice")).unwrap();

        let count = run(
            Command::Mentions {
                kind: MentionKind::User,
                id: ALICE.to_string(),
                files: vec![first, second],
            },
            &Config::default(),
        )
        .unwrap();
        assert_eq!(count, "2");
    }

    #[test]
    fn over_long_file_is_refused() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("long.txt");
        std::fs::write(&file, "x".repeat(11)).unwrap();
        let config = Config {
            max_message_length: 10,
            ..Config::default()
        };

        assert!(run(Command::Tokens(Some(file)), &config).is_err());
    }

    #[test]
    fn serializes_toml_document() {
        let temp_dir = TempDir::new().unwrap();
        let doc = temp_dir.path().join("doc.toml");
        std::fs::write(
            &doc,
            format!(
                r#"
[[paragraphs]]
[[paragraphs.runs]]
type = "text"
text = "hi "

[[paragraphs.runs]]
type = "mention"
name = "alice"
kind = "user"
id = "{ALICE}"

[[paragraphs]]
[[paragraphs.runs]]
type = "text"
text = "loud"
bold = true
"#
            ),
        )
        .unwrap();

        assert_eq!(
            run(Command::Serialize(doc), &Config::default()).unwrap(),
            format!("hi @alice[{ALICE}]\n**loud**")
        );
    }
}
