//! Slash-command parsing.

/// A recognised command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Situation,
    Resources,
    Communicate,
    Safety,
    Other,
    /// `/send <id> <text>`: `target` is the first argument if any, `body` the rest joined by single spaces.
    Send {
        target: Option<String>,
        body: String,
    },
}

impl Command {
    /// Parses `text` as a command. Returns None for plain text and unknown commands.
    ///
    /// A `/command@name` suffix must name this bot (case-insensitive); commands addressed to other
    /// bots in a group return None. While `bot_username` is still unknown any suffix is accepted.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let mut words = text.split_whitespace();
        let head = words.next()?.strip_prefix('/')?;
        let name = match head.split_once('@') {
            Some((name, mention)) => match bot_username {
                Some(own) if !mention.eq_ignore_ascii_case(own) => return None,
                _ => name,
            },
            None => head,
        };
        let command = match name.to_ascii_lowercase().as_str() {
            "start" => Command::Start,
            "situation" => Command::Situation,
            "resources" => Command::Resources,
            "communicate" => Command::Communicate,
            "safety" => Command::Safety,
            "other" => Command::Other,
            "send" => {
                let target = words.next().map(str::to_string);
                let body = words.collect::<Vec<_>>().join(" ");
                Command::Send { target, body }
            }
            _ => return None,
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_commands() {
        assert_eq!(Command::parse("/start", None), Some(Command::Start));
        assert_eq!(Command::parse("  /situation  ", None), Some(Command::Situation));
        assert_eq!(Command::parse("/resources", None), Some(Command::Resources));
        assert_eq!(Command::parse("/communicate", None), Some(Command::Communicate));
        assert_eq!(Command::parse("/safety", None), Some(Command::Safety));
        assert_eq!(Command::parse("/other", None), Some(Command::Other));
    }

    #[test]
    fn test_parse_accepts_own_mention() {
        assert_eq!(Command::parse("/start@relay_bot", Some("relay_bot")), Some(Command::Start));
        assert_eq!(Command::parse("/start@Relay_Bot", Some("relay_bot")), Some(Command::Start));
        assert_eq!(
            Command::parse("/send@relay_bot 42 hi", Some("relay_bot")),
            Some(Command::Send {
                target: Some("42".to_string()),
                body: "hi".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_mention_of_other_bot() {
        assert_eq!(Command::parse("/start@other_bot", Some("relay_bot")), None);
        assert_eq!(Command::parse("/send@other_bot 42 hi", Some("relay_bot")), None);
    }

    #[test]
    fn test_parse_accepts_any_mention_before_username_is_known() {
        assert_eq!(Command::parse("/start@other_bot", None), Some(Command::Start));
    }

    #[test]
    fn test_parse_without_mention_ignores_bot_username() {
        assert_eq!(Command::parse("/safety", Some("relay_bot")), Some(Command::Safety));
    }

    #[test]
    fn test_parse_send_rejoins_body_with_single_spaces() {
        assert_eq!(
            Command::parse("/send 42   hello \n  there", None),
            Some(Command::Send {
                target: Some("42".to_string()),
                body: "hello there".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_send_without_arguments() {
        assert_eq!(
            Command::parse("/send", None),
            Some(Command::Send {
                target: None,
                body: String::new(),
            })
        );
        assert_eq!(
            Command::parse("/send 42", None),
            Some(Command::Send {
                target: Some("42".to_string()),
                body: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_ignores_plain_text_and_unknown_commands() {
        assert_eq!(Command::parse("hello", None), None);
        assert_eq!(Command::parse("", None), None);
        assert_eq!(Command::parse("/unknown", None), None);
    }
}
