/// What a committed line of player input asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NewGame,
    Stop,
    Quit,
    Submit(String),
    Unknown(String),
}

/// Parse one line. Blank lines commit nothing; words are submitted as typed.
pub fn parse_line(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let command = match trimmed.strip_prefix(':') {
        Some(cmd) => match cmd.trim().to_lowercase().as_str() {
            "new" | "n" => Command::NewGame,
            "stop" => Command::Stop,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(trimmed.to_string()),
        },
        None => Command::Submit(line.to_string()),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        assert_eq!(parse_line("bead"), Some(Command::Submit("bead".into())));
        // surrounding spaces are part of the entry
        assert_eq!(parse_line(" ab"), Some(Command::Submit(" ab".into())));
        assert_eq!(parse_line("BEAD "), Some(Command::Submit("BEAD ".into())));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_line(":new"), Some(Command::NewGame));
        assert_eq!(parse_line(":N"), Some(Command::NewGame));
        assert_eq!(parse_line(":stop"), Some(Command::Stop));
        assert_eq!(parse_line(":quit"), Some(Command::Quit));
        assert_eq!(parse_line(" :q "), Some(Command::Quit));
        assert_eq!(parse_line(":help"), Some(Command::Unknown(":help".into())));
    }
}
