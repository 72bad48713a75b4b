/// Meta-commands available in `sqlquest play`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Hint,
    Explain,
    Next,
    Prev,
    /// Jump to a puzzle by id.
    Goto(u32),
    Schema,
    Status,
    List,
    Help,
    Quit,
    /// Anything unrecognized, with the message to show.
    Unknown(String),
}

impl MetaCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim_start_matches(':').trim();
        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");
        let arg = parts.next();

        match cmd {
            "hint" | "h" => Self::Hint,
            "explain" | "e" => Self::Explain,
            "next" | "n" => Self::Next,
            "prev" | "p" | "previous" => Self::Prev,
            "goto" | "g" => match arg {
                Some(raw) => raw.parse().map_or_else(
                    |_| Self::Unknown(format!(":goto expects a puzzle id, got '{raw}'")),
                    Self::Goto,
                ),
                None => Self::Unknown(":goto requires a puzzle id".to_string()),
            },
            "schema" | "s" => Self::Schema,
            "status" | "progress" => Self::Status,
            "list" | "ls" | "l" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => Self::Unknown(format!("Unknown command ':{other}'. Type :help for help.")),
        }
    }
}

pub const HELP: &str = "\
Type SQL and finish with ';' or an empty line to run it.

  :hint        show or hide the hint
  :explain     show the reference answer (after solving)
  :next        next puzzle
  :prev        previous puzzle
  :goto <id>   jump to a puzzle
  :schema      show the tables
  :status      show progress
  :list        list all puzzles
  :help        this help
  :quit        leave (Ctrl-D also works)";

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::MetaCommand;

    #[rstest]
    #[case(":hint", MetaCommand::Hint)]
    #[case(":h", MetaCommand::Hint)]
    #[case(":explain", MetaCommand::Explain)]
    #[case(":next", MetaCommand::Next)]
    #[case(":prev", MetaCommand::Prev)]
    #[case(":goto 7", MetaCommand::Goto(7))]
    #[case(":  goto   3 ", MetaCommand::Goto(3))]
    #[case(":schema", MetaCommand::Schema)]
    #[case(":status", MetaCommand::Status)]
    #[case(":list", MetaCommand::List)]
    #[case(":help", MetaCommand::Help)]
    #[case(":q", MetaCommand::Quit)]
    fn parses(#[case] input: &str, #[case] expected: MetaCommand) {
        assert_eq!(MetaCommand::parse(input), expected);
    }

    #[rstest]
    #[case(":goto")]
    #[case(":goto seven")]
    #[case(":dance")]
    fn rejects(#[case] input: &str) {
        assert!(matches!(MetaCommand::parse(input), MetaCommand::Unknown(_)));
    }
}
