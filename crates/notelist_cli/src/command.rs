//! Line command parsing for the interactive loop.

use notelist_core::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const USAGE: &str = "commands: add <text> | rm <id> | list | json | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Form submit with the raw text after `add `.
    Add(String),
    Remove(NoteId),
    List,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unknown(String),
    InvalidId(String),
    MissingId,
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "unknown command `{word}`"),
            Self::InvalidId(value) => write!(f, "note id must be an integer, got `{value}`"),
            Self::MissingId => write!(f, "rm needs a note id"),
        }
    }
}

impl Error for CommandError {}

/// Parses one input line. Blank lines yield `None`.
///
/// `add` keeps its argument verbatim apart from the separating space, so
/// `add` with nothing after it submits empty content.
pub fn parse_line(line: &str) -> Option<Result<Command, CommandError>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return None;
    }
    let (word, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let command = match word.trim_end() {
        "add" => Ok(Command::Add(rest.to_string())),
        "rm" | "remove" => parse_id(rest).map(Command::Remove),
        "list" | "ls" => Ok(Command::List),
        "json" => Ok(Command::Json),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    };
    Some(command)
}

fn parse_id(value: &str) -> Result<NoteId, CommandError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CommandError::MissingId);
    }
    value
        .parse::<NoteId>()
        .map_err(|_| CommandError::InvalidId(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_line, Command, CommandError};

    #[test]
    fn parses_add_with_verbatim_text() {
        assert_eq!(
            parse_line("add Buy  milk\n"),
            Some(Ok(Command::Add("Buy  milk".to_string())))
        );
        assert_eq!(parse_line("add"), Some(Ok(Command::Add(String::new()))));
    }

    #[test]
    fn parses_remove_ids() {
        assert_eq!(parse_line("rm 3"), Some(Ok(Command::Remove(3))));
        assert_eq!(parse_line("remove  12 "), Some(Ok(Command::Remove(12))));
        assert_eq!(parse_line("rm"), Some(Err(CommandError::MissingId)));
        assert_eq!(
            parse_line("rm one"),
            Some(Err(CommandError::InvalidId("one".to_string())))
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_line("   \n"), None);
        assert_eq!(
            parse_line("drop 1"),
            Some(Err(CommandError::Unknown("drop".to_string())))
        );
        assert_eq!(parse_line("q"), Some(Ok(Command::Quit)));
    }
}
