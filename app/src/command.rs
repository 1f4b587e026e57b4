//! Parsing of the line-oriented input the terminal page accepts.

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  name <text>    set the name field
  email <text>   set the email field
  submit         add the user, or save the one being edited
  edit <n>       load user #n into the form
  cancel         leave edit mode and clear the form
  delete <n>     delete user #n (asks for confirmation)
  refresh        reload the list from the server
  help           show this text
  quit           exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Email(String),
    Submit,
    /// 1-based position in the displayed list.
    Edit(usize),
    Cancel,
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for the list")]
    Unknown(String),

    #[error("`{0}` needs a user number")]
    MissingIndex(&'static str),

    #[error("`{0}` is not a user number")]
    BadIndex(String),
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "name" => Command::Name(rest.to_string()),
            "email" => Command::Email(rest.to_string()),
            "submit" => Command::Submit,
            "edit" => Command::Edit(parse_index("edit", rest)?),
            "cancel" => Command::Cancel,
            "delete" => Command::Delete(parse_index("delete", rest)?),
            "refresh" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(word.to_string())),
        };
        Ok(Some(command))
    }
}

fn parse_index(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingIndex(command));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadIndex(arg.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_text_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("name  Ann  Lee\n"),
            Ok(Some(Command::Name("Ann  Lee".to_string())))
        );
    }

    #[test]
    fn bare_field_command_clears_it() {
        assert_eq!(Command::parse("email"), Ok(Some(Command::Email(String::new()))));
    }

    #[test]
    fn indexed_commands() {
        assert_eq!(Command::parse("edit 2"), Ok(Some(Command::Edit(2))));
        assert_eq!(Command::parse("DELETE 1"), Ok(Some(Command::Delete(1))));
    }

    #[test]
    fn index_must_be_positive_number() {
        assert_eq!(Command::parse("edit"), Err(CommandError::MissingIndex("edit")));
        assert_eq!(
            Command::parse("delete 0"),
            Err(CommandError::BadIndex("0".to_string()))
        );
        assert_eq!(
            Command::parse("delete two"),
            Err(CommandError::BadIndex("two".to_string()))
        );
    }

    #[test]
    fn blank_and_unknown() {
        assert_eq!(Command::parse("   "), Ok(None));
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}
