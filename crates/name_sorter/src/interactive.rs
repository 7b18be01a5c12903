use ::std::io::{self, BufRead, Write};
use ::std::path::PathBuf;

use ::log::debug;
use ::thiserror::Error;

pub const SORT_COMMAND: &str = "name-sorter";
pub const EXIT_COMMAND: &str = "exit";

const PROMPT: &str =
    "Enter command (e.g., name-sorter <input-file-path>) or 'exit' to quit: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    SortNames(PathBuf),
    Exit,
}

/// Reasons a prompt line is rejected. The prompt repeats after each of them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandLineError {
    #[error("Invalid command: {0}.\nUsage: name-sorter <input-file-path>")]
    Blank(String),

    #[error("Missing input file path. Usage: name-sorter <input-file-path>")]
    MissingPath,

    #[error("Invalid command. Usage: name-sorter <input-file-path>")]
    Unknown(String),
}

pub struct InteractiveMode;

impl InteractiveMode {
    /// Prompts until a valid command is entered.
    ///
    /// Returns `Ok(None)` when the input ends before that happens.
    pub fn read_command<R, O, E>(
        input: &mut R,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<Option<PromptCommand>>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let mut buffer = String::new();
            if input.read_line(&mut buffer)? == 0 {
                debug!("Input closed before a command was entered");
                return Ok(None);
            }

            match Self::parse_command(&buffer) {
                Ok(PromptCommand::Exit) => {
                    writeln!(out, "Exiting.")?;
                    return Ok(Some(PromptCommand::Exit));
                },
                Ok(command) => return Ok(Some(command)),
                Err(exception) => {
                    debug!("Rejected command line {buffer:?}");
                    writeln!(err, "{exception}")?;
                },
            }
        }
    }

    pub fn parse_command(line: &str) -> Result<PromptCommand, CommandLineError> {
        let buffer = line.trim();

        let parts: Vec<&str> =
            buffer.split(' ').filter(|part| !part.is_empty()).collect();
        let Some(command) = parts.first() else {
            return Err(CommandLineError::Blank(buffer.to_string()));
        };

        if command.eq_ignore_ascii_case(EXIT_COMMAND) {
            return Ok(PromptCommand::Exit);
        }

        if *command != SORT_COMMAND {
            return Err(CommandLineError::Unknown(command.to_string()));
        }

        parts
            .get(1)
            .map(|path| PromptCommand::SortNames(PathBuf::from(*path)))
            .ok_or(CommandLineError::MissingPath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ::std::io::Cursor;

    fn drive(input: &str) -> (Option<PromptCommand>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(input);
        let command =
            InteractiveMode::read_command(&mut input, &mut out, &mut err).unwrap();
        (command, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_parse_command() {
        let test_cases = [
            (
                "name-sorter names.txt",
                Ok(PromptCommand::SortNames("names.txt".into())),
            ),
            (
                "  name-sorter   ./in/names.txt  extra",
                Ok(PromptCommand::SortNames("./in/names.txt".into())),
            ),
            ("exit", Ok(PromptCommand::Exit)),
            ("EXIT now", Ok(PromptCommand::Exit)),
            ("", Err(CommandLineError::Blank(String::new()))),
            ("   ", Err(CommandLineError::Blank(String::new()))),
            ("name-sorter", Err(CommandLineError::MissingPath)),
            (
                "Name-Sorter names.txt",
                Err(CommandLineError::Unknown("Name-Sorter".into())),
            ),
            ("sort names.txt", Err(CommandLineError::Unknown("sort".into()))),
        ];

        for (line, expected) in test_cases {
            let parsed = InteractiveMode::parse_command(line);
            assert_eq!(parsed, expected, "line {line:?}");
        }
    }

    #[test]
    fn test_prompt_repeats_until_valid_command() {
        let (command, out, err) =
            drive("\nhello\nname-sorter\nname-sorter names.txt\n");

        assert_eq!(command, Some(PromptCommand::SortNames("names.txt".into())));
        assert_eq!(out.matches(PROMPT).count(), 4);
        let usage = "Usage: name-sorter <input-file-path>";
        assert!(err.contains(&format!("Invalid command: .\n{usage}")));
        assert!(err.contains(&format!("Invalid command. {usage}")));
        assert!(err.contains("Missing input file path."));
    }

    #[test]
    fn test_exit_command() {
        let (command, out, err) = drive("exit\nname-sorter names.txt\n");

        assert_eq!(command, Some(PromptCommand::Exit));
        assert!(out.ends_with("Exiting.\n"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_closed_input() {
        let (command, out, _) = drive("bogus\n");

        assert_eq!(command, None);
        assert_eq!(out.matches(PROMPT).count(), 2);
    }
}
