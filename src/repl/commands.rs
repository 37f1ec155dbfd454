//! Command table
//!
//! Maps the first word of an input line to a [`Command`].

use crate::error::{CommandError, CommandResult};

/// Name and help text of one REPL command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "map",
        description: "Displays the next 20 map locations",
    },
    CommandInfo {
        name: "mapb",
        description: "Displays the previous 20 map locations",
    },
    CommandInfo {
        name: "explore",
        description: "Displays the Pokemon in a specified zone",
    },
    CommandInfo {
        name: "catch",
        description: "Catch the specified Pokemon",
    },
    CommandInfo {
        name: "inspect",
        description: "View information about a specified Pokemon",
    },
    CommandInfo {
        name: "pokedex",
        description: "View the entire contents of your Pokedex",
    },
];

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses one input line.
    ///
    /// The line is trimmed and lower-cased; words past the first argument are
    /// ignored. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let line = line.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next().map(str::to_string);

        let command = match name {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(arg, "explore", "a location area name")?),
            "catch" => Command::Catch(required(arg, "catch", "a Pokemon name")?),
            "inspect" => Command::Inspect(required(arg, "inspect", "a Pokemon name")?),
            "pokedex" => Command::Pokedex,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn required(
    arg: Option<String>,
    command: &'static str,
    what: &'static str,
) -> CommandResult<String> {
    arg.ok_or(CommandError::MissingArgument { command, what })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("  MAP  ").unwrap(), Some(Command::Map));
        assert_eq!(Command::parse("mapb\n").unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse("pokedex").unwrap(), Some(Command::Pokedex));
    }

    #[test]
    fn test_parse_argument_lowercased() {
        assert_eq!(
            Command::parse("Catch Pikachu extra").unwrap(),
            Some(Command::Catch("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse("explore   pastoria-city-area").unwrap(),
            Some(Command::Explore("pastoria-city-area".to_string()))
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(Command::parse("   \n").unwrap(), None);
    }

    #[test]
    fn test_parse_missing_argument() {
        let err = Command::parse("inspect").unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingArgument {
                command: "inspect",
                ..
            }
        ));
    }

    #[test]
    fn test_parse_unknown() {
        let err = Command::parse("fly away").unwrap_err();
        assert!(matches!(err, CommandError::UnknownCommand(ref word) if word == "fly"));
    }

    #[test]
    fn test_every_parsable_command_is_listed() {
        for info in COMMANDS {
            let line = format!("{} x", info.name);
            assert!(Command::parse(&line).unwrap().is_some(), "{}", info.name);
        }
    }
}
