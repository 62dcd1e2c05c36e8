//! Command suite.

use std::{str::FromStr, sync::Arc};

use derive_more::{Deref, Display, Error};

use crate::{
    config::Config,
    http::Client,
    screen::{UserList, UserSource},
};

/// Command context.
///
/// Drills the screen and config down to the command handlers.
#[derive(Debug, Deref)]
pub struct Context<S = Client> {
    /// The screen commands act on.
    #[deref]
    pub screen: Arc<UserList<S>>,
    pub config: Arc<Config>,
}

impl<S> Clone for Context<S> {
    fn clone(&self) -> Self {
        Context {
            screen: self.screen.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S> Context<S>
where
    S: UserSource,
{
    /// Creates a new `Context`.
    pub fn new(screen: UserList<S>, config: Arc<Config>) -> Context<S> {
        Context {
            screen: Arc::new(screen),
            config,
        }
    }
}

/// A gesture typed at the prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Pull to refresh.
    Refresh,
    /// Add a single user to the top of the list.
    Add,
    /// Draw the list again.
    List,
    /// Print the key of every row.
    Keys,
    Help,
    Quit,
}

impl Command {
    /// Every command, in the order they are listed by `help`.
    pub const ALL: [Command; 6] = [
        Command::Refresh,
        Command::Add,
        Command::List,
        Command::Keys,
        Command::Help,
        Command::Quit,
    ];

    /// The full name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Refresh => "refresh",
            Command::Add => "add",
            Command::List => "list",
            Command::Keys => "keys",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    /// A short description of the command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Refresh => "Replaces the list with a fresh batch of users",
            Command::Add => "Adds a single user to the top of the list",
            Command::List => "Draws the list again",
            Command::Keys => "Prints the key of every row",
            Command::Help => "Shows this message",
            Command::Quit => "Exits",
        }
    }
}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "refresh" => Ok(Command::Refresh),
            "a" | "add" | "+" => Ok(Command::Add),
            "l" | "list" | "ls" => Ok(Command::List),
            "k" | "keys" => Ok(Command::Keys),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(UnknownCommand(s.trim().to_string())),
        }
    }
}

/// Returns the help text listing every command.
pub fn help() -> String {
    Command::ALL
        .iter()
        .map(|command| {
            let name = command.name();
            format!("  {}/{:<8} {}", &name[..1], name, command.description())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Clone, Debug, Display, Error)]
#[display("no such command \"{_0}\" exists")]
pub struct UnknownCommand(#[error(not(source))] String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("r".parse::<Command>().unwrap(), Command::Refresh);
        assert_eq!(" Refresh \n".parse::<Command>().unwrap(), Command::Refresh);
        assert_eq!("+".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn unknown_command() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "no such command \"dance\" exists");
    }

    #[test]
    fn help_lists_every_command() {
        let help = help();

        for command in Command::ALL {
            assert!(help.contains(command.name()));
        }
    }
}
