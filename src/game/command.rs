//! Player commands and feature levels
//!
//! A line of input is reduced to its first non-whitespace character,
//! lowercased. Everything after it is ignored.

use crate::map::Direction;
use std::fmt;

/// Recognized player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Walk to a child room (`e` left, `d` right)
    Move(Direction),

    /// Show the clue ledger (`p`)
    ListClues,

    /// Show the clue → suspect associations (`a`)
    ListAssociations,

    /// Stop exploring (`s`)
    Quit,
}

impl Command {
    /// Key the player types for this command
    pub fn key(&self) -> char {
        match self {
            Command::Move(Direction::Left) => 'e',
            Command::Move(Direction::Right) => 'd',
            Command::ListClues => 'p',
            Command::ListAssociations => 'a',
            Command::Quit => 's',
        }
    }

    /// Decode a (lowercase) key
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'e' => Some(Command::Move(Direction::Left)),
            'd' => Some(Command::Move(Direction::Right)),
            'p' => Some(Command::ListClues),
            'a' => Some(Command::ListAssociations),
            's' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// One line of input, classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A recognized command
    Command(Command),

    /// Blank or whitespace-only line
    Empty,

    /// First character is not a command key
    Unknown(char),
}

impl Input {
    /// Classify a line by its first non-whitespace character
    pub fn parse(line: &str) -> Self {
        let Some(first) = line.chars().find(|c| !c.is_whitespace()) else {
            return Input::Empty;
        };
        let key = first.to_lowercase().next().unwrap_or(first);

        match Command::from_key(key) {
            Some(command) => Input::Command(command),
            None => Input::Unknown(first),
        }
    }
}

/// Feature tier of a session
///
/// Each tier adds one structure on top of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Level {
    /// Map only: move and quit
    Novice,

    /// Adds the clue ledger
    Adventurer,

    /// Adds the suspect index and the final accusation
    Master,
}

impl Level {
    /// Check whether `command` is enabled at this level
    pub fn allows(&self, command: Command) -> bool {
        match command {
            Command::Move(_) | Command::Quit => true,
            Command::ListClues => self.records_clues(),
            Command::ListAssociations => self.records_suspects(),
        }
    }

    /// Clues are recorded in the ledger
    pub fn records_clues(&self) -> bool {
        !matches!(self, Level::Novice)
    }

    /// Clue → suspect pairs are recorded in the index
    pub fn records_suspects(&self) -> bool {
        matches!(self, Level::Master)
    }

    /// Enabled command keys, in menu order
    pub fn keys(&self) -> Vec<char> {
        [
            Command::Move(Direction::Left),
            Command::Move(Direction::Right),
            Command::ListClues,
            Command::ListAssociations,
            Command::Quit,
        ]
        .into_iter()
        .filter(|command| self.allows(*command))
        .map(|command| command.key())
        .collect()
    }

    /// Human list of enabled keys: `'e', 'd' ou 's'`
    pub fn key_list(&self) -> String {
        let quoted: Vec<String> = self.keys().iter().map(|k| format!("'{k}'")).collect();
        match quoted.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} ou {}", rest.join(", "), last),
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Novice => write!(f, "novato"),
            Level::Adventurer => write!(f, "aventureiro"),
            Level::Master => write!(f, "mestre"),
        }
    }
}
