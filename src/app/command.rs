//! Text commands understood by the tracker.
//!
//! One command per line, words separated by whitespace:
//!
//! | Line               | Command                      |
//! |--------------------|------------------------------|
//! | `add Goblin Archer`| `Add("Goblin Archer")`       |
//! | `remove 2`         | `Remove(2)`                  |
//! | `start`            | `Start`                      |
//! | `act 0`            | `Act(0)`                     |
//! | `kill acted 1`     | `Kill(Living::Acted, 1)`     |
//! | `next`             | `NextRound`                  |
//! | `undo` / `redo`    | `Undo` / `Redo`              |
//! | `end`              | `End`                        |
//! | `show`             | `Show`                       |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Living, TrackerError};

/// A request from a front-end.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Add a name to the roster, or to the fight if one is running.
    Add(String),
    /// Drop a name from the roster (between fights only).
    Remove(usize),
    Start,
    Act(usize),
    Kill(Living, usize),
    NextRound,
    Undo,
    Redo,
    End,
    /// Render without changing anything.
    Show,
}

fn parse_index(word: Option<&str>) -> Result<usize, TrackerError> {
    let word = word.ok_or_else(|| TrackerError::InvalidIndex(String::new()))?;
    word.parse()
        .map_err(|_| TrackerError::InvalidIndex(word.to_string()))
}

impl FromStr for Command {
    type Err = TrackerError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let mut args = rest.split_whitespace();

        match verb.to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add(rest.to_string())),
            "remove" | "rm" => Ok(Command::Remove(parse_index(args.next())?)),
            "start" | "fight" => Ok(Command::Start),
            "act" => Ok(Command::Act(parse_index(args.next())?)),
            "kill" => {
                let from = args
                    .next()
                    .ok_or_else(|| TrackerError::InvalidBucket(String::new()))?
                    .parse::<Living>()?;
                Ok(Command::Kill(from, parse_index(args.next())?))
            }
            "next" => Ok(Command::NextRound),
            "undo" => Ok(Command::Undo),
            "redo" => Ok(Command::Redo),
            "end" => Ok(Command::End),
            "show" | "" => Ok(Command::Show),
            _ => Err(TrackerError::UnknownCommand(verb.to_string())),
        }
    }
}
