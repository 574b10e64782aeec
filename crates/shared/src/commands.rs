//! Commands a UI forwards to the puzzle engine
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming variants is a breaking change

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Player gestures, one per UI interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PuzzleCommand {
    /// Evaluate the filled slots
    Submit,
    /// Re-scramble the current word (or retry after no words were found)
    Shuffle,
    /// Tap a scrambled tile: it moves to the first empty slot
    TapTile { letter: char },
    /// Drop a tile onto a specific slot (0-based)
    PlaceTile { letter: char, slot: usize },
    /// Show the next definition of the current word
    RefreshHint,
    /// Switch topic; `None` means "any word"
    ChangeTopic {
        #[serde(default)]
        topic: Option<String>,
    },
}

/// Error when parsing a console command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("Invalid letter: '{0}'")]
    InvalidLetter(String),
    #[error("Invalid slot: '{0}' (slots are numbered from 1)")]
    InvalidSlot(String),
}

impl FromStr for PuzzleCommand {
    type Err = CommandParseError;

    /// Parse the console syntax:
    ///
    /// - `tap <letter>`
    /// - `place <letter> <slot>` (slot numbered from 1)
    /// - `submit`, `shuffle`, `hint`
    /// - `topic [name...]`
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.split_whitespace();
        let command = parts.next().ok_or(CommandParseError::Empty)?;

        match command.to_ascii_lowercase().as_str() {
            "submit" => Ok(Self::Submit),
            "shuffle" => Ok(Self::Shuffle),
            "hint" => Ok(Self::RefreshHint),
            "tap" => {
                let letter = parts.next().ok_or(CommandParseError::MissingArgument {
                    command: "tap",
                    expected: "a letter",
                })?;
                Ok(Self::TapTile {
                    letter: parse_letter(letter)?,
                })
            }
            "place" => {
                let letter = parts.next().ok_or(CommandParseError::MissingArgument {
                    command: "place",
                    expected: "a letter and a slot number",
                })?;
                let slot = parts.next().ok_or(CommandParseError::MissingArgument {
                    command: "place",
                    expected: "a slot number",
                })?;
                Ok(Self::PlaceTile {
                    letter: parse_letter(letter)?,
                    slot: parse_slot(slot)?,
                })
            }
            "topic" => {
                let name = parts.collect::<Vec<_>>().join(" ");
                Ok(Self::ChangeTopic {
                    topic: (!name.is_empty()).then_some(name),
                })
            }
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

fn parse_letter(raw: &str) -> Result<char, CommandParseError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(CommandParseError::InvalidLetter(raw.to_string())),
    }
}

fn parse_slot(raw: &str) -> Result<usize, CommandParseError> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandParseError::InvalidSlot(raw.to_string())),
    }
}
