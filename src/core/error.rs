//! Recoverable errors surfaced by the application layer.
//!
//! Core operations on [`History`](crate::history::History) and
//! [`Encounter`](crate::encounter::Encounter) panic on precondition
//! violations. `Tracker` checks those guards first and reports a
//! `TrackerError` instead, so a front-end never reaches a panic.

use thiserror::Error;

/// Errors returned by [`Tracker`](crate::app::Tracker) and command parsing.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("no encounter is running")]
    NoEncounter,

    #[error("an encounter is already running")]
    EncounterInProgress,

    #[error("cannot start a fight with an empty roster")]
    EmptyRoster,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("index {index} is out of range for {list} ({len} entries)")]
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    #[error("{0} combatant(s) still waiting to act this round")]
    RoundInProgress(usize),

    #[error("combatant name must not be empty")]
    EmptyName,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid bucket: {0}")]
    InvalidBucket(String),

    #[error("invalid index: {0}")]
    InvalidIndex(String),

    #[error("failed to read config: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result alias for tracker operations.
pub type Result<T> = std::result::Result<T, TrackerError>;
