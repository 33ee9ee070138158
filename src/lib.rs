//! # initiative-tracker
//!
//! Turn tracking for tabletop combat encounters.
//!
//! A roster of combatants starts a fight. During the fight each combatant
//! is waiting, has acted, or is dead, and every change can be undone and
//! redone. Ending the fight hands names added mid-fight back to the roster.
//!
//! ## Architecture
//!
//! - **Persistent Snapshots**: Each state of a fight is an immutable
//!   `Snapshot` built from `im::Vector`s. Transitions build a new snapshot
//!   and never edit a stored one.
//!
//! - **Linear History**: `History<S>` keeps an undo stack (never empty)
//!   and a redo stack (cleared on every push).
//!
//! - **Explicit Context**: `Tracker` owns the roster and the running
//!   encounter. No global state.
//!
//! ## Modules
//!
//! - `core`: Snapshot, buckets, roster, errors, configuration
//! - `history`: Generic undo/redo history
//! - `encounter`: Fight state machine over `History<Snapshot>`
//! - `app`: Top-level `Tracker` context and text commands

pub mod core;
pub mod history;
pub mod encounter;
pub mod app;

// Re-export commonly used types
pub use crate::core::{
    Bucket, Living,
    Roster, Snapshot,
    TrackerConfig, TrackerError, Result,
};

pub use crate::history::History;

pub use crate::encounter::Encounter;

pub use crate::app::{Command, Tracker};
