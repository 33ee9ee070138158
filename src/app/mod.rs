//! Application layer between a front-end and the core.
//!
//! [`Tracker`] is the one owner of the roster and the running encounter.
//! Front-ends hold a `Tracker`, translate user gestures into [`Command`]s
//! (or call its methods directly), and render [`Tracker::current`].

mod command;
mod tracker;

pub use command::Command;
pub use tracker::Tracker;
