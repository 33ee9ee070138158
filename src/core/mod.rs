//! Core tracker types: snapshots, buckets, roster, errors, configuration.
//!
//! Everything here is plain data. `History` and `Encounter` build on it;
//! nothing in this module knows about undo or about a front-end.

pub mod bucket;
pub mod config;
pub mod error;
pub mod roster;
pub mod snapshot;

pub use bucket::{Bucket, Living};
pub use config::TrackerConfig;
pub use error::{Result, TrackerError};
pub use roster::Roster;
pub use snapshot::Snapshot;
