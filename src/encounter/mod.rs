//! A running fight.
//!
//! [`Encounter`] wraps a `History<Snapshot>` and exposes only the legal
//! transitions between combatant lists. Each transition reads the current
//! snapshot, builds a new one, and pushes it.
//!
//! ## Round phases
//!
//! - **Mid-round** (someone still waiting): `act`, `kill`, `add_combatant`
//! - **Round complete** (nobody waiting): `next_round`, `kill` on acted,
//!   `add_combatant`
//!
//! `undo`/`redo` move freely across phases.
//!
//! ## Example
//!
//! ```
//! use initiative_tracker::core::Living;
//! use initiative_tracker::encounter::Encounter;
//!
//! let mut fight = Encounter::new(["Fighter", "Goblin"]);
//! fight.act(0);
//! fight.kill(Living::Waiting, 0);
//! assert!(fight.current().is_round_complete());
//!
//! fight.next_round();
//! assert_eq!(fight.current().waiting()[0], "Fighter");
//! ```

mod state;

pub use state::Encounter;
