//! Linear undo/redo history over immutable snapshots.
//!
//! [`History`] is generic over the snapshot type. It never inspects or
//! edits a snapshot; it only moves whole values between two stacks.
//!
//! ## Example
//!
//! ```
//! use initiative_tracker::history::History;
//!
//! let mut history = History::new(1);
//! history.push(2);
//! history.push(3);
//!
//! history.undo();
//! assert_eq!(*history.current(), 2);
//! assert!(history.can_redo());
//!
//! // Pushing after an undo discards the abandoned future
//! history.push(4);
//! assert!(!history.can_redo());
//! assert_eq!(*history.current(), 4);
//! ```

mod stack;

pub use stack::History;
