//! Two-stack history implementation.

use serde::{Deserialize, Serialize};

/// Undo/redo history of snapshots.
///
/// The undo stack always holds at least the initial snapshot, which can
/// never be undone. The redo stack is cleared by every [`push`](Self::push).
///
/// Deserializing rejects an empty undo stack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Stacks<S>", bound(deserialize = "S: Deserialize<'de>"))]
pub struct History<S> {
    /// Bottom is the initial snapshot, top is current.
    undo: Vec<S>,

    /// Top is the next snapshot `redo` restores.
    redo: Vec<S>,
}

/// Unchecked wire form of a [`History`].
#[derive(Deserialize)]
#[serde(bound(deserialize = "S: Deserialize<'de>"))]
struct Stacks<S> {
    undo: Vec<S>,
    #[serde(default)]
    redo: Vec<S>,
}

impl<S> TryFrom<Stacks<S>> for History<S> {
    type Error = &'static str;

    fn try_from(stacks: Stacks<S>) -> Result<Self, Self::Error> {
        if stacks.undo.is_empty() {
            return Err("history undo stack must hold the initial snapshot");
        }
        Ok(Self {
            undo: stacks.undo,
            redo: stacks.redo,
        })
    }
}

impl<S> History<S> {
    /// Create a history whose only entry is `initial`.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            undo: vec![initial],
            redo: Vec::new(),
        }
    }

    /// The current snapshot (top of the undo stack).
    #[must_use]
    pub fn current(&self) -> &S {
        // `new` seeds one entry and `undo` never pops the last one
        &self.undo[self.undo.len() - 1]
    }

    /// Make `next` the current snapshot and discard any redo entries.
    pub fn push(&mut self, next: S) {
        self.undo.push(next);
        self.redo.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Step back to the previous snapshot.
    ///
    /// # Panics
    ///
    /// Panics if only the initial snapshot remains. Callers gate on
    /// [`can_undo`](Self::can_undo).
    pub fn undo(&mut self) {
        assert!(self.can_undo(), "undo called with nothing to undo");
        if let Some(top) = self.undo.pop() {
            self.redo.push(top);
        }
    }

    /// Step forward to the most recently undone snapshot.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been undone since the last push. Callers gate
    /// on [`can_redo`](Self::can_redo).
    pub fn redo(&mut self) {
        let top = self.redo.pop().expect("redo called with nothing to redo");
        self.undo.push(top);
    }

    /// Number of snapshots that can be undone.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len() - 1
    }

    /// Number of snapshots that can be redone.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// The snapshot the history was created with.
    #[must_use]
    pub fn initial(&self) -> &S {
        &self.undo[0]
    }
}
