//! Pre-encounter combatant roster.
//!
//! The roster outlives every encounter: a fight starts from it and hands
//! back the names that joined mid-fight when it ends.

use serde::{Deserialize, Serialize};

/// Ordered list of combatant names kept between fights.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a combatant to the end of the roster.
    ///
    /// Returns false (and leaves the roster alone) for an empty name.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        self.names.push(name);
        true
    }

    /// Remove the combatant at `idx`, if there is one.
    pub fn remove(&mut self, idx: usize) -> Option<String> {
        (idx < self.names.len()).then(|| self.names.remove(idx))
    }

    /// Append names that joined during a fight, keeping their order.
    pub fn merge<I, N>(&mut self, added: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.names.extend(added.into_iter().map(Into::into));
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<String>> FromIterator<N> for Roster {
    /// Collect names into a roster, skipping empty ones.
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for name in iter {
            roster.add(name);
        }
        roster
    }
}
