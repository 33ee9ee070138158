//! Immutable encounter snapshots.
//!
//! A `Snapshot` is one point in an encounter's history. Every list is an
//! `im::Vector`, so cloning a snapshot is O(1) and a transition that
//! replaces one list shares the untouched ones with its predecessor.
//!
//! Transitions here are pure: they take `&self` and return a new snapshot.
//! Nothing in this module edits a snapshot that has already been built.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::bucket::{Bucket, Living};

/// One immutable state of an encounter.
///
/// ## Lists
///
/// - `waiting`: initiative order for the rest of this round
/// - `acted`: order in which combatants took their turns this round
/// - `dead`: removed from play, only ever grows
/// - `added`: side ledger of names introduced mid-fight, merged back into
///   the roster when the fight ends
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "waitingPlayers")]
    waiting: Vector<String>,

    #[serde(rename = "actedPlayers")]
    acted: Vector<String>,

    #[serde(rename = "deadPlayers")]
    dead: Vector<String>,

    #[serde(rename = "addedPlayers")]
    added: Vector<String>,

    /// Round number (starts at 1).
    round: u32,
}

impl Snapshot {
    /// Create the opening snapshot of a fight: everyone waits, in roster order.
    #[must_use]
    pub fn new<I, N>(roster: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self {
            waiting: roster.into_iter().map(Into::into).collect(),
            acted: Vector::new(),
            dead: Vector::new(),
            added: Vector::new(),
            round: 1,
        }
    }

    /// Combatants still to act this round.
    #[must_use]
    pub fn waiting(&self) -> &Vector<String> {
        &self.waiting
    }

    /// Combatants that have acted this round.
    #[must_use]
    pub fn acted(&self) -> &Vector<String> {
        &self.acted
    }

    /// Combatants removed from play.
    #[must_use]
    pub fn dead(&self) -> &Vector<String> {
        &self.dead
    }

    /// Names added since the fight started.
    #[must_use]
    pub fn added(&self) -> &Vector<String> {
        &self.added
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Read one bucket by tag.
    #[must_use]
    pub fn bucket(&self, bucket: Bucket) -> &Vector<String> {
        match bucket {
            Bucket::Waiting => &self.waiting,
            Bucket::Acted => &self.acted,
            Bucket::Dead => &self.dead,
        }
    }

    /// True when nobody is left waiting and the next round may begin.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Number of combatants still in play.
    #[must_use]
    pub fn living_count(&self) -> usize {
        self.waiting.len() + self.acted.len()
    }

    // === Transitions ===

    /// Move the waiting combatant at `idx` to the end of the acted list.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid index into `waiting`.
    #[must_use]
    pub fn acted_at(&self, idx: usize) -> Self {
        assert!(
            idx < self.waiting.len(),
            "act index {} out of range ({} waiting)",
            idx,
            self.waiting.len()
        );

        let mut waiting = self.waiting.clone();
        let name = waiting.remove(idx);
        let mut acted = self.acted.clone();
        acted.push_back(name);

        Self {
            waiting,
            acted,
            ..self.clone()
        }
    }

    /// Move the combatant at `idx` of a living bucket to the end of `dead`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not a valid index into that bucket.
    #[must_use]
    pub fn killed_at(&self, from: Living, idx: usize) -> Self {
        let source = self.bucket(from.into());
        assert!(
            idx < source.len(),
            "kill index {} out of range ({} {})",
            idx,
            source.len(),
            from
        );

        let mut source = source.clone();
        let name = source.remove(idx);
        let mut dead = self.dead.clone();
        dead.push_back(name);

        match from {
            Living::Waiting => Self {
                waiting: source,
                dead,
                ..self.clone()
            },
            Living::Acted => Self {
                acted: source,
                dead,
                ..self.clone()
            },
        }
    }

    /// Append a new combatant to the waiting list and the added ledger.
    ///
    /// Returns `None` for an empty name.
    #[must_use]
    pub fn with_combatant(&self, name: &str) -> Option<Self> {
        if name.is_empty() {
            return None;
        }

        let mut waiting = self.waiting.clone();
        waiting.push_back(name.to_string());
        let mut added = self.added.clone();
        added.push_back(name.to_string());

        Some(Self {
            waiting,
            added,
            ..self.clone()
        })
    }

    /// Start the next round: this round's acting order becomes the new
    /// initiative order.
    ///
    /// # Panics
    ///
    /// Panics if any combatant is still waiting.
    #[must_use]
    pub fn next_round(&self) -> Self {
        assert!(
            self.is_round_complete(),
            "next round requested with {} combatant(s) still waiting",
            self.waiting.len()
        );

        Self {
            waiting: self.acted.clone(),
            acted: Vector::new(),
            round: self.round.saturating_add(1),
            ..self.clone()
        }
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Round {}", self.round)?;
        for bucket in Bucket::ALL {
            write!(f, "  {:<8}", bucket.name())?;
            for (i, name) in self.bucket(bucket).iter().enumerate() {
                write!(f, " [{}] {}", i, name)?;
            }
            writeln!(f)?;
        }
        if !self.added.is_empty() {
            let added: Vec<&str> = self.added.iter().map(String::as_str).collect();
            writeln!(f, "  added:   {}", added.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &Vector<String>) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_snapshot_new() {
        let snap = Snapshot::new(["A", "B", "C"]);

        assert_eq!(names(snap.waiting()), vec!["A", "B", "C"]);
        assert!(snap.acted().is_empty());
        assert!(snap.dead().is_empty());
        assert!(snap.added().is_empty());
        assert_eq!(snap.round(), 1);
        assert!(!snap.is_round_complete());
    }

    #[test]
    fn test_acted_at_preserves_order() {
        let snap = Snapshot::new(["A", "B", "C"]);
        let next = snap.acted_at(1);

        assert_eq!(names(next.waiting()), vec!["A", "C"]);
        assert_eq!(names(next.acted()), vec!["B"]);

        // Source snapshot untouched
        assert_eq!(names(snap.waiting()), vec!["A", "B", "C"]);
        assert!(snap.acted().is_empty());
    }

    #[test]
    #[should_panic(expected = "act index 3 out of range")]
    fn test_acted_at_out_of_range() {
        let _ = Snapshot::new(["A", "B"]).acted_at(3);
    }

    #[test]
    fn test_killed_from_each_bucket() {
        let snap = Snapshot::new(["A", "B", "C"]).acted_at(0);

        let from_waiting = snap.killed_at(Living::Waiting, 1);
        assert_eq!(names(from_waiting.waiting()), vec!["B"]);
        assert_eq!(names(from_waiting.dead()), vec!["C"]);

        let from_acted = from_waiting.killed_at(Living::Acted, 0);
        assert!(from_acted.acted().is_empty());
        assert_eq!(names(from_acted.dead()), vec!["C", "A"]);
        assert_eq!(from_acted.living_count(), 1);
    }

    #[test]
    #[should_panic(expected = "kill index 0 out of range")]
    fn test_killed_at_empty_bucket() {
        let _ = Snapshot::new(["A"]).killed_at(Living::Acted, 0);
    }

    #[test]
    fn test_with_combatant() {
        let snap = Snapshot::new(["A"]);

        let next = snap.with_combatant("Goblin").unwrap();
        assert_eq!(names(next.waiting()), vec!["A", "Goblin"]);
        assert_eq!(names(next.added()), vec!["Goblin"]);

        assert!(snap.with_combatant("").is_none());
    }

    #[test]
    fn test_next_round() {
        let snap = Snapshot::new(["A", "B"])
            .acted_at(1)
            .acted_at(0)
            .with_combatant("Orc")
            .unwrap()
            .killed_at(Living::Waiting, 0);

        let next = snap.next_round();
        assert_eq!(names(next.waiting()), vec!["B", "A"]);
        assert!(next.acted().is_empty());
        assert_eq!(names(next.dead()), vec!["Orc"]);
        assert_eq!(names(next.added()), vec!["Orc"]);
        assert_eq!(next.round(), 2);
    }

    #[test]
    fn test_next_round_saturates() {
        let snap: Snapshot = serde_json::from_value(serde_json::json!({
            "waitingPlayers": [],
            "actedPlayers": ["A"],
            "deadPlayers": [],
            "addedPlayers": [],
            "round": u32::MAX,
        }))
        .unwrap();

        let next = snap.next_round();
        assert_eq!(next.round(), u32::MAX);
        assert_eq!(names(next.waiting()), vec!["A"]);
    }

    #[test]
    #[should_panic(expected = "still waiting")]
    fn test_next_round_mid_round() {
        let _ = Snapshot::new(["A"]).next_round();
    }

    #[test]
    fn test_bucket_lookup() {
        let snap = Snapshot::new(["A", "B"]).acted_at(0);
        assert_eq!(names(snap.bucket(Bucket::Waiting)), vec!["B"]);
        assert_eq!(names(snap.bucket(Bucket::Acted)), vec!["A"]);
        assert!(snap.bucket(Bucket::Dead).is_empty());
    }

    #[test]
    fn test_serialization_field_names() {
        let snap = Snapshot::new(["A"]).with_combatant("B").unwrap();
        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["waitingPlayers"], serde_json::json!(["A", "B"]));
        assert_eq!(json["actedPlayers"], serde_json::json!([]));
        assert_eq!(json["deadPlayers"], serde_json::json!([]));
        assert_eq!(json["addedPlayers"], serde_json::json!(["B"]));
        assert_eq!(json["round"], 1);

        let back: Snapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn test_display() {
        let snap = Snapshot::new(["A", "B"]).acted_at(0);
        let text = format!("{}", snap);
        assert!(text.starts_with("Round 1"));
        assert!(text.contains("waiting  [0] B"));
        assert!(text.contains("acted    [0] A"));
    }
}
