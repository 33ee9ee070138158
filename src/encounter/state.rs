//! Encounter state machine.

use im::Vector;
use tracing::{debug, info};

use crate::core::{Living, Snapshot};
use crate::history::History;

/// A fight in progress, backed by an undo/redo history of snapshots.
#[derive(Clone, Debug)]
pub struct Encounter {
    history: History<Snapshot>,
}

impl Encounter {
    /// Start a fight with `roster` as the initial initiative order.
    #[must_use]
    pub fn new<I, N>(roster: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        Self::from_snapshot(Snapshot::new(roster))
    }

    /// Start a fight from an arbitrary opening snapshot.
    ///
    /// The snapshot is taken as-is: a name may appear in more than one list
    /// if the caller built it that way. Transitions still only move single
    /// entries, so they never introduce new overlaps.
    #[must_use]
    pub fn from_snapshot(initial: Snapshot) -> Self {
        info!(combatants = initial.waiting().len(), "encounter started");
        Self {
            history: History::new(initial),
        }
    }

    /// The snapshot to render.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        self.history.current()
    }

    #[must_use]
    pub fn history(&self) -> &History<Snapshot> {
        &self.history
    }

    // === Transitions ===

    /// The waiting combatant at `idx` takes their turn.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range for the waiting list.
    pub fn act(&mut self, idx: usize) {
        let next = self.current().acted_at(idx);
        self.commit("act", next);
    }

    /// The combatant at `idx` of `from` dies.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range for that list.
    pub fn kill(&mut self, from: Living, idx: usize) {
        let next = self.current().killed_at(from, idx);
        self.commit("kill", next);
    }

    /// Add a new combatant at the end of the waiting list.
    ///
    /// Returns false without touching history when `name` is empty.
    pub fn add_combatant(&mut self, name: &str) -> bool {
        match self.current().with_combatant(name) {
            Some(next) => {
                self.commit("add", next);
                true
            }
            None => false,
        }
    }

    /// Begin the next round in the order combatants acted.
    ///
    /// # Panics
    ///
    /// Panics if anyone is still waiting.
    pub fn next_round(&mut self) {
        let next = self.current().next_round();
        info!(round = next.round(), "next round");
        self.commit("next_round", next);
    }

    fn commit(&mut self, transition: &'static str, next: Snapshot) {
        debug!(
            transition,
            waiting = next.waiting().len(),
            acted = next.acted().len(),
            dead = next.dead().len(),
            "snapshot pushed"
        );
        self.history.push(next);
    }

    // === History ===

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// # Panics
    ///
    /// Panics if there is nothing to undo.
    pub fn undo(&mut self) {
        self.history.undo();
        debug!(depth = self.history.undo_depth(), "undo");
    }

    /// # Panics
    ///
    /// Panics if there is nothing to redo.
    pub fn redo(&mut self) {
        self.history.redo();
        debug!(depth = self.history.undo_depth(), "redo");
    }

    /// Finish the fight, handing back the names added while it ran.
    #[must_use]
    pub fn end(self) -> Vector<String> {
        let added = self.current().added().clone();
        info!(
            round = self.current().round(),
            added = added.len(),
            "encounter ended"
        );
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &Vector<String>) -> Vec<&str> {
        list.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_encounter_new() {
        let fight = Encounter::new(["A", "B"]);

        assert_eq!(names(fight.current().waiting()), vec!["A", "B"]);
        assert!(!fight.can_undo());
        assert!(!fight.can_redo());
    }

    #[test]
    fn test_act_pushes_history() {
        let mut fight = Encounter::new(["A", "B"]);
        fight.act(1);

        assert_eq!(names(fight.current().waiting()), vec!["A"]);
        assert_eq!(names(fight.current().acted()), vec!["B"]);
        assert!(fight.can_undo());
        assert_eq!(fight.history().undo_depth(), 1);
        assert_eq!(names(fight.history().initial().waiting()), vec!["A", "B"]);
    }

    #[test]
    fn test_add_empty_name_is_noop() {
        let mut fight = Encounter::new(["A"]);

        assert!(!fight.add_combatant(""));
        assert!(!fight.can_undo());

        assert!(fight.add_combatant("Goblin"));
        assert_eq!(names(fight.current().waiting()), vec!["A", "Goblin"]);
        assert_eq!(names(fight.current().added()), vec!["Goblin"]);
    }

    #[test]
    fn test_undo_redo_passthrough() {
        let mut fight = Encounter::new(["A"]);
        fight.act(0);
        fight.undo();

        assert_eq!(names(fight.current().waiting()), vec!["A"]);
        assert!(fight.can_redo());

        fight.redo();
        assert_eq!(names(fight.current().acted()), vec!["A"]);
    }

    #[test]
    fn test_next_round_increments() {
        let mut fight = Encounter::new(["A"]);
        fight.act(0);
        fight.next_round();

        assert_eq!(fight.current().round(), 2);
        assert_eq!(names(fight.current().waiting()), vec!["A"]);
    }

    #[test]
    #[should_panic(expected = "still waiting")]
    fn test_next_round_mid_round_panics() {
        let mut fight = Encounter::new(["A"]);
        fight.next_round();
    }

    #[test]
    fn test_from_snapshot_at_max_round() {
        let snap: Snapshot = serde_json::from_value(serde_json::json!({
            "waitingPlayers": ["A"],
            "actedPlayers": [],
            "deadPlayers": [],
            "addedPlayers": [],
            "round": u32::MAX,
        }))
        .unwrap();

        let mut fight = Encounter::from_snapshot(snap);
        fight.act(0);
        fight.next_round();

        assert_eq!(fight.current().round(), u32::MAX);
        assert_eq!(names(fight.current().waiting()), vec!["A"]);
    }

    #[test]
    fn test_end_returns_added() {
        let mut fight = Encounter::new(["A"]);
        fight.add_combatant("Goblin");
        fight.kill(Living::Waiting, 1);

        let added = fight.end();
        assert_eq!(names(&added), vec!["Goblin"]);
    }
}
