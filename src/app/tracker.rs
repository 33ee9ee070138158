//! Top-level application context.

use im::Vector;
use tracing::{info, warn};

use super::command::Command;
use crate::core::{Bucket, Living, Result, Roster, Snapshot, TrackerConfig, TrackerError};
use crate::encounter::Encounter;

/// Owns the roster and, while a fight runs, its encounter.
///
/// Every operation checks the guards the core relies on and reports a
/// [`TrackerError`] instead of reaching a core panic. A rejected call
/// leaves the tracker exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    roster: Roster,
    encounter: Option<Encounter>,
}

impl Tracker {
    /// Create a tracker with an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker seeded from configuration.
    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self {
            roster: config.roster.iter().map(|name| name.trim()).collect(),
            encounter: None,
        }
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn encounter(&self) -> Option<&Encounter> {
        self.encounter.as_ref()
    }

    /// The current snapshot of the running fight, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.encounter.as_ref().map(Encounter::current)
    }

    fn fight(&self) -> Result<&Encounter> {
        self.encounter.as_ref().ok_or(TrackerError::NoEncounter)
    }

    fn fight_mut(&mut self) -> Result<&mut Encounter> {
        self.encounter.as_mut().ok_or(TrackerError::NoEncounter)
    }

    fn check_index(snapshot: &Snapshot, bucket: Bucket, index: usize) -> Result<()> {
        let len = snapshot.bucket(bucket).len();
        if index < len {
            Ok(())
        } else {
            Err(TrackerError::IndexOutOfRange {
                list: bucket.name(),
                index,
                len,
            })
        }
    }

    // === Roster ===

    /// Text box entry point: trims `value` and adds it to the running fight,
    /// or to the roster between fights.
    pub fn submit_text(&mut self, value: &str) -> Result<()> {
        let name = value.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }

        match self.encounter.as_mut() {
            Some(fight) => {
                fight.add_combatant(name);
            }
            None => {
                self.roster.add(name);
            }
        }
        Ok(())
    }

    /// Remove a roster entry between fights.
    pub fn remove_from_roster(&mut self, idx: usize) -> Result<String> {
        if self.encounter.is_some() {
            return Err(TrackerError::EncounterInProgress);
        }
        let len = self.roster.len();
        self.roster.remove(idx).ok_or(TrackerError::IndexOutOfRange {
            list: "roster",
            index: idx,
            len,
        })
    }

    // === Fight lifecycle ===

    /// Start a fight with the roster as initiative order.
    pub fn start_fight(&mut self) -> Result<()> {
        if self.encounter.is_some() {
            return Err(TrackerError::EncounterInProgress);
        }
        if self.roster.is_empty() {
            return Err(TrackerError::EmptyRoster);
        }
        self.encounter = Some(Encounter::new(self.roster.names().iter().cloned()));
        Ok(())
    }

    /// End the fight, merging mid-fight additions into the roster.
    ///
    /// Returns the merged names.
    pub fn end_fight(&mut self) -> Result<Vector<String>> {
        let fight = self.encounter.take().ok_or(TrackerError::NoEncounter)?;
        let added = fight.end();
        self.roster.merge(added.iter().cloned());
        info!(roster = self.roster.len(), "roster updated");
        Ok(added)
    }

    // === Transitions ===

    pub fn act(&mut self, idx: usize) -> Result<()> {
        Self::check_index(self.fight()?.current(), Bucket::Waiting, idx)?;
        self.fight_mut()?.act(idx);
        Ok(())
    }

    pub fn kill(&mut self, from: Living, idx: usize) -> Result<()> {
        Self::check_index(self.fight()?.current(), from.into(), idx)?;
        self.fight_mut()?.kill(from, idx);
        Ok(())
    }

    pub fn next_round(&mut self) -> Result<()> {
        let waiting = self.fight()?.current().waiting().len();
        if waiting > 0 {
            return Err(TrackerError::RoundInProgress(waiting));
        }
        self.fight_mut()?.next_round();
        Ok(())
    }

    pub fn undo(&mut self) -> Result<()> {
        let fight = self.fight_mut()?;
        if !fight.can_undo() {
            return Err(TrackerError::NothingToUndo);
        }
        fight.undo();
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        let fight = self.fight_mut()?;
        if !fight.can_redo() {
            return Err(TrackerError::NothingToRedo);
        }
        fight.redo();
        Ok(())
    }

    /// Check and run one command.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        let result = match &command {
            Command::Add(name) => self.submit_text(name),
            Command::Remove(idx) => self.remove_from_roster(*idx).map(drop),
            Command::Start => self.start_fight(),
            Command::Act(idx) => self.act(*idx),
            Command::Kill(from, idx) => self.kill(*from, *idx),
            Command::NextRound => self.next_round(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::End => self.end_fight().map(drop),
            Command::Show => Ok(()),
        };

        if let Err(err) = &result {
            warn!(?command, %err, "command rejected");
        }
        result
    }
}
