//! Combatant buckets.
//!
//! ## Bucket
//!
//! The three disjoint lists a combatant can sit in during an encounter.
//!
//! ## Living
//!
//! The subset of buckets a combatant can be killed from. Dead combatants
//! cannot be targeted by `kill`, so there is no variant for them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TrackerError;

/// One of the three combatant lists of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Not yet acted this round.
    Waiting,
    /// Already acted this round.
    Acted,
    /// Removed from play for the rest of the encounter.
    Dead,
}

impl Bucket {
    /// All buckets in display order.
    pub const ALL: [Bucket; 3] = [Bucket::Waiting, Bucket::Acted, Bucket::Dead];

    /// Lowercase name used in commands and error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Bucket::Waiting => "waiting",
            Bucket::Acted => "acted",
            Bucket::Dead => "dead",
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Bucket {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "waiting" | "w" => Ok(Bucket::Waiting),
            "acted" | "a" => Ok(Bucket::Acted),
            "dead" | "d" => Ok(Bucket::Dead),
            _ => Err(TrackerError::InvalidBucket(s.to_string())),
        }
    }
}

/// A bucket holding combatants that are still in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Living {
    Waiting,
    Acted,
}

impl From<Living> for Bucket {
    fn from(living: Living) -> Self {
        match living {
            Living::Waiting => Bucket::Waiting,
            Living::Acted => Bucket::Acted,
        }
    }
}

impl std::fmt::Display for Living {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&Bucket::from(*self), f)
    }
}

impl FromStr for Living {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Bucket>()? {
            Bucket::Waiting => Ok(Living::Waiting),
            Bucket::Acted => Ok(Living::Acted),
            Bucket::Dead => Err(TrackerError::InvalidBucket(s.to_string())),
        }
    }
}
