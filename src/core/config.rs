//! Tracker configuration.
//!
//! A config file seeds the roster and the default log filter:
//!
//! ```toml
//! roster = ["Fighter", "Wizard", "Rogue"]
//! log_filter = "initiative_tracker=debug"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;

/// Startup configuration for a [`Tracker`](crate::app::Tracker).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Combatants on the roster before the first fight.
    #[serde(default)]
    pub roster: Vec<String>,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl TrackerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Load a config from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// Append combatants to the configured roster.
    pub fn with_roster<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.roster.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the default log filter.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrackerError;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert!(config.roster.is_empty());
        assert_eq!(config.log_filter, None);
    }

    #[test]
    fn test_from_toml() {
        let config = TrackerConfig::from_toml_str(
            r#"
            roster = ["Fighter", "Wizard"]
            log_filter = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.roster, vec!["Fighter", "Wizard"]);
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_from_toml_empty() {
        let config = TrackerConfig::from_toml_str("").unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = TrackerConfig::from_toml_str("roster = 5").unwrap_err();
        assert!(matches!(err, TrackerError::ConfigParse(_)));
    }

    #[test]
    fn test_from_missing_path() {
        let err = TrackerConfig::from_path(Path::new("/nonexistent/tracker.toml")).unwrap_err();
        assert!(matches!(err, TrackerError::ConfigIo(_)));
    }

    #[test]
    fn test_builder_pattern() {
        let config = TrackerConfig::default()
            .with_roster(["A", "B"])
            .with_roster(vec![String::from("C")])
            .with_log_filter("info");

        assert_eq!(config.roster, vec!["A", "B", "C"]);
        assert_eq!(config.log_filter.as_deref(), Some("info"));
    }
}
