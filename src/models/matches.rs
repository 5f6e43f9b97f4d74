//! Match listing model.

use serde::{Deserialize, Serialize};

use super::next_id;

/// A scheduled or played match.
///
/// Matches are created by admins and never updated; the field set is a
/// fixed allowlist rather than arbitrary submitted keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Unique identifier (creation timestamp in milliseconds)
    pub id: i64,

    /// Home side
    pub home: String,

    /// Away side
    pub away: String,

    /// Kickoff date/time as announced
    #[serde(default)]
    pub kickoff: String,

    /// Competition or stage label
    #[serde(default)]
    pub competition: String,
}

impl Match {
    pub fn new(home: String, away: String) -> Self {
        Self {
            id: next_id(),
            home,
            away,
            kickoff: String::new(),
            competition: String::new(),
        }
    }

    /// Builder method to set the kickoff label.
    pub fn with_kickoff(mut self, kickoff: String) -> Self {
        self.kickoff = kickoff;
        self
    }

    /// Builder method to set the competition label.
    pub fn with_competition(mut self, competition: String) -> Self {
        self.competition = competition;
        self
    }
}
