//! League groups, teams, and rosters.

use serde::{Deserialize, Serialize};

use super::next_id;

/// A league group holding an ordered list of teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Unique identifier (creation timestamp in milliseconds)
    pub id: i64,

    pub name: String,

    /// Teams in standings order. Teams are addressed by position, not by
    /// a stable id.
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Group {
    pub fn new(name: String) -> Self {
        Self {
            id: next_id(),
            name,
            teams: Vec::new(),
        }
    }
}

/// A team inside a group, with standings fields and a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,

    /// Logo URL
    #[serde(default)]
    pub logo: String,

    /// Matches played
    #[serde(default)]
    pub mp: u32,

    #[serde(default)]
    pub wins: u32,

    #[serde(default)]
    pub loses: u32,

    /// Standings points
    #[serde(default)]
    pub pts: u32,

    /// Roster entries in join order, addressed by position
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

impl Team {
    pub fn new(name: String, logo: String) -> Self {
        Self {
            name,
            logo,
            mp: 0,
            wins: 0,
            loses: 0,
            pts: 0,
            roster: Vec::new(),
        }
    }
}

/// A roster slot referencing a player by name string.
///
/// The reference is not synchronized if the player is later renamed or
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub name: String,

    #[serde(default)]
    pub is_manager: bool,
}

/// Standings fields submitted by the admin team form.
///
/// When no valid team index accompanies the form, a non-empty
/// `team_name` appends a new team instead.
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub team_name: String,
    pub logo: String,
    pub mp: u32,
    pub wins: u32,
    pub loses: u32,
    pub pts: u32,
}
