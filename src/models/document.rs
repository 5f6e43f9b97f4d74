//! The league document and the mutation operations applied to it.
//!
//! The whole league is one JSON-shaped value, loaded and saved
//! wholesale. Every named mutation the HTTP surface exposes is a method
//! here, so the semantics can be exercised without any IO.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::{
    Group, Leaderboards, Match, Player, ProfileUpdate, Record, RosterEntry, StatCategory,
    StatSheet, Team, TeamUpdate,
};

/// A mutation rejected with a user-visible reason.
///
/// Rejections redirect back to the submitting page with this text in the
/// `error` query parameter. Operations that instead no-op silently
/// return a `bool`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    #[error("Player name already taken: {0}")]
    NameTaken(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Group not found: {0}")]
    GroupNotFound(i64),

    #[error("Team not found in group {0}")]
    TeamNotFound(i64),
}

/// The root document holding all persisted league state.
///
/// The container-level `serde(default)` is the schema merge: a document
/// written before a top-level key existed deserializes with that key
/// backfilled from the default shape, and loaded values win otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeagueDoc {
    pub players: Vec<Player>,
    pub matches: Vec<Match>,
    pub live_link: String,
    pub groups: Vec<Group>,
    pub leaderboards: Leaderboards,
    pub records: Vec<Record>,
}

impl LeagueDoc {
    pub fn find_player(&self, id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players visible on the public market.
    pub fn market_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|p| p.verified)
    }

    // ── Player lifecycle ─────────────────────────────────────────────

    /// Append a freshly registered player. Names are unique
    /// case-insensitively at registration time only; later renames are
    /// not re-checked.
    pub fn register_player(&mut self, player: Player) -> Result<i64, MutationError> {
        if self
            .players
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&player.name))
        {
            return Err(MutationError::NameTaken(player.name));
        }
        let id = player.id;
        self.players.push(player);
        Ok(id)
    }

    /// Flip `verified` on the matching player. Unknown ids no-op.
    pub fn approve_player(&mut self, id: i64) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.verified = true;
                true
            }
            None => false,
        }
    }

    /// Overwrite the self-service profile fields. Unknown ids no-op.
    pub fn update_profile(&mut self, id: i64, update: ProfileUpdate) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.name = update.name;
                player.discord = update.discord;
                player.bio = update.bio;
                player.card_image = update.card_image;
                true
            }
            None => false,
        }
    }

    /// Remove the matching player. Unknown ids no-op.
    pub fn delete_player(&mut self, id: i64) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != id);
        self.players.len() != before
    }

    /// Overwrite the admin-curated stat sheet of the player with this
    /// exact name.
    pub fn update_player_stats(&mut self, name: &str, sheet: StatSheet) -> Result<(), MutationError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| MutationError::PlayerNotFound(name.to_string()))?;
        player.goals = sheet.goals;
        player.assists = sheet.assists;
        player.saves = sheet.saves;
        player.mvps = sheet.mvps;
        player.bio = sheet.bio;
        Ok(())
    }

    // ── Matches and records ──────────────────────────────────────────

    pub fn add_match(&mut self, m: Match) -> i64 {
        let id = m.id;
        self.matches.push(m);
        id
    }

    pub fn add_record(&mut self, record: Record) -> i64 {
        let id = record.id;
        self.records.push(record);
        id
    }

    /// Remove the matching record. Unknown ids no-op.
    pub fn delete_record(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    // ── Groups, teams, rosters ───────────────────────────────────────

    pub fn add_group(&mut self, name: String) -> i64 {
        let group = Group::new(name);
        let id = group.id;
        self.groups.push(group);
        id
    }

    /// Remove the matching group and everything nested in it. Unknown
    /// ids no-op.
    pub fn delete_group(&mut self, id: i64) -> bool {
        let before = self.groups.len();
        self.groups.retain(|g| g.id != id);
        self.groups.len() != before
    }

    pub fn find_group(&self, id: i64) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// With a valid team index: overwrite the standings fields in
    /// place, leaving name, logo, and roster untouched. Without one: a
    /// non-empty `team_name` appends a new team carrying the submitted
    /// standings. Anything else no-ops.
    pub fn update_team(&mut self, group_id: i64, team_index: Option<usize>, update: TeamUpdate) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == group_id) else {
            return false;
        };
        match team_index {
            Some(i) if i < group.teams.len() => {
                let team = &mut group.teams[i];
                team.mp = update.mp;
                team.wins = update.wins;
                team.loses = update.loses;
                team.pts = update.pts;
                true
            }
            _ => {
                if update.team_name.trim().is_empty() {
                    return false;
                }
                let mut team = Team::new(update.team_name, update.logo);
                team.mp = update.mp;
                team.wins = update.wins;
                team.loses = update.loses;
                team.pts = update.pts;
                group.teams.push(team);
                true
            }
        }
    }

    /// Append a roster entry referencing a registered player. The
    /// player lookup is case-insensitive; the stored name is the
    /// registered spelling.
    pub fn add_to_roster(
        &mut self,
        group_id: i64,
        team_index: Option<usize>,
        player_name: &str,
        is_manager: bool,
    ) -> Result<(), MutationError> {
        let name = self
            .players
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(player_name))
            .map(|p| p.name.clone())
            .ok_or_else(|| MutationError::PlayerNotFound(player_name.to_string()))?;
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or(MutationError::GroupNotFound(group_id))?;
        let team = team_index
            .and_then(|i| group.teams.get_mut(i))
            .ok_or(MutationError::TeamNotFound(group_id))?;
        team.roster.push(RosterEntry { name, is_manager });
        Ok(())
    }

    /// Remove the roster entry at `player_index`. Missing group, team,
    /// or position no-ops.
    pub fn delete_from_roster(&mut self, group_id: i64, team_index: usize, player_index: usize) -> bool {
        let Some(group) = self.groups.iter_mut().find(|g| g.id == group_id) else {
            return false;
        };
        let Some(team) = group.teams.get_mut(team_index) else {
            return false;
        };
        if player_index < team.roster.len() {
            team.roster.remove(player_index);
            true
        } else {
            false
        }
    }

    // ── Leaderboards and live link ───────────────────────────────────

    /// Overwrite or append a leaderboard entry, keeping the category
    /// sorted descending by value.
    pub fn update_stat(&mut self, category: StatCategory, index: Option<usize>, name: String, value: u32) {
        self.leaderboards.upsert(category, index, name, value);
    }

    /// Remove the leaderboard entry at `index`.
    pub fn delete_stat(&mut self, category: StatCategory, index: usize) -> bool {
        self.leaderboards.remove(category, index)
    }

    /// Store the live-stream link, rewriting YouTube watch URLs into
    /// their embeddable form at write time.
    pub fn set_live_link(&mut self, link: &str) {
        self.live_link = embed_live_link(link);
    }
}

/// Rewrite `https://www.youtube.com/watch?v=X` into
/// `https://www.youtube.com/embed/X`. Anything else is stored verbatim.
fn embed_live_link(link: &str) -> String {
    let Ok(parsed) = Url::parse(link) else {
        return link.to_string();
    };
    let youtube = parsed
        .host_str()
        .is_some_and(|h| h == "www.youtube.com" || h == "youtube.com" || h == "m.youtube.com");
    if youtube && parsed.path() == "/watch" {
        if let Some(video) = parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
        {
            return format!("https://www.youtube.com/embed/{}", video);
        }
    }
    link.to_string()
}
