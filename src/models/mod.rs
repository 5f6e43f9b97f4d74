//! Core data models for the league hub.

mod document;
mod group;
mod ids;
mod leaderboard;
mod matches;
mod player;
mod record;

pub use document::*;
pub use group::*;
pub use ids::*;
pub use leaderboard::*;
pub use matches::*;
pub use player::*;
pub use record::*;
