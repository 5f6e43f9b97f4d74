//! Registered player model.

use serde::{Deserialize, Serialize};

use super::next_id;

/// Card image used until a player uploads their own.
pub const DEFAULT_CARD_IMAGE: &str = "/img/card-default.png";

/// A registered league player.
///
/// Players enter the public market only once an admin flips `verified`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique identifier (creation timestamp in milliseconds)
    pub id: i64,

    /// Display name, unique case-insensitively at registration time
    pub name: String,

    /// Discord handle for contact
    #[serde(default)]
    pub discord: String,

    /// Free-form self-description
    #[serde(default)]
    pub bio: String,

    /// Player card image URL
    #[serde(default = "default_card_image")]
    pub card_image: String,

    /// Whether an admin has approved this player for the market
    #[serde(default)]
    pub verified: bool,

    #[serde(default)]
    pub goals: u32,

    #[serde(default)]
    pub assists: u32,

    #[serde(default)]
    pub saves: u32,

    #[serde(default)]
    pub mvps: u32,
}

fn default_card_image() -> String {
    DEFAULT_CARD_IMAGE.to_string()
}

impl Player {
    /// Create an unverified player with zeroed stats.
    pub fn new(name: String) -> Self {
        Self {
            id: next_id(),
            name,
            discord: String::new(),
            bio: String::new(),
            card_image: default_card_image(),
            verified: false,
            goals: 0,
            assists: 0,
            saves: 0,
            mvps: 0,
        }
    }

    /// Builder method to set the Discord handle.
    pub fn with_discord(mut self, discord: String) -> Self {
        self.discord = discord;
        self
    }

    /// Builder method to set the bio.
    pub fn with_bio(mut self, bio: String) -> Self {
        self.bio = bio;
        self
    }

    /// Builder method to set the card image, keeping the default when
    /// the submitted value is empty.
    pub fn with_card_image(mut self, card_image: String) -> Self {
        if !card_image.trim().is_empty() {
            self.card_image = card_image;
        }
        self
    }
}

/// Self-service profile fields a player may overwrite.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: String,
    pub discord: String,
    pub bio: String,
    pub card_image: String,
}

/// Admin-curated stat sheet for a market player.
#[derive(Debug, Clone, Default)]
pub struct StatSheet {
    pub goals: u32,
    pub assists: u32,
    pub saves: u32,
    pub mvps: u32,
    pub bio: String,
}
