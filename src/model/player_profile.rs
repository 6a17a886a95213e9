use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull, VecSkipError};
use uuid::Uuid;

pub const DEFAULT_PLAYER_NAME: &str = "Jucător";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: u32,
    #[serde(default, alias = "time")]
    pub elapsed_seconds: u64,
    #[serde(default, alias = "date")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub playthrough_id: Option<Uuid>,
}

impl LeaderboardEntry {
    /// Rows saved before names were asked for show a generic player.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_PLAYER_NAME,
        }
    }
}

/// Everything kept across restarts. Every field defaults, so older or
/// partial blobs load with the missing parts filled in. Unreadable
/// leaderboard rows or inventory ids are dropped on their own.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlayerProfile {
    #[serde_as(as = "DefaultOnNull")]
    pub coins: u32,
    #[serde_as(as = "DefaultOnNull<VecSkipError<_>>")]
    pub inventory: Vec<String>,
    pub equipped: Option<String>,
    #[serde_as(as = "DefaultOnNull<VecSkipError<_>>")]
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl PlayerProfile {
    pub fn owns(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    pub fn is_equipped(&self, item_id: &str) -> bool {
        self.equipped.as_deref() == Some(item_id)
    }
}
