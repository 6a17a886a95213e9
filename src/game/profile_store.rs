use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use super::leaderboard::{self, LeaderboardError, LEADERBOARD_VISIBLE};
use super::settings::Settings;
use super::store::{self, StoreActionError};
use crate::model::{LeaderboardEntry, PlayerProfile, SessionSummary, StoreItem};

const PROFILE_FILE: &str = "profile.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not determine a data directory")]
    NoDataDir,
}

/// Where the profile blob lives. Holds one complete JSON snapshot.
pub trait ProfileStorage {
    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, StoreError>;
    fn write(&mut self, contents: &str) -> Result<(), StoreError>;
    fn remove(&mut self) -> Result<(), StoreError>;
}

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_data_dir() -> Result<Self, StoreError> {
        let dir = Settings::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self::new(dir.join(PROFILE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, contents)?;
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }
}

impl ProfileStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<(), StoreError> {
        self.contents = None;
        Ok(())
    }
}

/// Owns the player's profile and writes the whole of it back after every
/// change. If the backing storage fails, the store keeps working from
/// memory for the rest of the process and stops touching storage.
pub struct ProfileStore {
    storage: Box<dyn ProfileStorage>,
    profile: PlayerProfile,
    degraded: bool,
}

impl std::fmt::Debug for ProfileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProfileStore {{profile: {:?}, degraded: {}}}",
            self.profile, self.degraded
        )
    }
}

impl ProfileStore {
    pub fn load(storage: Box<dyn ProfileStorage>) -> Self {
        let (profile, degraded) = match storage.read() {
            Ok(Some(contents)) => match serde_json::from_str::<PlayerProfile>(&contents) {
                Ok(profile) => (profile, false),
                Err(e) => {
                    warn!(target: "profile_store", "Stored profile unreadable, starting fresh: {}", e);
                    (PlayerProfile::default(), false)
                }
            },
            Ok(None) => (PlayerProfile::default(), false),
            Err(e) => {
                warn!(target: "profile_store", "Profile storage unavailable, keeping progress in memory: {}", e);
                (PlayerProfile::default(), true)
            }
        };
        debug!(target: "profile_store", "Loaded profile: {:?}", profile);

        Self {
            storage,
            profile,
            degraded,
        }
    }

    /// Profile file in the per-user data directory, or memory only when
    /// there is none.
    pub fn open_default() -> Self {
        match FileStorage::in_data_dir() {
            Ok(storage) => Self::load(Box::new(storage)),
            Err(e) => {
                warn!(target: "profile_store", "{}; keeping progress in memory", e);
                let mut store = Self::in_memory();
                store.degraded = true;
                store
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::load(Box::new(MemoryStorage::default()))
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn coins(&self) -> u32 {
        self.profile.coins
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Best effort. The first failure switches to memory-only mode.
    pub fn save(&mut self) {
        if self.degraded {
            return;
        }
        let result = serde_json::to_string(&self.profile)
            .map_err(StoreError::from)
            .and_then(|contents| self.storage.write(&contents));
        if let Err(e) = result {
            warn!(target: "profile_store", "Saving profile failed, keeping progress in memory: {}", e);
            self.degraded = true;
        }
    }

    /// Adds coins, saves, and returns the new balance.
    pub fn grant_coins(&mut self, amount: u32) -> u32 {
        self.profile.coins = self.profile.coins.saturating_add(amount);
        self.save();
        self.profile.coins
    }

    pub fn buy(&mut self, item_id: &str) -> Result<&'static StoreItem, StoreActionError> {
        let item = store::buy(&mut self.profile, item_id)?;
        info!(target: "profile_store", "Bought {} for {} coins", item.id, item.price);
        self.save();
        Ok(item)
    }

    pub fn equip(&mut self, item_id: &str) -> Result<(), StoreActionError> {
        store::equip(&mut self.profile, item_id)?;
        self.save();
        Ok(())
    }

    pub fn equipped_item(&self) -> Option<&'static StoreItem> {
        store::equipped_item(&self.profile)
    }

    /// Accessory drawn on the mascot, if any.
    pub fn equipped_icon(&self) -> Option<&'static str> {
        self.equipped_item().map(|item| item.icon)
    }

    pub fn submit_score(
        &mut self,
        name: &str,
        summary: &SessionSummary,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        let entry = leaderboard::entry_for(name, summary)?;
        self.profile.leaderboard.push(entry.clone());
        self.save();
        Ok(entry)
    }

    pub fn top_scores(&self) -> Vec<&LeaderboardEntry> {
        leaderboard::ranked(&self.profile.leaderboard, LEADERBOARD_VISIBLE)
    }

    /// Wipes coins, items and scores, in storage and in memory.
    pub fn reset(&mut self) {
        self.profile = PlayerProfile::default();
        if self.degraded {
            return;
        }
        if let Err(e) = self.storage.remove() {
            warn!(target: "profile_store", "Could not clear stored profile: {}", e);
            self.degraded = true;
        }
    }
}
