use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};

use super::profile_store::StoreError;
use crate::model::{Difficulty, QuizMode};

const SETTINGS_FILE: &str = "settings.json";
const CURRENT_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default)]
    pub mode: QuizMode,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub muted: bool,
}

fn default_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: CURRENT_VERSION,
            mode: QuizMode::default(),
            difficulty: Difficulty::default(),
            muted: false,
        }
    }
}

impl Settings {
    /// Per-user data directory, shared with the profile file.
    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "mathbear", "mathbear").map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!(target: "settings", "No data directory; using default settings");
                Settings::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(mut settings) = serde_json::from_str::<Settings>(&contents) {
                settings.migrate();
                return settings;
            }
        }
        let default = Settings::default();
        if let Err(e) = default.save_to(path) {
            warn!(target: "settings", "Could not write default settings: {}", e);
        }
        default
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let path = Self::settings_path().ok_or(StoreError::NoDataDir)?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Keeps the player's latest pick so the next launch starts from it.
    pub fn remember(&mut self, mode: QuizMode, difficulty: Difficulty) -> Result<(), StoreError> {
        self.mode = mode;
        self.difficulty = difficulty;
        self.save()
    }

    pub fn remember_at(
        &mut self,
        path: &Path,
        mode: QuizMode,
        difficulty: Difficulty,
    ) -> Result<(), StoreError> {
        self.mode = mode;
        self.difficulty = difficulty;
        self.save_to(path)
    }

    fn settings_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join(SETTINGS_FILE))
    }

    fn migrate(&mut self) {
        match self.version {
            // version 1 had no mute toggle; serde already defaulted it
            0 | 1 => {
                self.version = CURRENT_VERSION;
            }
            _ => (),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    pub fn seed_from_env() -> Option<u64> {
        let value = std::env::var("SEED").ok()?;
        match value.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                warn!(target: "settings", "Ignoring SEED={:?}: {}", value, e);
                None
            }
        }
    }
}
