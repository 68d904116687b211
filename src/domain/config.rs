use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::persistence::{load_json, save_json, PersistError};

const GAME_EXECUTABLE: &str = "EQGame.exe";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// EverQuest installation folder; the client writes inventory exports here.
    #[serde(default)]
    pub eq_path: Option<PathBuf>,
    #[serde(default)]
    pub last_character: Option<String>,
    #[serde(default)]
    pub last_server: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Please select your EverQuest installation folder.")]
    MissingPath,
    #[error("{} is not a folder.", .0.display())]
    NotADirectory(PathBuf),
    #[error("EQGame.exe not found in {}. Please select the correct EverQuest installation folder.", .0.display())]
    GameNotFound(PathBuf),
}

impl AppConfig {
    /// Reads the config, falling back to an unconfigured default on any problem.
    pub fn load(path: &Path) -> Self {
        match load_json::<AppConfig>(path) {
            Ok(Some(config)) => {
                info!("[config] Loaded config from {}", path.display());
                config
            }
            Ok(None) => AppConfig::default(),
            Err(err) => {
                warn!("[config] Ignoring unreadable config at {}: {err}", path.display());
                AppConfig::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        save_json(path, self)
    }

    pub fn is_configured(&self) -> bool {
        self.eq_path.is_some()
    }
}

/// Checks that `path` looks like an EverQuest install.
pub fn validate_install_dir(path: &str) -> Result<PathBuf, ConfigError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingPath);
    }
    let dir = PathBuf::from(trimmed);
    if !dir.is_dir() {
        return Err(ConfigError::NotADirectory(dir));
    }
    if !dir.join(GAME_EXECUTABLE).is_file() {
        return Err(ConfigError::GameNotFound(dir));
    }
    Ok(dir)
}
