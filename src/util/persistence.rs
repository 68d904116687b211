use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Error as SerdeError;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "EqVendorCalculator";
const APP_NAME: &str = "EqVendorCalculator";

pub const CONFIG_FILENAME: &str = "eq_calculator_config.json";
pub const ITEMS_FILENAME: &str = "eq_calculator_items.json";

/// Per-user directory holding the config and price list.
pub fn data_dir() -> Result<PathBuf, PersistError> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(PersistError::StorageUnavailable)
}

/// Reads a JSON document. `Ok(None)` when the file does not exist yet.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    Ok(Some(serde_json::from_str(&data)?))
}

/// Writes pretty JSON next to `path` and renames it into place.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
