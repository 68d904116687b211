use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use super::{
    config::AppConfig,
    inventory::{inventory_file_name, read_inventory, InventoryError},
    servers::Server,
    valuation::{value_inventory, LineItemSort, Valuation},
};
use crate::{
    infra::price_store::PriceStore,
    util::persistence::{self, PersistError, ITEMS_FILENAME},
};

#[derive(Debug, Error)]
pub enum CalculationError {
    #[error("Set your EverQuest installation folder first.")]
    NotConfigured,
    #[error("Please enter your character name and select a server!")]
    MissingSelection,
    #[error("Unknown server: {0}")]
    UnknownServer(String),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Everything the UI works on, owned in one place and handed to pages via context.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    /// `None` when the platform has no config directory; changes then live for the session only.
    config_path: Option<PathBuf>,
    pub prices: PriceStore,
    pub character: String,
    pub server: String,
    /// Last successful calculation.
    pub valuation: Option<Valuation>,
    pub sort: LineItemSort,
}

impl AppState {
    /// Loads config and prices from the per-user data directory.
    pub fn load() -> Self {
        match persistence::data_dir() {
            Ok(dir) => Self::with_paths(
                dir.join(persistence::CONFIG_FILENAME),
                dir.join(ITEMS_FILENAME),
            ),
            Err(err) => {
                warn!("[config] {err}; settings and prices will not be saved");
                Self::from_parts(AppConfig::default(), None, PriceStore::in_memory_defaults(ITEMS_FILENAME))
            }
        }
    }

    pub fn with_paths(config_path: PathBuf, items_path: PathBuf) -> Self {
        let config = AppConfig::load(&config_path);
        let prices = PriceStore::open(items_path);
        Self::from_parts(config, Some(config_path), prices)
    }

    fn from_parts(config: AppConfig, config_path: Option<PathBuf>, prices: PriceStore) -> Self {
        Self {
            character: config.last_character.clone().unwrap_or_default(),
            server: config.last_server.clone().unwrap_or_default(),
            config,
            config_path,
            prices,
            valuation: None,
            sort: LineItemSort::default(),
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn has_selection(&self) -> bool {
        !self.character.trim().is_empty() && !self.server.is_empty()
    }

    /// Full path of the inventory export for the current character and server.
    pub fn inventory_path(&self) -> Result<PathBuf, CalculationError> {
        if !self.has_selection() {
            return Err(CalculationError::MissingSelection);
        }
        let server = Server::find(&self.server)
            .ok_or_else(|| CalculationError::UnknownServer(self.server.clone()))?;
        let eq_path = self
            .config
            .eq_path
            .as_ref()
            .ok_or(CalculationError::NotConfigured)?;
        Ok(eq_path.join(inventory_file_name(self.character.trim(), server.code)))
    }

    /// Values the current character's inventory. The previous result is kept on failure.
    pub fn recalculate(&mut self) -> Result<&Valuation, CalculationError> {
        let path = self.inventory_path()?;
        let rows = read_inventory(&path)?;
        let valuation = value_inventory(&rows, self.prices.list());
        info!(
            "[inventory] {} priced rows ({} unpriced) worth {} in {}",
            valuation.items.len(),
            valuation.skipped,
            valuation.total,
            path.display()
        );

        let character = Some(self.character.trim().to_string());
        let server = Some(self.server.clone());
        if self.config.last_character != character || self.config.last_server != server {
            self.config.last_character = character;
            self.config.last_server = server;
            if let Err(err) = self.save_config() {
                warn!("[config] Failed to remember selection: {err}");
            }
        }

        Ok(&*self.valuation.insert(valuation))
    }

    pub fn set_install_dir(&mut self, dir: PathBuf) -> Result<(), PersistError> {
        info!("[config] EverQuest folder set to {}", dir.display());
        self.config.eq_path = Some(dir);
        self.save_config()
    }

    pub fn reset_install_dir(&mut self) -> Result<(), PersistError> {
        info!("[config] EverQuest folder reset");
        self.config.eq_path = None;
        self.valuation = None;
        self.save_config()
    }

    fn save_config(&self) -> Result<(), PersistError> {
        match &self.config_path {
            Some(path) => self.config.save(path),
            None => Err(PersistError::StorageUnavailable),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
