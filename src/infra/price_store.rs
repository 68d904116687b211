//! The price list, owned together with the file it lives in.
//!
//! Every mutation is written straight back to disk. Loading never fails: a missing, empty
//! or unreadable file is replaced by the built-in defaults.

use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::{
    domain::{Money, PriceEntry, PriceList, PriceListError},
    util::persistence::{load_json, save_json, PersistError},
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    PriceList(#[from] PriceListError),
    #[error("Failed to save items: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Clone, Debug)]
pub struct PriceStore {
    path: PathBuf,
    list: PriceList,
}

impl PriceStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let list = match load_json::<PriceList>(&path) {
            Ok(Some(list)) if !list.is_empty() => {
                info!("[store] Loaded {} prices from {}", list.len(), path.display());
                return Self { path, list };
            }
            Ok(Some(_)) => {
                info!("[store] Price list at {} is empty; restoring defaults", path.display());
                PriceList::defaults()
            }
            Ok(None) => {
                info!("[store] No price list at {}; writing defaults", path.display());
                PriceList::defaults()
            }
            Err(err) => {
                warn!("[store] Error loading items from {}: {err}", path.display());
                PriceList::defaults()
            }
        };

        let store = Self { path, list };
        if let Err(err) = store.save() {
            warn!("[store] Error saving default items: {err}");
        }
        store
    }

    /// Store that is never backed by a readable file; used when no data directory exists.
    pub fn in_memory_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            list: PriceList::defaults(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> &PriceList {
        &self.list
    }

    pub fn entries(&self) -> impl Iterator<Item = &PriceEntry> {
        self.list.entries()
    }

    /// Adds an item and saves. A failed save keeps the item in memory.
    pub fn add(&mut self, name: &str, price: Money) -> Result<(), StoreError> {
        self.list.add(name, price)?;
        info!("[store] Added \"{}\" at {price}", name.trim());
        self.save()?;
        Ok(())
    }

    /// Removes the named items and saves once. Returns how many were removed.
    pub fn remove<'a, I>(&mut self, names: I) -> Result<usize, StoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let removed = self.list.remove(names);
        info!("[store] Removed {removed} price entries");
        self.save()?;
        Ok(removed)
    }

    fn save(&self) -> Result<(), PersistError> {
        save_json(&self.path, &self.list)
    }
}

#[cfg(test)]
#[path = "price_store_tests.rs"]
mod tests;
