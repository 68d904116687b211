use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::currency::Money;

/// Prices the calculator ships with, in copper.
const DEFAULT_PRICES: &[(&str, u64)] = &[
    ("Chunk of Meat", 13),
    ("Wolf Meat", 10),
    ("Pristine Pyre Beetle Carapace", 95),
    ("Cracked Pyre Beetle Carapace", 24),
    ("Fire Beetle Eye", 27),
    ("Snake Scales", 10),
    ("Garter Snake Tongue", 6),
    ("Ruined Wolf Pelt", 10),
    ("Rusty Scimitar", 181),
    ("Tiny Dagger", 10),
    ("Spell: Pendril's Animation", 19),
];

/// A vendor price for one item. The name keeps the spelling it was entered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceEntry {
    pub name: String,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceListError {
    #[error("Please enter an item name.")]
    EmptyName,
    #[error("An item with this name already exists: {existing}")]
    Duplicate { existing: String },
}

/// Item prices keyed case-insensitively.
///
/// On disk this is a flat JSON object of `"Item Name": copper`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Money>", into = "BTreeMap<String, Money>")]
pub struct PriceList {
    /// Lower-cased name -> entry.
    entries: BTreeMap<String, PriceEntry>,
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl PriceList {
    pub fn defaults() -> Self {
        let mut list = Self::default();
        for (name, copper) in DEFAULT_PRICES {
            list.insert_unchecked(name, Money::from_copper(*copper));
        }
        list
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by name, ignoring case.
    pub fn entries(&self) -> impl Iterator<Item = &PriceEntry> {
        self.entries.values()
    }

    pub fn lookup(&self, name: &str) -> Option<Money> {
        self.get(name).map(|entry| entry.price)
    }

    pub fn get(&self, name: &str) -> Option<&PriceEntry> {
        self.entries.get(&normalize(name))
    }

    pub fn add(&mut self, name: &str, price: Money) -> Result<(), PriceListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PriceListError::EmptyName);
        }
        if let Some(existing) = self.get(name) {
            return Err(PriceListError::Duplicate {
                existing: existing.name.clone(),
            });
        }
        self.insert_unchecked(name, price);
        Ok(())
    }

    /// Removes every named entry that exists and returns how many were removed.
    pub fn remove<'a, I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: HashSet<String> = names.into_iter().map(normalize).collect();
        let before = self.entries.len();
        self.entries.retain(|key, _| !keys.contains(key));
        before - self.entries.len()
    }

    fn insert_unchecked(&mut self, name: &str, price: Money) {
        self.entries.insert(
            normalize(name),
            PriceEntry {
                name: name.trim().to_string(),
                price,
            },
        );
    }
}

impl From<BTreeMap<String, Money>> for PriceList {
    fn from(raw: BTreeMap<String, Money>) -> Self {
        let mut list = PriceList::default();
        for (name, price) in raw {
            if let Err(err) = list.add(&name, price) {
                log::warn!("[store] Ignoring price entry \"{name}\": {err}");
            }
        }
        list
    }
}

impl From<PriceList> for BTreeMap<String, Money> {
    fn from(list: PriceList) -> Self {
        list.entries
            .into_values()
            .map(|entry| (entry.name, entry.price))
            .collect()
    }
}

#[cfg(test)]
#[path = "price_list_tests.rs"]
mod tests;
