//! Reader for the `<Character>_<server>-Inventory.txt` export written by the game client.
//!
//! The export is one row per inventory slot. We only care about main-bag slots, whose
//! location column starts with `General`, and from those only the name and count columns.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use csv::{ByteRecord, ReaderBuilder};
use log::debug;
use thiserror::Error;

const GENERAL_SLOT_PREFIX: &str = "General";
const MIN_FIELDS: usize = 5;
const NAME_FIELD: usize = 1;
const COUNT_FIELD: usize = 3;

/// One qualifying inventory row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryRow {
    pub name: String,
    pub quantity: u32,
}

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Inventory file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Invalid item count \"{value}\" on line {line}")]
    InvalidQuantity { line: u64, value: String },
    #[error("Failed to read inventory file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed inventory file: {0}")]
    Csv(#[from] csv::Error),
}

pub fn inventory_file_name(character: &str, server_code: &str) -> String {
    format!("{character}_{server_code}-Inventory.txt")
}

/// Comma when the header line has one, tab otherwise.
pub fn detect_delimiter(content: &[u8]) -> u8 {
    let first_line = content.split(|byte| *byte == b'\n').next().unwrap_or_default();
    if first_line.contains(&b',') {
        b','
    } else {
        b'\t'
    }
}

pub fn read_inventory(path: &Path) -> Result<Vec<InventoryRow>, InventoryError> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(InventoryError::NotFound {
                path: path.to_path_buf(),
            })
        }
        Err(err) => return Err(err.into()),
    };
    debug!("[inventory] Read {} bytes from {}", content.len(), path.display());
    parse_inventory(&content)
}

pub fn parse_inventory(content: &[u8]) -> Result<Vec<InventoryRow>, InventoryError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(detect_delimiter(content))
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        if record.len() < MIN_FIELDS || !record[0].starts_with(GENERAL_SLOT_PREFIX.as_bytes()) {
            continue;
        }

        let name = String::from_utf8_lossy(&record[NAME_FIELD]).into_owned();
        let raw_count = String::from_utf8_lossy(&record[COUNT_FIELD]);
        let quantity = raw_count
            .trim()
            .parse::<u32>()
            .map_err(|_| InventoryError::InvalidQuantity {
                line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                value: raw_count.to_string(),
            })?;

        rows.push(InventoryRow { name, quantity });
    }

    debug!("[inventory] Parsed {} general inventory rows", rows.len());
    Ok(rows)
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
