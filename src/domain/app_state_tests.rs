//! Tests for calculating through the application state.

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::domain::Money;

struct Fixture {
    dir: TempDir,
    state: AppState,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::with_paths(
            dir.path().join("eq_calculator_config.json"),
            dir.path().join("eq_calculator_items.json"),
        );
        state.set_install_dir(dir.path().to_path_buf()).unwrap();
        Self { dir, state }
    }

    fn write_export(&self, file_name: &str, content: &str) {
        fs::write(self.dir.path().join(file_name), content).unwrap();
    }

    fn select(&mut self, character: &str, server: &str) {
        self.state.character = character.to_string();
        self.state.server = server.to_string();
    }
}

#[test]
fn calculates_from_the_expected_export_file() {
    let mut fx = Fixture::new();
    fx.write_export("Fippy_vox-Inventory.txt", "General1,Wolf Meat,0,3,0\n");
    fx.select("Fippy", "Vox");

    let valuation = fx.state.recalculate().unwrap().clone();

    assert_eq!(valuation.total, Money::from_copper(30));
    assert_eq!(valuation.items[0].total, Money::from_copper(30));
    assert_eq!(fx.state.valuation, Some(valuation));
}

#[test]
fn character_name_is_trimmed() {
    let mut fx = Fixture::new();
    fx.write_export("Fippy_rathe-Inventory.txt", "General1,Tiny Dagger,0,2,0\n");
    fx.select("  Fippy ", "The Rathe - Prexus");

    let path = fx.state.inventory_path().unwrap();

    assert_eq!(path, fx.dir.path().join("Fippy_rathe-Inventory.txt"));
    assert_eq!(fx.state.recalculate().unwrap().total, Money::from_copper(20));
}

#[test]
fn missing_selection_fails_before_touching_disk() {
    let mut fx = Fixture::new();
    fx.select("", "Vox");
    assert!(matches!(fx.state.recalculate(), Err(CalculationError::MissingSelection)));

    fx.select("Fippy", "");
    assert!(matches!(fx.state.recalculate(), Err(CalculationError::MissingSelection)));
}

#[test]
fn unknown_server_is_rejected() {
    let mut fx = Fixture::new();
    fx.select("Fippy", "Karana");
    assert!(matches!(
        fx.state.recalculate(),
        Err(CalculationError::UnknownServer(name)) if name == "Karana"
    ));
}

#[test]
fn unconfigured_install_dir_is_rejected() {
    let mut fx = Fixture::new();
    fx.state.reset_install_dir().unwrap();
    fx.select("Fippy", "Vox");
    assert!(matches!(fx.state.recalculate(), Err(CalculationError::NotConfigured)));
}

#[test]
fn missing_export_keeps_previous_result() {
    let mut fx = Fixture::new();
    fx.write_export("Fippy_vox-Inventory.txt", "General1,Wolf Meat,0,3,0\n");
    fx.select("Fippy", "Vox");
    fx.state.recalculate().unwrap();

    fx.select("Nobody", "Vox");
    let err = fx.state.recalculate().unwrap_err();

    assert!(matches!(
        err,
        CalculationError::Inventory(InventoryError::NotFound { .. })
    ));
    assert_eq!(
        fx.state.valuation.as_ref().map(|v| v.total),
        Some(Money::from_copper(30))
    );
}

#[test]
fn bad_count_keeps_previous_result() {
    let mut fx = Fixture::new();
    fx.write_export("Fippy_vox-Inventory.txt", "General1,Wolf Meat,0,3,0\n");
    fx.select("Fippy", "Vox");
    fx.state.recalculate().unwrap();

    fx.write_export("Fippy_vox-Inventory.txt", "General1,Wolf Meat,0,three,0\n");
    let err = fx.state.recalculate().unwrap_err();

    assert!(matches!(
        err,
        CalculationError::Inventory(InventoryError::InvalidQuantity { .. })
    ));
    assert_eq!(fx.state.valuation.as_ref().unwrap().total, Money::from_copper(30));
}

#[test]
fn new_prices_apply_on_recalculation() {
    let mut fx = Fixture::new();
    fx.write_export(
        "Fippy_vox-Inventory.txt",
        "General1,Wolf Meat,0,3,0\nGeneral2,Bat Wing,0,4,0\n",
    );
    fx.select("Fippy", "Vox");
    assert_eq!(fx.state.recalculate().unwrap().skipped, 1);

    fx.state.prices.add("bat wing", Money::from_copper(5)).unwrap();

    assert_eq!(fx.state.recalculate().unwrap().total, Money::from_copper(50));
}

#[test]
fn successful_calculation_remembers_selection() {
    let mut fx = Fixture::new();
    fx.write_export("Fippy_vox-Inventory.txt", "General1,Wolf Meat,0,1,0\n");
    fx.select("Fippy", "Vox");
    fx.state.recalculate().unwrap();

    let reloaded = AppState::with_paths(
        fx.dir.path().join("eq_calculator_config.json"),
        fx.dir.path().join("eq_calculator_items.json"),
    );

    assert_eq!(reloaded.character, "Fippy");
    assert_eq!(reloaded.server, "Vox");
    assert_eq!(reloaded.config.eq_path.as_deref(), Some(fx.dir.path()));
}

#[test]
fn reset_install_dir_is_persisted() {
    let mut fx = Fixture::new();
    fx.state.reset_install_dir().unwrap();

    let reloaded = AppConfig::load(&fx.dir.path().join("eq_calculator_config.json"));

    assert!(!reloaded.is_configured());
}
