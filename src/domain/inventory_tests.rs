//! Unit tests for the inventory export reader.

use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use super::*;

const TAB_EXPORT: &str = "Location\tName\tID\tCount\tSlots\n\
Charm\tEmpty\t0\t0\t0\n\
General1\tBackpack*\t17005\t1\t8\n\
General1-Slot1\tWolf Meat\t13403\t3\t0\n\
General2\tRusty Scimitar\t5021\t1\t0\n\
Bank1\tSnake Scales\t13070\t20\t0\n";

#[test]
fn detects_comma_from_first_line() {
    assert_eq!(detect_delimiter(b"General1,Wolf Meat,0,3,0\n"), b',');
}

#[test]
fn defaults_to_tab() {
    assert_eq!(detect_delimiter(b"Location\tName\tID\tCount\tSlots\nGeneral1,x"), b'\t');
    assert_eq!(detect_delimiter(b""), b'\t');
}

#[test]
fn parses_comma_separated_row() {
    let rows = parse_inventory(b"General1,Wolf Meat,0,3,0\n").unwrap();
    assert_eq!(
        rows,
        vec![InventoryRow {
            name: "Wolf Meat".to_string(),
            quantity: 3,
        }]
    );
}

#[test]
fn keeps_only_general_rows_in_file_order() {
    let rows = parse_inventory(TAB_EXPORT.as_bytes()).unwrap();
    let names: Vec<_> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["Backpack*", "Wolf Meat", "Rusty Scimitar"]);
}

#[test]
fn skips_rows_with_too_few_fields() {
    let rows = parse_inventory(b"General1\tWolf Meat\t0\t3\n").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn count_is_trimmed() {
    let rows = parse_inventory(b"General1,Wolf Meat,0, 7 ,0\n").unwrap();
    assert_eq!(rows[0].quantity, 7);
}

#[test]
fn name_is_taken_verbatim() {
    let rows = parse_inventory(b"General1,\"Spell: Pendril's Animation\",0,1,0\n").unwrap();
    assert_eq!(rows[0].name, "Spell: Pendril's Animation");
}

#[test]
fn invalid_count_fails_the_whole_file() {
    let content = b"General1,Wolf Meat,0,3,0\nGeneral2,Tiny Dagger,0,lots,0\n";

    let err = parse_inventory(content).unwrap_err();

    match err {
        InventoryError::InvalidQuantity { line, value } => {
            assert_eq!(line, 2);
            assert_eq!(value, "lots");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_count_on_ignored_rows_is_harmless() {
    let rows = parse_inventory(b"Bank1,Wolf Meat,0,lots,0\n").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn empty_file_has_no_rows() {
    assert!(parse_inventory(b"").unwrap().is_empty());
}

#[test]
fn handles_crlf_line_endings() {
    let rows = parse_inventory(b"General1\tWolf Meat\t0\t3\t0\r\nGeneral2\tTiny Dagger\t0\t2\t0\r\n").unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].quantity, 2);
}

#[test]
fn read_inventory_from_disk() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{TAB_EXPORT}").unwrap();

    let rows = read_inventory(file.path()).unwrap();

    assert_eq!(rows.len(), 3);
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Nobody_zek-Inventory.txt");

    let err = read_inventory(&path).unwrap_err();

    assert!(matches!(err, InventoryError::NotFound { path: p } if p == path));
}

#[test]
fn file_name_follows_client_convention() {
    assert_eq!(inventory_file_name("Bristlebane", "rathe"), "Bristlebane_rathe-Inventory.txt");
}
