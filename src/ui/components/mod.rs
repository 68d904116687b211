pub mod coin_input;
pub mod kpi_card;
pub mod line_item_table;
pub mod price_entry_table;
pub mod toast;
