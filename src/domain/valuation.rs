use std::cmp::Ordering;

use log::debug;

use super::{currency::Money, inventory::InventoryRow, price_list::PriceList};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub total: Money,
}

/// What the bags are worth at the vendor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    pub total: Money,
    /// Priced rows, in the order they appear in the export.
    pub items: Vec<LineItem>,
    /// Rows that had no price entry.
    pub skipped: usize,
}

pub fn value_inventory(rows: &[InventoryRow], prices: &PriceList) -> Valuation {
    let mut items = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for row in rows {
        let Some(unit_price) = prices.lookup(&row.name) else {
            debug!("[valuation] No price for \"{}\"; skipping", row.name);
            skipped += 1;
            continue;
        };
        items.push(LineItem {
            name: row.name.clone(),
            quantity: row.quantity,
            unit_price,
            total: unit_price.times(row.quantity),
        });
    }

    Valuation {
        total: items.iter().map(|item| item.total).sum(),
        items,
        skipped,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineItemColumn {
    #[default]
    Name,
    Quantity,
    UnitPrice,
    Total,
}

impl LineItemColumn {
    pub const ALL: [LineItemColumn; 4] = [
        LineItemColumn::Name,
        LineItemColumn::Quantity,
        LineItemColumn::UnitPrice,
        LineItemColumn::Total,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LineItemColumn::Name => "Item Name",
            LineItemColumn::Quantity => "Quantity",
            LineItemColumn::UnitPrice => "Price",
            LineItemColumn::Total => "Total",
        }
    }

    fn compare(&self, a: &LineItem, b: &LineItem) -> Ordering {
        match self {
            LineItemColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            LineItemColumn::Quantity => a.quantity.cmp(&b.quantity),
            LineItemColumn::UnitPrice => a.unit_price.cmp(&b.unit_price),
            LineItemColumn::Total => a.total.cmp(&b.total),
        }
    }
}

/// Column sort for the breakdown table. `None` keeps file order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineItemSort {
    pub column: Option<LineItemColumn>,
    pub descending: bool,
}

impl LineItemSort {
    /// Clicking the active column flips direction; another column starts ascending.
    pub fn toggled(self, column: LineItemColumn) -> Self {
        if self.column == Some(column) {
            Self {
                column: Some(column),
                descending: !self.descending,
            }
        } else {
            Self {
                column: Some(column),
                descending: false,
            }
        }
    }

    pub fn arrow(&self, column: LineItemColumn) -> &'static str {
        match (self.column == Some(column), self.descending) {
            (false, _) => "",
            (true, false) => " ↑",
            (true, true) => " ↓",
        }
    }

    pub fn apply(&self, items: &mut [LineItem]) {
        let Some(column) = self.column else {
            return;
        };
        // Stable, so equal keys keep file order.
        items.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            if self.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }
}

#[cfg(test)]
#[path = "valuation_tests.rs"]
mod tests;
