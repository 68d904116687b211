//! Vendor valuation: coin, prices, inventory exports and the state tying them together.

pub mod app_state;
pub mod config;
pub mod currency;
pub mod inventory;
pub mod price_list;
pub mod servers;
pub mod valuation;

#[allow(unused_imports)]
pub use app_state::{AppState, CalculationError};
#[allow(unused_imports)]
pub use config::{validate_install_dir, AppConfig, ConfigError};
#[allow(unused_imports)]
pub use currency::{CurrencyError, Money};
#[allow(unused_imports)]
pub use inventory::{InventoryError, InventoryRow};
#[allow(unused_imports)]
pub use price_list::{PriceEntry, PriceList, PriceListError};
#[allow(unused_imports)]
pub use servers::{server_names, Server};
#[allow(unused_imports)]
pub use valuation::{LineItem, LineItemColumn, LineItemSort, Valuation};
