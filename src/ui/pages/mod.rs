pub mod calculator;
pub mod price_list;
pub mod settings;
pub mod setup;

pub use calculator::CalculatorPage;
pub use price_list::PriceListPage;
pub use settings::SettingsPage;
pub use setup::SetupPage;
