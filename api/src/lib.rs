//! Shared wallet types: assets, fiat amounts, exchange rates and user prefs.

pub mod asset_type;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod prefs;
pub mod rate_map;

pub use asset_type::AssetType;
pub use rate_map::ExchangeRate;
pub use rate_map::RateMap;
