//! Defines the fiat currencies that exchange rates can be quoted in.

use serde::Deserialize;
use serde::Serialize;

/// A fiat currency used to quote asset prices.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD,
    BRL,
    CAD,
    CHF,
    CNY,
    EUR,
    GBP,
    HKD,
    INR,
    JPY,
    KRW,
    KWD,
    RUB,
    SEK,
    SGD,
    THB,
    #[default]
    USD,
}

/// Symbol, name, and minor-unit decimals.
struct CurrencyInfo {
    symbol: &'static str,
    name: &'static str,
    decimals: u8,
}

impl FiatCurrency {
    fn info(&self) -> CurrencyInfo {
        let (symbol, name, decimals) = match self {
            Self::AUD => ("$", "Australian Dollar", 2),
            Self::BRL => ("R$", "Brazilian Real", 2),
            Self::CAD => ("$", "Canadian Dollar", 2),
            Self::CHF => ("CHF", "Swiss Franc", 2),
            Self::CNY => ("¥", "Chinese Yuan", 2),
            Self::EUR => ("€", "Euro", 2),
            Self::GBP => ("£", "British Pound", 2),
            Self::HKD => ("$", "Hong Kong Dollar", 2),
            Self::INR => ("₹", "Indian Rupee", 2),
            Self::JPY => ("¥", "Japanese Yen", 0),
            Self::KRW => ("₩", "South Korean Won", 0),
            Self::KWD => ("د.ك", "Kuwaiti Dinar", 3),
            Self::RUB => ("₽", "Russian Ruble", 2),
            Self::SEK => ("kr", "Swedish Krona", 2),
            Self::SGD => ("$", "Singapore Dollar", 2),
            Self::THB => ("฿", "Thai Baht", 2),
            Self::USD => ("$", "US Dollar", 2),
        };
        CurrencyInfo {
            symbol,
            name,
            decimals,
        }
    }

    /// Number of decimal digits in the currency's minor unit (2 for cents, 0 for yen).
    pub fn decimals(&self) -> u8 {
        self.info().decimals
    }

    /// The graphical symbol, e.g. '€'.
    pub fn symbol(&self) -> &'static str {
        self.info().symbol
    }

    /// The ISO 4217 code, e.g. "EUR".
    pub fn code(&self) -> &'static str {
        self.into()
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }
}
