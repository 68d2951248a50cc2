//! Defines the crypto assets the wallet shows as tabs.

use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A crypto asset with its own tab in the wallet.
///
/// The declaration order is the default tab order.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
)]
pub enum AssetType {
    #[default]
    Bitcoin,
    Ether,
    BitcoinCash,
    Stellar,
    Pax,
}

impl AssetType {
    /// Returns the ticker symbol for the asset (e.g., "BTC").
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Bitcoin => "BTC",
            Self::Ether => "ETH",
            Self::BitcoinCash => "BCH",
            Self::Stellar => "XLM",
            Self::Pax => "PAX",
        }
    }

    /// Returns the human readable name of the asset.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bitcoin => "Bitcoin",
            Self::Ether => "Ether",
            Self::BitcoinCash => "Bitcoin Cash",
            Self::Stellar => "Stellar",
            Self::Pax => "USD PAX",
        }
    }

    /// Number of decimal places in the asset's smallest unit.
    ///
    /// Satoshis for BTC/BCH, wei for ETH and PAX, stroops for XLM.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::Bitcoin | Self::BitcoinCash => 8,
            Self::Ether | Self::Pax => 18,
            Self::Stellar => 7,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses either the variant name ("ether") or the ticker ("ETH"), ignoring case.
impl FromStr for AssetType {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use strum::IntoEnumIterator;

        let s = s.trim();
        Self::iter()
            .find(|asset| {
                let variant: &'static str = asset.into();
                variant.eq_ignore_ascii_case(s) || asset.symbol().eq_ignore_ascii_case(s)
            })
            .ok_or(strum::ParseError::VariantNotFound)
    }
}
