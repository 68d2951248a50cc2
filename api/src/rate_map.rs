//! Exchange rates for the wallet's assets, quoted in fiat.

use crate::asset_type::AssetType;
use crate::fiat_amount::FiatAmount;
use crate::fiat_amount::ParseFiatAmountError;
use crate::fiat_currency::FiatCurrency;
use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseRateError {
    #[error("malformed currency pair: {0:?}")]
    MalformedPair(String),
    #[error("unknown asset in pair {0:?}")]
    UnknownAsset(String),
    #[error("unknown fiat currency in pair {0:?}")]
    UnknownFiat(String),
    #[error(transparent)]
    Price(#[from] ParseFiatAmountError),
}

/// The price of one whole unit of `asset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate {
    asset: AssetType,
    price: FiatAmount,
}

impl ExchangeRate {
    pub fn new(asset: AssetType, price: FiatAmount) -> Self {
        Self { asset, price }
    }

    /// Builds a rate from a pair label and a decimal price, e.g. ("ETH-USD", "204.51").
    pub fn from_pair(pair: &str, price: &str) -> Result<Self, ParseRateError> {
        let (asset, fiat) = pair
            .split_once('-')
            .ok_or_else(|| ParseRateError::MalformedPair(pair.to_owned()))?;
        let asset =
            AssetType::from_str(asset).map_err(|_| ParseRateError::UnknownAsset(pair.to_owned()))?;
        let fiat =
            FiatCurrency::from_str(fiat).map_err(|_| ParseRateError::UnknownFiat(pair.to_owned()))?;
        Ok(Self::new(asset, FiatAmount::parse(price, fiat)?))
    }

    pub fn asset(&self) -> AssetType {
        self.asset
    }

    pub fn price(&self) -> FiatAmount {
        self.price
    }

    /// "BTC-USD"
    pub fn pair(&self) -> String {
        format!("{}-{}", self.asset.symbol(), self.price.currency().code())
    }
}

/// The latest known rate per asset.
///
/// Stores minor-unit prices keyed by asset; reads hand back `ExchangeRate`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateMap(HashMap<AssetType, FiatAmount>);

impl RateMap {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Inserts or replaces the rate for its asset, returning the previous one.
    pub fn insert(&mut self, rate: ExchangeRate) -> Option<ExchangeRate> {
        self.0
            .insert(rate.asset, rate.price)
            .map(|old| ExchangeRate::new(rate.asset, old))
    }

    pub fn remove(&mut self, asset: AssetType) -> Option<ExchangeRate> {
        self.0
            .remove(&asset)
            .map(|price| ExchangeRate::new(asset, price))
    }

    pub fn get(&self, asset: AssetType) -> Option<ExchangeRate> {
        self.0
            .get(&asset)
            .map(|&price| ExchangeRate::new(asset, price))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fiat value of `amount` smallest units of `asset`, rounded down to the
    /// fiat minor unit. `None` when no rate is known or the result overflows.
    pub fn convert(&self, asset: AssetType, amount: i128) -> Option<FiatAmount> {
        let price = self.0.get(&asset)?;
        let scale = 10_i128.checked_pow(asset.decimals() as u32)?;
        let minor = amount.checked_mul(price.as_minor_units() as i128)? / scale;
        Some(FiatAmount::new_from_minor(
            i64::try_from(minor).ok()?,
            price.currency(),
        ))
    }

    /// Parses a comma separated list such as "BTC-USD=6500,ETH-USD=204.51".
    pub fn parse_list(s: &str) -> Result<Self, ParseRateError> {
        s.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let (pair, price) = entry
                    .split_once('=')
                    .ok_or_else(|| ParseRateError::MalformedPair(entry.to_owned()))?;
                ExchangeRate::from_pair(pair.trim(), price)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = ExchangeRate> + '_ {
        self.0
            .iter()
            .map(|(&asset, &price)| ExchangeRate::new(asset, price))
    }
}

impl FromIterator<ExchangeRate> for RateMap {
    fn from_iter<I: IntoIterator<Item = ExchangeRate>>(iter: I) -> Self {
        let mut map = Self::new();
        for rate in iter {
            map.insert(rate);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_from_pair() {
        let rate = ExchangeRate::from_pair("eth-eur", "204.5").unwrap();
        assert_eq!(rate.asset(), AssetType::Ether);
        assert_eq!(rate.price().as_minor_units(), 20_450);
        assert_eq!(rate.pair(), "ETH-EUR");
    }

    #[test]
    fn rate_from_bad_pair() {
        assert_eq!(
            ExchangeRate::from_pair("BTCUSD", "1"),
            Err(ParseRateError::MalformedPair("BTCUSD".into()))
        );
        assert_eq!(
            ExchangeRate::from_pair("DOGE-USD", "1"),
            Err(ParseRateError::UnknownAsset("DOGE-USD".into()))
        );
        assert!(matches!(
            ExchangeRate::from_pair("BTC-USD", "x"),
            Err(ParseRateError::Price(_))
        ));
    }

    #[test]
    fn insert_returns_previous_rate() {
        let mut rates = RateMap::new();
        let first = ExchangeRate::from_pair("BTC-USD", "6500").unwrap();
        let second = ExchangeRate::from_pair("BTC-USD", "6600").unwrap();
        assert_eq!(rates.insert(first), None);
        assert_eq!(rates.insert(second), Some(first));
        assert_eq!(rates.get(AssetType::Bitcoin), Some(second));
        assert_eq!(rates.len(), 1);
    }

    #[test]
    fn parse_list_of_pairs() {
        let rates = RateMap::parse_list("BTC-USD=6500, ETH-USD=204.51,").unwrap();
        assert_eq!(rates.len(), 2);
        assert_eq!(
            rates.get(AssetType::Ether).unwrap().price().to_string_with_symbol(),
            "$204.51"
        );
        assert_eq!(
            RateMap::parse_list("BTC-USD"),
            Err(ParseRateError::MalformedPair("BTC-USD".into()))
        );
        assert!(RateMap::parse_list("").unwrap().is_empty());
    }

    #[test]
    fn convert_uses_asset_decimals() {
        let rates: RateMap = [ExchangeRate::from_pair("BTC-USD", "6500").unwrap()]
            .into_iter()
            .collect();
        // 0.5 BTC
        let value = rates.convert(AssetType::Bitcoin, 50_000_000).unwrap();
        assert_eq!(value.to_string_with_symbol(), "$3250.00");
        assert_eq!(rates.convert(AssetType::Ether, 1), None);
    }
}
