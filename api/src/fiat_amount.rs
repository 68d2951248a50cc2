//! An integer-backed fiat amount used to render rate-derived text.

use std::fmt;

use thiserror::Error;

use crate::fiat_currency::FiatCurrency;

/// An error that can occur when parsing a string into a `FiatAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseFiatAmountError {
    /// Not a plain decimal number ("abc", "1.2.3", "").
    #[error("invalid fiat amount format")]
    InvalidFormat,
    /// More fractional digits than the currency has minor units.
    #[error("too many decimal places for {0:?}")]
    TooManyDecimals(FiatCurrency),
    #[error("fiat amount out of range")]
    Overflow,
}

/// A monetary value stored in the currency's smallest unit (cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount {
    minor: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    pub fn new_from_minor(minor: i64, currency: FiatCurrency) -> Self {
        Self { minor, currency }
    }

    /// Rounds `value` to the nearest minor unit of `currency`.
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let scale = 10_f64.powi(currency.decimals() as i32);
        Self::new_from_minor((value * scale).round() as i64, currency)
    }

    /// Parses a plain decimal string such as "6512.3" or "-0.05".
    pub fn parse(s: &str, currency: FiatCurrency) -> Result<Self, ParseFiatAmountError> {
        let decimals = currency.decimals() as usize;
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(ParseFiatAmountError::InvalidFormat);
        }
        if frac.len() > decimals {
            return Err(ParseFiatAmountError::TooManyDecimals(currency));
        }

        let parse_part = |part: &str| -> Result<i64, ParseFiatAmountError> {
            if part.is_empty() {
                Ok(0)
            } else {
                part.parse::<i64>()
                    .map_err(|_| ParseFiatAmountError::Overflow)
            }
        };
        let padded_frac = parse_part(frac)? * 10_i64.pow((decimals - frac.len()) as u32);
        let minor = parse_part(whole)?
            .checked_mul(10_i64.pow(decimals as u32))
            .and_then(|m| m.checked_add(padded_frac))
            .ok_or(ParseFiatAmountError::Overflow)?;

        Ok(Self::new_from_minor(
            if negative { -minor } else { minor },
            currency,
        ))
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    pub fn as_minor_units(&self) -> i64 {
        self.minor
    }

    /// "$25.34"
    pub fn to_string_with_symbol(&self) -> String {
        format!("{}{}", self.currency.symbol(), self)
    }

    /// "25.34 USD"
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self, self.currency.code())
    }
}

/// Formats as a plain number with the currency's decimals, e.g. "25.34".
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as u32;
        if decimals == 0 {
            return write!(f, "{}", self.minor);
        }

        let divisor = 10_i64.pow(decimals);
        let sign = if self.minor < 0 { "-" } else { "" };
        let abs = self.minor.unsigned_abs();
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / divisor as u64,
            abs % divisor as u64,
            width = decimals as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pads_missing_fraction_digits() {
        let amount = FiatAmount::parse("6512.3", FiatCurrency::USD).unwrap();
        assert_eq!(amount.as_minor_units(), 651_230);
        assert_eq!(amount.to_string_with_symbol(), "$6512.30");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            FiatAmount::parse("1.234", FiatCurrency::EUR),
            Err(ParseFiatAmountError::TooManyDecimals(FiatCurrency::EUR))
        );
        assert_eq!(
            FiatAmount::parse("1.2.3", FiatCurrency::USD),
            Err(ParseFiatAmountError::InvalidFormat)
        );
        assert_eq!(
            FiatAmount::parse("", FiatCurrency::USD),
            Err(ParseFiatAmountError::InvalidFormat)
        );
    }

    #[test]
    fn small_negative_amounts_keep_their_sign() {
        let amount = FiatAmount::new_from_minor(-5, FiatCurrency::USD);
        assert_eq!(amount.to_string(), "-0.05");
    }

    #[test]
    fn zero_decimal_currencies() {
        let amount = FiatAmount::new_from_float(1234.6, FiatCurrency::JPY);
        assert_eq!(amount.as_minor_units(), 1235);
        assert_eq!(amount.to_string_with_code(), "1235 JPY");
    }
}
