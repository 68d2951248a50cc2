use super::env_flag;
use crate::fiat_currency::FiatCurrency;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// How monetary values are labelled on the asset screens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum DisplayPreference {
    /// Crypto amounts only. Exchange rates are ignored when rendering.
    CryptoOnly,

    /// Exchange rates are applied to render fiat values.
    FiatEnabled {
        /// The fiat currency rates are quoted in.
        fiat: FiatCurrency,

        /// `true` shows fiat as the primary figure, `false` shows crypto first.
        display_as_fiat: bool,
    },
}

impl DisplayPreference {
    /// Builds the preference from environment variables.
    ///
    /// # Environment Variables
    /// - `CRYPTO_ONLY`: "true"/"1" disables fiat display. Defaults to false.
    /// - `FIAT_CURRENCY`: ISO code such as "USD" or "eur". Unknown codes fall back to USD.
    /// - `DISPLAY_AS_FIAT`: "true"/"1" makes fiat the primary figure. Defaults to true.
    pub fn from_env() -> Self {
        const CRYPTO_ONLY: bool = false;

        if env_flag("CRYPTO_ONLY").unwrap_or(CRYPTO_ONLY) {
            return Self::CryptoOnly;
        }

        let fiat = env::var("FIAT_CURRENCY")
            .ok()
            .and_then(|s| FiatCurrency::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self::FiatEnabled {
            fiat,
            display_as_fiat: env_flag("DISPLAY_AS_FIAT").unwrap_or(true),
        }
    }

    /// The selected fiat currency, if fiat display is on.
    pub fn fiat(&self) -> Option<FiatCurrency> {
        match self {
            Self::CryptoOnly => None,
            Self::FiatEnabled { fiat, .. } => Some(*fiat),
        }
    }
}

impl Default for DisplayPreference {
    fn default() -> Self {
        Self::from_env()
    }
}
