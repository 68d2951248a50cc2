use super::display_preference::DisplayPreference;
use super::env_flag;
use crate::asset_type::AssetType;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use std::env;

/// All user prefs. Intended for saving to a file, editing in a settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    display_preference: DisplayPreference,
    /// Tab shown when the wallet opens.
    default_asset: AssetType,
    /// Cross-fade between asset screens instead of swapping instantly.
    animate_tab_swaps: bool,
}

impl UserPrefs {
    pub fn new(
        display_preference: DisplayPreference,
        default_asset: AssetType,
        animate_tab_swaps: bool,
    ) -> Self {
        Self {
            display_preference,
            default_asset,
            animate_tab_swaps,
        }
    }

    /// Reads `DEFAULT_ASSET` ("BTC", "ether", ...) and `ANIMATE_TAB_SWAPS`
    /// on top of [`DisplayPreference::from_env`].
    pub fn from_env() -> Self {
        let default_asset = match env::var("DEFAULT_ASSET") {
            Ok(val) => val.parse().unwrap_or_else(|_| {
                warn!("ignoring unknown DEFAULT_ASSET {val:?}");
                AssetType::default()
            }),
            Err(_) => AssetType::default(),
        };

        Self {
            display_preference: DisplayPreference::from_env(),
            default_asset,
            animate_tab_swaps: env_flag("ANIMATE_TAB_SWAPS").unwrap_or(true),
        }
    }

    pub fn display_preference(&self) -> &DisplayPreference {
        &self.display_preference
    }

    pub fn default_asset(&self) -> AssetType {
        self.default_asset
    }

    pub fn animate_tab_swaps(&self) -> bool {
        self.animate_tab_swaps
    }

    pub fn with_default_asset(mut self, asset: AssetType) -> Self {
        self.default_asset = asset;
        self
    }

    pub fn with_animate_tab_swaps(mut self, animate: bool) -> Self {
        self.animate_tab_swaps = animate;
        self
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fiat_currency::FiatCurrency;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const VARS: [&str; 5] = [
        "CRYPTO_ONLY",
        "FIAT_CURRENCY",
        "DISPLAY_AS_FIAT",
        "DEFAULT_ASSET",
        "ANIMATE_TAB_SWAPS",
    ];

    fn with_env(vars: &[(&str, &str)], test: impl FnOnce()) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        for name in VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }
        test();
        for name in VARS {
            env::remove_var(name);
        }
    }

    #[test]
    fn defaults_without_env() {
        with_env(&[], || {
            let prefs = UserPrefs::from_env();
            assert_eq!(prefs.default_asset(), AssetType::Bitcoin);
            assert!(prefs.animate_tab_swaps());
            assert_eq!(
                *prefs.display_preference(),
                DisplayPreference::FiatEnabled {
                    fiat: FiatCurrency::USD,
                    display_as_fiat: true,
                }
            );
        });
    }

    #[test]
    fn reads_env_overrides() {
        with_env(
            &[
                ("FIAT_CURRENCY", "eur"),
                ("DISPLAY_AS_FIAT", "0"),
                ("DEFAULT_ASSET", "ETH"),
                ("ANIMATE_TAB_SWAPS", "false"),
            ],
            || {
                let prefs = UserPrefs::from_env();
                assert_eq!(prefs.default_asset(), AssetType::Ether);
                assert!(!prefs.animate_tab_swaps());
                assert_eq!(prefs.display_preference().fiat(), Some(FiatCurrency::EUR));
            },
        );
    }

    #[test]
    fn crypto_only_wins() {
        with_env(&[("CRYPTO_ONLY", "TRUE"), ("FIAT_CURRENCY", "GBP")], || {
            assert!(DisplayPreference::from_env().is_crypto_only());
        });
    }

    #[test]
    fn unknown_default_asset_falls_back() {
        with_env(&[("DEFAULT_ASSET", "doge")], || {
            assert_eq!(UserPrefs::from_env().default_asset(), AssetType::Bitcoin);
        });
    }

    #[test]
    fn serializes_round_trip_through_json() {
        let prefs = UserPrefs::new(DisplayPreference::CryptoOnly, AssetType::Stellar, false);
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(serde_json::from_str::<UserPrefs>(&json).unwrap(), prefs);
    }
}
