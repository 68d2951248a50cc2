//=============================================================================
// File: src/screens/asset_summary.rs
//=============================================================================
use crate::tabs::Screen;
use api::prefs::display_preference::DisplayPreference;
use api::AssetType;
use api::RateMap;
use dioxus::prelude::*;

/// The reactive handles a rendered asset screen reads from.
#[derive(Clone, Copy, PartialEq)]
pub struct ScreenView {
    pub asset: AssetType,
    pub mounted: Signal<bool>,
    pub rate_line: Signal<String>,
}

impl ScreenView {
    /// Must be called from within a Dioxus scope.
    pub fn new(asset: AssetType) -> Self {
        Self {
            asset,
            mounted: Signal::new(false),
            rate_line: Signal::new(asset.symbol().to_string()),
        }
    }
}

/// Placeholder asset screen: publishes its mount state and rate line
/// through the signals in its [`ScreenView`].
pub struct AssetSummaryScreen {
    view: ScreenView,
    preference: DisplayPreference,
}

impl AssetSummaryScreen {
    pub fn new(view: ScreenView, preference: DisplayPreference) -> Self {
        Self {
            view,
            preference,
        }
    }
}

impl Screen for AssetSummaryScreen {
    fn mount(&mut self) {
        self.view.mounted.set(true);
    }

    fn unmount(&mut self) {
        self.view.mounted.set(false);
    }

    fn reload_symbols(&mut self, rates: &RateMap) {
        self.view
            .rate_line
            .set(rate_line(self.view.asset, rates, &self.preference));
    }
}

/// The headline price text for `asset`.
pub fn rate_line(asset: AssetType, rates: &RateMap, preference: &DisplayPreference) -> String {
    let DisplayPreference::FiatEnabled {
        fiat,
        display_as_fiat,
    } = *preference
    else {
        return asset.symbol().to_string();
    };

    let one_coin = 10_i128.pow(u32::from(asset.decimals()));
    match rates.convert(asset, one_coin) {
        Some(value) if value.currency() == fiat => {
            let price = if display_as_fiat {
                value.to_string_with_symbol()
            } else {
                value.to_string_with_code()
            };
            format!("1 {} = {}", asset.symbol(), price)
        }
        _ => format!("1 {} = -- {}", asset.symbol(), fiat.code()),
    }
}

#[component]
pub fn AssetSummary(view: ScreenView, class: String) -> Element {
    let rate_line = view.rate_line.read().clone();
    rsx! {
        article {
            class: "{class}",
            h3 {
                "{view.asset.name()}"
            }
            p {
                "{rate_line}"
            }
        }
    }
}
