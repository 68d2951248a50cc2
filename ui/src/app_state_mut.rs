//! Defines the shared, mutable state for the wallet shell.

use crate::components::asset_tab_bar::SignalTabBar;
use crate::components::asset_tab_bar::TabBarModel;
use crate::screens::asset_summary::AssetSummaryScreen;
use crate::screens::asset_summary::ScreenView;
use crate::tabs::AssetDelegate;
use crate::tabs::AssetEvent;
use crate::tabs::GestureId;
use crate::tabs::TabViewController;
use crate::tabs::Transition;
use api::AssetType;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type ShellController = TabViewController<AssetSummaryScreen, SignalTabBar>;

/// Provided as a Dioxus context by the shell.
///
/// The controller lives behind `Rc<RefCell<_>>`; everything the view reads is
/// a `Signal` so controller commands trigger re-renders.
#[derive(Clone)]
pub struct AppStateMut {
    pub controller: Rc<RefCell<ShellController>>,
    pub tab_bar: Signal<TabBarModel>,
    pub views: Rc<Vec<ScreenView>>,
    /// The animated swap the content area is cross-fading, if any.
    pub transition: Signal<Option<Transition>>,
    pub selector_open: Signal<bool>,
    /// Tap gesture that closes the selector while it is open.
    pub dismiss_gesture: Signal<Option<GestureId>>,
    pub last_event: Signal<Option<AssetEvent>>,
    /// Kept alive here; the controller only holds a weak reference.
    pub delegate: Rc<ShellDelegate>,
}

impl PartialEq for AppStateMut {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

/// Routes delegate notifications into shell signals.
pub struct ShellDelegate {
    pub selector_open: Signal<bool>,
    pub last_event: Signal<Option<AssetEvent>>,
}

impl ShellDelegate {
    fn record(&self, event: AssetEvent) {
        let mut last_event = self.last_event;
        last_event.set(Some(event));
    }
}

impl AssetDelegate for ShellDelegate {
    fn did_set_asset_type(&self, asset: AssetType) {
        self.record(AssetEvent::DidSetAssetType(asset));
    }

    fn selector_button_clicked(&self) {
        let mut selector_open = self.selector_open;
        selector_open.set(true);
        self.record(AssetEvent::SelectorButtonClicked);
    }

    fn qr_code_button_clicked(&self) {
        self.record(AssetEvent::QrCodeButtonClicked);
    }
}
