#![allow(non_snake_case)]

use crate::tabs::GestureId;
use crate::tabs::TabBar;
use api::AssetType;
use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    pub asset: AssetType,
    pub badge: u32,
}

/// What the tab bar widget draws.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TabBarModel {
    pub items: Vec<TabItem>,
    pub selected: usize,
    pub gestures: Vec<GestureId>,
}

impl TabBarModel {
    pub fn new(assets: impl IntoIterator<Item = AssetType>) -> Self {
        Self {
            items: assets
                .into_iter()
                .map(|asset| TabItem { asset, badge: 0 })
                .collect(),
            ..Default::default()
        }
    }
}

/// [`TabBar`] backed by a signal, so controller commands re-render the widget.
#[derive(Clone, Copy)]
pub struct SignalTabBar {
    model: Signal<TabBarModel>,
}

impl SignalTabBar {
    pub fn new(model: Signal<TabBarModel>) -> Self {
        Self { model }
    }
}

impl TabBar for SignalTabBar {
    fn set_selected(&mut self, index: usize) {
        self.model.write().selected = index;
    }

    fn set_badge(&mut self, index: usize, count: u32) {
        if let Some(item) = self.model.write().items.get_mut(index) {
            item.badge = count;
        }
    }

    fn attach_gesture(&mut self, id: GestureId) {
        self.model.write().gestures.push(id);
    }

    fn detach_gesture(&mut self, id: GestureId) {
        self.model.write().gestures.retain(|g| *g != id);
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AssetTabBarProps {
    pub model: Signal<TabBarModel>,
    /// Called with the index of the tapped item.
    pub on_select: EventHandler<usize>,
    /// Called once per attached gesture on any tap on the bar.
    pub on_gesture: EventHandler<GestureId>,
}

/// The asset tab strip with per-tab badges.
#[component]
pub fn AssetTabBar(props: AssetTabBarProps) -> Element {
    let model = props.model.read().clone();
    let gestures = model.gestures.clone();

    rsx! {
        nav {
            class: "tab-menu",
            onclick: move |_| {
                for id in gestures.iter().copied() {
                    props.on_gesture.call(id);
                }
            },
            ul {
                for (index, item) in model.items.into_iter().enumerate() {
                    li {
                        key: "{item.asset.symbol()}",
                        a {
                            href: "#",
                            class: {
                                if index == model.selected { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                if index == model.selected { "page" } else { "false" }
                            },
                            onclick: move |event: MouseEvent| {
                                event.prevent_default();
                                props.on_select.call(index);
                            },
                            "{item.asset.name()}"
                            if item.badge > 0 {
                                span {
                                    class: "badge",
                                    "{item.badge}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
