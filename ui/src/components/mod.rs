//! Shared Dioxus components for the wallet shell.
pub mod asset_tab_bar;
