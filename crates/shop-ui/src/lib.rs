//! User interface components for the storefront
//!
//! This crate provides the egui-based header, catalog listing, product
//! detail page and the small presentational widgets they are built from.

pub mod catalog_panel;
pub mod components;
pub mod detail_panel;
pub mod input;
pub mod shell;
pub mod theme;
pub mod widget_utils;

use shop_core::{CatalogIntent, Route};

/// Re-export commonly used types
pub use catalog_panel::CatalogPanel;
pub use detail_panel::detail_panel;
pub use input::{shortcut_actions, KeyPresses};
pub use shell::{AppShell, ShellConfig};
pub use theme::{Theme, apply_theme};
pub use widget_utils::{product_card_id, KeyedGrid, KeyedScrollArea, WidgetKey, WidgetScope};

/// Something the user did this frame, reported upward to the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Forwarded to the catalog view
    Catalog(CatalogIntent),
    /// Go to a route
    Navigate(Route),
    /// Return to the previous route
    Back,
}
