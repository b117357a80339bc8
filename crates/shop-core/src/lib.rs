//! Core functionality for the storefront
//!
//! This crate provides the product model, the read-only catalog, the
//! paginated catalog view and the client-side router.

pub mod catalog;
pub mod detail;
pub mod events;
pub mod navigation;
pub mod product;
pub mod state;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogError, CatalogView, PageInfo, PAGE_LIMIT};
pub use detail::DetailView;
pub use events::CatalogIntent;
pub use navigation::{Route, RouteChange, RouteError, Router};
pub use product::{Product, ProductId, Tag};
pub use state::AppSettings;

/// Source of the products loaded into a [`Catalog`] at startup
pub trait ProductSource {
    /// Load every product, in display order
    fn load(&self) -> anyhow::Result<Vec<Product>>;

    /// Human-readable name of the source, for logs and the header
    fn source_name(&self) -> &str;
}
