//! Product sources for the storefront

pub mod config;
pub mod sources;

use thiserror::Error;
use tracing::info;

use shop_core::{Catalog, CatalogError, ProductSource};

// Re-exports
pub use config::SourceConfig;
pub use sources::{EmbeddedSource, JsonSource};

/// Errors that can occur while loading products
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid product at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Load every product from `source` into a catalog
pub fn load_catalog(source: &dyn ProductSource) -> anyhow::Result<Catalog> {
    let products = source.load()?;
    let catalog = Catalog::new(products).map_err(DataError::from)?;

    info!(
        source = source.source_name(),
        products = catalog.len(),
        tags = catalog.tags().len(),
        "catalog loaded"
    );

    Ok(catalog)
}
