//! Single product lookup for the detail route

use tracing::debug;

use crate::catalog::Catalog;
use crate::product::{Product, ProductId};

/// What the detail route shows
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Found(Product),
    NotFound(ProductId),
}

impl DetailView {
    /// Resolve `id` against the full, unfiltered catalog
    pub fn lookup(catalog: &Catalog, id: &ProductId) -> Self {
        match catalog.lookup(id) {
            Some(product) => DetailView::Found(product.clone()),
            None => {
                debug!(%id, "product not found");
                DetailView::NotFound(id.clone())
            }
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            DetailView::Found(product) => Some(product),
            DetailView::NotFound(_) => None,
        }
    }
}
