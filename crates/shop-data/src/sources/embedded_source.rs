//! Sample catalog compiled into the binary

use shop_core::{Product, ProductSource};

use super::json_source::parse_products;

const SAMPLE_PRODUCTS: &str = include_str!("../../data/products.json");

/// The bundled sample catalog, used when no product file is given
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    pub fn new() -> Self {
        Self
    }
}

impl ProductSource for EmbeddedSource {
    fn load(&self) -> anyhow::Result<Vec<Product>> {
        Ok(parse_products(SAMPLE_PRODUCTS)?)
    }

    fn source_name(&self) -> &str {
        "sample catalog"
    }
}
