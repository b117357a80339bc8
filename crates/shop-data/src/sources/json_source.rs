//! JSON product file source

use std::path::PathBuf;
use tracing::{debug, info};

use shop_core::{Product, ProductSource};
use crate::DataError;

/// Products read from a JSON array on disk
pub struct JsonSource {
    path: PathBuf,
    name: String,
}

impl JsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("products.json")
            .to_string();

        Self { path, name }
    }
}

impl ProductSource for JsonSource {
    fn load(&self) -> anyhow::Result<Vec<Product>> {
        info!("Reading products from {:?}", self.path);
        let text = std::fs::read_to_string(&self.path).map_err(DataError::from)?;
        Ok(parse_products(&text)?)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// Parse and validate a JSON array of product records
pub fn parse_products(text: &str) -> Result<Vec<Product>, DataError> {
    let products: Vec<Product> = serde_json::from_str(text)?;

    for (index, product) in products.iter().enumerate() {
        validate(index, product)?;
    }

    debug!(count = products.len(), "parsed product records");
    Ok(products)
}

fn validate(index: usize, product: &Product) -> Result<(), DataError> {
    let invalid = |reason: &str| DataError::InvalidRecord {
        index,
        reason: reason.to_string(),
    };

    if product.id.as_str().trim().is_empty() {
        return Err(invalid("empty id"));
    }
    if product.name.trim().is_empty() {
        return Err(invalid("empty name"));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(invalid("price must be a non-negative number"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_array() {
        let products = parse_products(
            r#"[
                { "id": 1, "name": "Loafer", "price": 60, "imageUrl": "a.jpg", "tags": [{ "title": "Shoes" }] },
                { "id": "tote-2", "name": "Tote", "price": 25.5, "imageUrl": "b.jpg", "tags": [] }
            ]"#,
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id.as_str(), "1");
        assert_eq!(products[1].id.as_str(), "tote-2");
    }

    #[test]
    fn test_parse_rejects_bad_records() {
        let blank_name = r#"[{ "id": 1, "name": " ", "price": 1, "imageUrl": "" }]"#;
        let negative = r#"[{ "id": 1, "name": "A", "price": 1 }, { "id": 2, "name": "B", "price": -4 }]"#;

        assert!(matches!(
            parse_products(blank_name),
            Err(DataError::InvalidRecord { index: 0, .. })
        ));
        assert!(matches!(
            parse_products(negative),
            Err(DataError::InvalidRecord { index: 1, .. })
        ));
        assert!(matches!(parse_products("{}"), Err(DataError::Json(_))));
    }

    #[test]
    fn test_empty_array_is_valid() {
        assert!(parse_products("[]").unwrap().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "id": 5, "name": "Cap", "price": 15, "imageUrl": "c.jpg", "tags": [{{ "title": "Hats" }}] }}]"#
        )
        .unwrap();

        let source = JsonSource::new(file.path());
        let products = source.load().unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].tags[0].title, "Hats");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonSource::new("/definitely/not/here.json");
        let err = source.load().unwrap_err();

        assert!(matches!(err.downcast_ref::<DataError>(), Some(DataError::Io(_))));
        assert_eq!(source.source_name(), "here.json");
    }
}
