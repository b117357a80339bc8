//! Product records as delivered by a product source

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};

/// Unique product identifier
///
/// Sources may key products with either JSON strings or integers; both are
/// normalised to their string form so `"7"` and `7` name the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => ProductId(s),
            RawId::Unsigned(n) => ProductId(n.to_string()),
            RawId::Signed(n) => ProductId(n.to_string()),
        })
    }
}

/// A tag attached to a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub title: String,
}

impl Tag {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Case-insensitive exact comparison against an already lowercased key
    pub fn matches_lowercase(&self, key: &str) -> bool {
        self.title.to_lowercase() == key
    }
}

/// One catalog product. Never mutated after loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,

    #[serde(rename = "imageUrl", default)]
    pub image_url: String,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    /// Whether any tag title equals `key` once both are lowercased
    pub fn has_tag_lowercase(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag.matches_lowercase(key))
    }

    /// Price formatted for display
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string_or_integer() {
        let text: ProductId = serde_json::from_str("\"sku-9\"").unwrap();
        let number: ProductId = serde_json::from_str("42").unwrap();
        let negative: ProductId = serde_json::from_str("-3").unwrap();

        assert_eq!(text.as_str(), "sku-9");
        assert_eq!(number, ProductId::from(42));
        assert_eq!(negative.to_string(), "-3");
    }

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "id": 1,
            "name": "Trail Runner",
            "price": 89.5,
            "imageUrl": "https://example.com/1.jpg",
            "tags": [{ "title": "Shoes" }]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.image_url, "https://example.com/1.jpg");
        assert_eq!(product.tags, vec![Tag::new("Shoes")]);
        assert!(product.description.is_none());
        assert_eq!(product.display_price(), "$89.50");
    }

    #[test]
    fn test_tag_match_is_exact_and_case_insensitive() {
        let product = Product {
            id: ProductId::new("1"),
            name: "Tote".to_string(),
            price: 20.0,
            image_url: String::new(),
            tags: vec![Tag::new("Bags"), Tag::new("Canvas")],
            description: None,
        };

        assert!(product.has_tag_lowercase("bags"));
        assert!(product.has_tag_lowercase("canvas"));
        assert!(!product.has_tag_lowercase("bag"));
        assert!(!product.has_tag_lowercase("shoes"));
    }
}
