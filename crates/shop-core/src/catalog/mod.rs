//! The read-only product catalog and the paginated view over it

mod view;

pub use view::{CatalogView, PageInfo, PAGE_LIMIT};

use std::sync::Arc;
use ahash::{AHashMap, AHashSet};
use thiserror::Error;

use crate::product::{Product, ProductId};

/// Errors raised while assembling a catalog
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
}

/// Shared handle to the immutable product list
///
/// Cloning is cheap; every view holds its own handle instead of reaching for
/// a global.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    products: Vec<Product>,
    index: AHashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, keeping source order. Ids must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = AHashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            if index.insert(product.id.clone(), idx).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self {
            inner: Arc::new(CatalogInner { products, index }),
        })
    }

    pub fn empty() -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                products: Vec::new(),
                index: AHashMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.products.is_empty()
    }

    /// Product at a position in source order
    pub fn get(&self, idx: usize) -> Option<&Product> {
        self.inner.products.get(idx)
    }

    /// Find a product by id
    pub fn lookup(&self, id: &ProductId) -> Option<&Product> {
        self.inner
            .index
            .get(id)
            .and_then(|&idx| self.inner.products.get(idx))
    }

    /// Positions of the products matching a tag query
    ///
    /// An empty query matches everything. Otherwise a product matches when
    /// one of its tag titles equals the query once both are lowercased.
    /// Whitespace is significant.
    pub fn matching(&self, query: Option<&str>) -> Vec<usize> {
        let key = match query.filter(|q| !q.is_empty()) {
            Some(q) => q.to_lowercase(),
            None => return (0..self.len()).collect(),
        };

        self.inner
            .products
            .iter()
            .enumerate()
            .filter(|(_, product)| product.has_tag_lowercase(&key))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Distinct tag titles in order of first appearance
    ///
    /// Titles differing only by case collapse to the first spelling seen.
    pub fn tags(&self) -> Vec<String> {
        let mut seen = AHashSet::new();
        let mut titles = Vec::new();

        for tag in self.inner.products.iter().flat_map(|p| p.tags.iter()) {
            if seen.insert(tag.title.to_lowercase()) {
                titles.push(tag.title.clone());
            }
        }

        titles
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("products", &self.len())
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{product, products};
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new(products(5)).unwrap();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.lookup(&ProductId::from(3)).unwrap().name, "Product 3");
        assert!(catalog.lookup(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![product(1, &[]), product(1, &[])]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(ProductId::from(1)));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = Catalog::new(products(4)).unwrap();

        assert_eq!(catalog.matching(None), vec![0, 1, 2, 3]);
        assert_eq!(catalog.matching(Some("")), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        let catalog = Catalog::new(vec![product(1, &["Shoes"]), product(2, &["Bags"])]).unwrap();

        assert!(catalog.matching(Some("   ")).is_empty());
        assert!(catalog.matching(Some(" shoes ")).is_empty());
        assert_eq!(catalog.matching(Some("sHoEs")), vec![0]);
    }

    #[test]
    fn test_query_matches_tag_exactly() {
        let catalog = Catalog::new(vec![
            product(1, &["Shoes"]),
            product(2, &["Bags"]),
            product(3, &["Shoes", "Sale"]),
            product(4, &["Shoelaces"]),
        ])
        .unwrap();

        assert_eq!(catalog.matching(Some("SHOES")), vec![0, 2]);
        assert_eq!(catalog.matching(Some("sale")), vec![2]);
        assert!(catalog.matching(Some("shoe")).is_empty());
    }

    #[test]
    fn test_distinct_tags_keep_first_spelling() {
        let catalog = Catalog::new(vec![
            product(1, &["Shoes", "Sale"]),
            product(2, &["shoes", "Bags"]),
        ])
        .unwrap();

        assert_eq!(catalog.tags(), vec!["Shoes", "Sale", "Bags"]);
    }
}
