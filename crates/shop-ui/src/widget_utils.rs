//! Stable widget keys
//!
//! Product cards and scroll areas are keyed by stable ids built from product
//! identifiers, so egui keeps per-widget state attached to the right product
//! when a page or filter changes.

use egui::{Grid, Id, ScrollArea};

use shop_core::ProductId;

/// Areas of the storefront that carry keyed widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetScope {
    /// Scroll area holding the catalog cards
    CatalogCards,
    ProductCard,
    /// Field grid of the detail view
    DetailFields,
}

impl WidgetScope {
    fn prefix(self) -> &'static str {
        match self {
            WidgetScope::CatalogCards => "catalog/cards",
            WidgetScope::ProductCard => "catalog/card",
            WidgetScope::DetailFields => "detail/fields",
        }
    }
}

/// Slash-separated key of one widget, e.g. `catalog/card/12`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetKey {
    path: String,
}

impl WidgetKey {
    pub fn scope(scope: WidgetScope) -> Self {
        Self { path: scope.prefix().to_string() }
    }

    /// Key a widget that belongs to one product
    pub fn for_product(scope: WidgetScope, id: &ProductId) -> Self {
        Self { path: format!("{}/{}", scope.prefix(), id) }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn id(&self) -> Id {
        Id::new(&self.path)
    }
}

/// Id for the card of a product
pub fn product_card_id(id: &ProductId) -> Id {
    WidgetKey::for_product(WidgetScope::ProductCard, id).id()
}

pub trait KeyedScrollArea {
    fn keyed(self, key: &WidgetKey) -> Self;
}

impl KeyedScrollArea for ScrollArea {
    fn keyed(self, key: &WidgetKey) -> Self {
        self.id_source(key.path())
    }
}

pub trait KeyedGrid {
    fn keyed(key: &WidgetKey) -> Self;
}

impl KeyedGrid for Grid {
    fn keyed(key: &WidgetKey) -> Self {
        Grid::new(key.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_paths() {
        assert_eq!(WidgetKey::scope(WidgetScope::CatalogCards).path(), "catalog/cards");
        assert_eq!(
            WidgetKey::for_product(WidgetScope::DetailFields, &ProductId::new("sku-4")).path(),
            "detail/fields/sku-4"
        );
    }

    #[test]
    fn test_product_card_id_follows_product() {
        let seven = ProductId::from(7);
        assert_eq!(product_card_id(&seven), product_card_id(&ProductId::new("7")));
        assert_ne!(product_card_id(&seven), product_card_id(&ProductId::from(8)));
        assert_ne!(
            product_card_id(&seven),
            WidgetKey::for_product(WidgetScope::DetailFields, &seven).id()
        );
    }
}
