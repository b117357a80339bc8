//! Catalog listing: search, one page of cards, pager

use egui::{RichText, ScrollArea, Ui};

use shop_core::{Catalog, CatalogIntent, CatalogView};
use crate::components::{labeled_button, product_card, SearchBar};
use crate::theme::muted_color;
use crate::widget_utils::{product_card_id, KeyedScrollArea, WidgetKey, WidgetScope};
use crate::UiAction;

pub const NO_PRODUCTS: &str = "No products available";

const PAGER_HEIGHT: f32 = 48.0;

/// Stateful wrapper around the search box and tag chips of the listing
pub struct CatalogPanel {
    search: SearchBar,
    tags: Vec<String>,
}

impl CatalogPanel {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            search: SearchBar::new(),
            tags: catalog.tags(),
        }
    }

    /// Forget the typed query; called whenever the listing is remounted
    pub fn reset(&mut self) {
        self.search.reset();
    }

    pub fn search(&self) -> &SearchBar {
        &self.search
    }

    /// Draw the listing and collect the actions the user took this frame
    pub fn ui(&mut self, ui: &mut Ui, view: &CatalogView) -> Vec<UiAction> {
        let mut actions = Vec::new();

        if let Some(intent) = self.search.ui(ui) {
            actions.push(UiAction::Catalog(intent));
        }
        if let Some(intent) = self.search.tag_chips(ui, &self.tags, view.query()) {
            actions.push(UiAction::Catalog(intent));
        }

        ui.add_space(4.0);
        ui.label(RichText::new(caption(view)).small().color(muted_color()));
        ui.separator();

        ScrollArea::vertical()
            .keyed(&WidgetKey::scope(WidgetScope::CatalogCards))
            .max_height((ui.available_height() - PAGER_HEIGHT).max(0.0))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if view.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(NO_PRODUCTS).color(muted_color()).size(16.0));
                    });
                    return;
                }

                for product in view.visible_products() {
                    ui.push_id(product_card_id(&product.id), |ui| {
                        if let Some(action) = product_card(ui, product) {
                            actions.push(action);
                        }
                    });
                }
            });

        actions.extend(pager(ui, view));
        actions
    }
}

/// Previous / page indicator / Next
fn pager(ui: &mut Ui, view: &CatalogView) -> Option<UiAction> {
    let mut action = None;
    let info = view.page_info();

    ui.separator();
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - 320.0) / 2.0).max(0.0));

        if labeled_button(ui, "Previous", view.can_retreat()) {
            action = Some(UiAction::Catalog(CatalogIntent::PageRetreated));
        }
        ui.label(format!("Page {} of {}", info.page, info.page_count));
        if labeled_button(ui, "Next", view.can_advance()) {
            action = Some(UiAction::Catalog(CatalogIntent::PageAdvanced));
        }
    });

    action
}

/// "Showing 11-20 of 25 products tagged Shoes"
pub fn caption(view: &CatalogView) -> String {
    let info = view.page_info();
    let range = if info.total == 0 {
        "Showing 0 of 0 products".to_string()
    } else {
        format!("Showing {}-{} of {} products", info.first, info.last, info.total)
    };

    match view.query() {
        Some(query) => format!("{} tagged \"{}\"", range, query),
        None => range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{Product, ProductId, Tag};

    fn catalog(count: u64) -> Catalog {
        let products = (1..=count)
            .map(|id| Product {
                id: ProductId::from(id),
                name: format!("Item {}", id),
                price: 10.0,
                image_url: String::new(),
                tags: vec![Tag::new(if id % 2 == 0 { "Shoes" } else { "Bags" })],
                description: None,
            })
            .collect();
        Catalog::new(products).unwrap()
    }

    #[test]
    fn test_caption_for_pages() {
        let mut view = CatalogView::new(catalog(25));
        assert_eq!(caption(&view), "Showing 1-10 of 25 products");

        view.advance_page();
        view.advance_page();
        assert_eq!(caption(&view), "Showing 21-25 of 25 products");
    }

    #[test]
    fn test_caption_with_query() {
        let mut view = CatalogView::new(catalog(6));
        view.apply_filter(Some("shoes"));
        assert_eq!(caption(&view), "Showing 1-3 of 3 products tagged \"shoes\"");

        view.apply_filter(Some("hats"));
        assert_eq!(caption(&view), "Showing 0 of 0 products tagged \"hats\"");
    }

    #[test]
    fn test_panel_collects_known_tags() {
        let panel = CatalogPanel::new(&catalog(4));
        assert_eq!(panel.tags, vec!["Bags", "Shoes"]);
        assert_eq!(panel.search().text(), "");
    }
}
