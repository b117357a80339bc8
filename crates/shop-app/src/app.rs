//! Application state and the eframe update loop

use eframe::egui::{self, Context};
use tracing::{debug, info};

use shop_core::{AppSettings, Catalog, CatalogIntent, CatalogView, DetailView, Route, RouteChange, Router};
use shop_ui::{
    detail_panel, shortcut_actions, AppShell, CatalogPanel, KeyPresses, ShellConfig, UiAction,
};

/// The storefront: one catalog, a router, and the view mounted for the current route
pub struct StorefrontApp {
    catalog: Catalog,
    source_name: String,
    router: Router,
    listing: CatalogView,
    panel: CatalogPanel,
    detail: Option<DetailView>,
    shell: AppShell,
}

impl StorefrontApp {
    pub fn new(catalog: Catalog, source_name: impl Into<String>, initial: Route, settings: &AppSettings) -> Self {
        let detail = match &initial {
            Route::Product(id) => Some(DetailView::lookup(&catalog, id)),
            Route::Catalog => None,
        };

        Self {
            listing: CatalogView::new(catalog.clone()),
            panel: CatalogPanel::new(&catalog),
            catalog,
            source_name: source_name.into(),
            router: Router::new(initial),
            detail,
            shell: AppShell::new(ShellConfig {
                show_header: settings.show_header,
                store_name: settings.window_title.clone(),
            }),
        }
    }

    pub fn shell_mut(&mut self) -> &mut AppShell {
        &mut self.shell
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn listing(&self) -> &CatalogView {
        &self.listing
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    /// Apply one user action
    ///
    /// Paging intents are checked against the listing as it is now, so a
    /// shortcut and a button firing in the same frame cannot step past a bound.
    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Catalog(CatalogIntent::PageAdvanced) if !self.listing.can_advance() => {
                debug!("ignoring page advance on the last page");
            }
            UiAction::Catalog(CatalogIntent::PageRetreated) if !self.listing.can_retreat() => {
                debug!("ignoring page retreat on the first page");
            }
            UiAction::Catalog(intent) => self.listing.update(intent),
            UiAction::Navigate(route) => {
                if let Some(change) = self.router.navigate(route) {
                    self.on_route_change(change);
                }
            }
            UiAction::Back => {
                if let Some(change) = self.router.back() {
                    self.on_route_change(change);
                }
            }
        }
    }

    fn on_route_change(&mut self, change: RouteChange) {
        info!("Route changed: {} -> {}", change.from, change.to);

        if change.enters_catalog() {
            // The listing is remounted: first page, no filter.
            self.listing = CatalogView::new(self.catalog.clone());
            self.panel.reset();
            debug!("catalog view remounted");
        }

        self.detail = match &change.to {
            Route::Product(id) => Some(DetailView::lookup(&self.catalog, id)),
            Route::Catalog => None,
        };
    }
}

impl eframe::App for StorefrontApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions = shortcut_actions(KeyPresses::read(ctx), self.router.current(), &self.listing);

        if let Some(action) = self.shell.header(ctx, &self.router, &self.source_name) {
            actions.push(action);
        }

        let Self { shell, panel, listing, detail, router, .. } = self;
        let routed = shell.central_panel(ctx, |ui| match (router.current(), detail.as_ref()) {
            (Route::Product(_), Some(detail)) => detail_panel(ui, detail).into_iter().collect::<Vec<_>>(),
            _ => panel.ui(ui, listing),
        });
        actions.extend(routed);

        for action in actions {
            self.apply(action);
        }
    }
}

/// Native window options
pub fn native_options(settings: &AppSettings) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([900.0, 760.0])
            .with_min_inner_size([480.0, 420.0]),
        default_theme: if settings.dark_mode { eframe::Theme::Dark } else { eframe::Theme::Light },
        persist_window: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{Product, ProductId, Tag};

    fn app(initial: Route) -> StorefrontApp {
        let products = (1..=25u64)
            .map(|id| Product {
                id: ProductId::from(id),
                name: format!("Item {}", id),
                price: 5.0,
                image_url: String::new(),
                tags: vec![Tag::new(if id <= 5 { "Shoes" } else { "Bags" })],
                description: None,
            })
            .collect();
        let catalog = Catalog::new(products).unwrap();
        StorefrontApp::new(catalog, "test", initial, &AppSettings::default())
    }

    #[test]
    fn test_catalog_intents_reach_listing() {
        let mut app = app(Route::Catalog);
        app.apply(UiAction::Catalog(CatalogIntent::PageAdvanced));
        assert_eq!(app.listing().offset(), 10);

        app.apply(UiAction::Catalog(CatalogIntent::FilterChanged(Some("shoes".into()))));
        assert_eq!(app.listing().offset(), 0);
        assert_eq!(app.listing().filtered_len(), 5);
    }

    #[test]
    fn test_same_frame_advances_stop_at_last_page() {
        let mut app = app(Route::Catalog);
        app.apply(UiAction::Catalog(CatalogIntent::PageAdvanced));
        assert_eq!(app.listing().offset(), 10);

        // Keyboard shortcut and Next button in one frame, both produced on page 2.
        for action in [
            UiAction::Catalog(CatalogIntent::PageAdvanced),
            UiAction::Catalog(CatalogIntent::PageAdvanced),
        ] {
            app.apply(action);
        }
        assert_eq!(app.listing().offset(), 20);
        assert_eq!(app.listing().visible_len(), 5);
    }

    #[test]
    fn test_action_sequences_keep_page_populated() {
        let mut app = app(Route::Catalog);
        let sequence = [
            CatalogIntent::PageRetreated,
            CatalogIntent::PageAdvanced,
            CatalogIntent::PageAdvanced,
            CatalogIntent::PageAdvanced,
            CatalogIntent::PageAdvanced,
            CatalogIntent::PageRetreated,
            CatalogIntent::PageRetreated,
            CatalogIntent::PageRetreated,
            CatalogIntent::PageRetreated,
        ];

        for (step, intent) in sequence.into_iter().cycle().take(40).enumerate() {
            app.apply(UiAction::Catalog(intent));
            assert!(!app.listing().is_empty(), "step {}", step);
            assert!(app.listing().offset() <= 20, "step {}", step);
        }
    }

    #[test]
    fn test_detail_route_and_back_remounts_listing() {
        let mut app = app(Route::Catalog);
        app.apply(UiAction::Catalog(CatalogIntent::FilterChanged(Some("bags".into()))));
        app.apply(UiAction::Catalog(CatalogIntent::PageAdvanced));

        app.apply(UiAction::Navigate(Route::Product(ProductId::from(12))));
        assert_eq!(app.detail().and_then(|d| d.product()).map(|p| p.id.as_str()), Some("12"));

        app.apply(UiAction::Back);
        assert_eq!(app.route(), &Route::Catalog);
        assert!(app.detail().is_none());
        assert_eq!(app.listing().offset(), 0);
        assert_eq!(app.listing().query(), None);
        assert_eq!(app.listing().filtered_len(), 25);
    }

    #[test]
    fn test_unknown_product_route_is_not_found() {
        let app = app(Route::Product(ProductId::new("999")));
        assert_eq!(app.detail(), Some(&DetailView::NotFound(ProductId::new("999"))));
    }
}
