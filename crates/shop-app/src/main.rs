//! Main application entry point

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use shop_core::{AppSettings, Catalog, Route};
use shop_data::{load_catalog, SourceConfig};
use shop_ui::{apply_theme, Theme};

mod app;

use app::StorefrontApp;

/// Browse a product catalog
#[derive(Parser, Debug)]
#[command(name = "storefront", version, about)]
struct Args {
    /// JSON file with the products to show (defaults to the bundled sample catalog)
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Path to open first, e.g. "/" or "/product/3"
    #[arg(long, default_value = "/")]
    route: String,

    /// Use the light theme
    #[arg(long)]
    light: bool,

    /// Hide the header bar
    #[arg(long)]
    no_header: bool,
}

impl Args {
    fn settings(&self) -> AppSettings {
        AppSettings {
            dark_mode: !self.light,
            show_header: !self.no_header,
            ..AppSettings::default()
        }
    }

    fn initial_route(&self) -> Route {
        Route::parse(&self.route).unwrap_or_else(|e| {
            warn!("{}; opening the catalog instead", e);
            Route::Catalog
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = args.settings();
    let initial = args.initial_route();

    info!("Starting storefront at {}", initial);

    let source = SourceConfig::from_path(args.data.clone()).open();
    let source_name = source.source_name().to_string();
    let loaded = load_catalog(source.as_ref())
        .with_context(|| format!("Failed to load products from {}", source_name));

    let (catalog, load_error) = match loaded {
        Ok(catalog) => (catalog, None),
        Err(e) => {
            error!("{:#}", e);
            (Catalog::empty(), Some(e))
        }
    };

    let mut app = StorefrontApp::new(catalog, source_name, initial, &settings);
    if let Some(e) = load_error {
        app.shell_mut().push_error("Failed to load products", format!("{:#}", e));
    }

    let theme = Theme::from_dark_mode(settings.dark_mode);
    eframe::run_native(
        &settings.window_title,
        app::native_options(&settings),
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx, &theme);
            Box::new(app) as Box<dyn eframe::App>
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::ProductId;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["storefront"]);
        let settings = args.settings();

        assert!(args.data.is_none());
        assert_eq!(args.initial_route(), Route::Catalog);
        assert!(settings.dark_mode);
        assert!(settings.show_header);
    }

    #[test]
    fn test_args_initial_route() {
        let args = Args::parse_from(["storefront", "--route", "/product/3", "--light"]);
        assert_eq!(args.initial_route(), Route::Product(ProductId::from(3)));
        assert!(!args.settings().dark_mode);

        let unmatched = Args::parse_from(["storefront", "--route", "/checkout"]);
        assert_eq!(unmatched.initial_route(), Route::Catalog);
    }
}
