//! Single product page

use egui::{Grid, RichText, Ui};

use shop_core::{DetailView, Product};
use crate::components::card::{tag_row, thumbnail};
use crate::theme::{muted_color, price_color};
use crate::widget_utils::{KeyedGrid, WidgetKey, WidgetScope};
use crate::UiAction;

pub const NOT_FOUND: &str = "Product not found";

/// Draw the detail route. Returns the action taken, if any.
pub fn detail_panel(ui: &mut Ui, detail: &DetailView) -> Option<UiAction> {
    let mut action = None;

    if ui.link("← Back to catalog").clicked() {
        action = Some(UiAction::Back);
    }
    ui.separator();

    match detail {
        DetailView::Found(product) => product_details(ui, product),
        DetailView::NotFound(id) => {
            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                ui.heading(NOT_FOUND);
                ui.label(
                    RichText::new(format!("No product has the id \"{}\".", id))
                        .color(muted_color()),
                );
            });
        }
    }

    action
}

fn product_details(ui: &mut Ui, product: &Product) {
    ui.horizontal(|ui| {
        thumbnail(ui, product);
        ui.vertical(|ui| {
            ui.heading(&product.name);
            ui.label(RichText::new(product.display_price()).color(price_color()).size(18.0));
        });
    });
    ui.add_space(8.0);

    if let Some(description) = &product.description {
        ui.label(description);
        ui.add_space(8.0);
    }

    Grid::keyed(&WidgetKey::for_product(WidgetScope::DetailFields, &product.id))
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Id");
            ui.monospace(product.id.as_str());
            ui.end_row();

            ui.strong("Image");
            if product.image_url.is_empty() {
                ui.label(RichText::new("none").color(muted_color()));
            } else {
                ui.hyperlink_to(&product.image_url, &product.image_url);
            }
            ui.end_row();

            ui.strong("Tags");
            if product.tags.is_empty() {
                ui.label(RichText::new("none").color(muted_color()));
            } else {
                tag_row(ui, product);
            }
            ui.end_row();
        });
}
