//! Product summary card

use egui::{Align2, Frame, RichText, Sense, Ui};

use shop_core::{Product, Route};
use crate::theme::{placeholder_color, price_color};
use crate::UiAction;

const THUMBNAIL_SIZE: f32 = 64.0;

/// Render one product summary. Clicking the name or "View" opens its detail route.
pub fn product_card(ui: &mut Ui, product: &Product) -> Option<UiAction> {
    let mut action = None;

    Frame::group(ui.style())
        .rounding(6.0)
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                thumbnail(ui, product);

                ui.vertical(|ui| {
                    if ui.link(RichText::new(&product.name).strong().size(16.0)).clicked() {
                        action = Some(open(product));
                    }
                    ui.label(RichText::new(product.display_price()).color(price_color()));
                    tag_row(ui, product);
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("View").clicked() {
                        action = Some(open(product));
                    }
                });
            });
        });

    action
}

fn open(product: &Product) -> UiAction {
    UiAction::Navigate(Route::Product(product.id.clone()))
}

/// Square placeholder standing in for the product image
pub fn thumbnail(ui: &mut Ui, product: &Product) {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE), Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, placeholder_color(product.id.as_str()));

    let initial = product.name.chars().next().unwrap_or('?').to_uppercase().to_string();
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(28.0),
        egui::Color32::WHITE,
    );

    if !product.image_url.is_empty() {
        response.on_hover_text(&product.image_url);
    }
}

/// Tag titles as small chips
pub fn tag_row(ui: &mut Ui, product: &Product) {
    ui.horizontal_wrapped(|ui| {
        for tag in &product.tags {
            ui.label(RichText::new(format!("#{}", tag.title)).small().weak());
        }
    });
}
