use egui::{Button, Response, RichText, Ui};

/// A labeled button that can be disabled. Returns true when clicked.
pub fn labeled_button(ui: &mut Ui, text: &str, enabled: bool) -> bool {
    labeled_button_response(ui, text, enabled).clicked()
}

pub fn labeled_button_response(ui: &mut Ui, text: &str, enabled: bool) -> Response {
    ui.add_enabled(enabled, Button::new(RichText::new(text)).min_size(egui::vec2(96.0, 28.0)))
}
