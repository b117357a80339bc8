//! Tag search control

use egui::{Key, TextEdit, Ui};

use shop_core::CatalogIntent;
use super::button::labeled_button;

/// Free-text tag search. Emits a filter intent when submitted.
#[derive(Default)]
pub struct SearchBar {
    text: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text without submitting it
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Forget typed text, e.g. when the listing is remounted
    pub fn reset(&mut self) {
        self.text.clear();
    }

    /// Intent for submitting the current text
    pub fn submit(&self) -> CatalogIntent {
        CatalogIntent::filter(&self.text)
    }

    /// Clear the text and emit the matching empty-query intent
    pub fn clear(&mut self) -> CatalogIntent {
        self.text.clear();
        CatalogIntent::FilterChanged(None)
    }

    pub fn ui(&mut self, ui: &mut Ui) -> Option<CatalogIntent> {
        let mut intent = None;

        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.text)
                    .hint_text("Search by tag, e.g. Shoes")
                    .desired_width(260.0),
            );
            let entered = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

            if labeled_button(ui, "Search", true) || entered {
                intent = Some(self.submit());
            }
            if labeled_button(ui, "Clear", !self.text.is_empty()) {
                intent = Some(self.clear());
            }
        });

        intent
    }

    /// Quick-filter chips for the known tags. Selecting a chip fills the box and submits.
    pub fn tag_chips(&mut self, ui: &mut Ui, tags: &[String], active: Option<&str>) -> Option<CatalogIntent> {
        let mut intent = None;

        ui.horizontal_wrapped(|ui| {
            for tag in tags {
                let selected = active.is_some_and(|a| a.to_lowercase() == tag.to_lowercase());
                if ui.selectable_label(selected, tag.as_str()).clicked() {
                    intent = Some(if selected {
                        self.clear()
                    } else {
                        self.set_text(tag.as_str());
                        self.submit()
                    });
                }
            }
        });

        intent
    }
}
