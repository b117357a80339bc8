use egui::{CentralPanel, Context, RichText, TopBottomPanel};

use shop_core::{Route, Router};
use crate::theme::{accent_color, error_color, muted_color};
use crate::UiAction;

/// Shell configuration
pub struct ShellConfig {
    pub show_header: bool,
    pub store_name: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_header: true,
            store_name: "Storefront".to_string(),
        }
    }
}

/// Error message shown above the routed view
pub struct ErrorMessage {
    pub title: String,
    pub message: String,
}

/// Persistent frame around the routed views: header on top, routed content below
pub struct AppShell {
    config: ShellConfig,
    errors: Vec<ErrorMessage>,
}

impl AppShell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            errors: Vec::new(),
        }
    }

    pub fn push_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ErrorMessage {
            title: title.into(),
            message: message.into(),
        });
    }

    /// Render the header. Returns an action when the Home or Back link is used.
    pub fn header(&self, ctx: &Context, router: &Router, source_name: &str) -> Option<UiAction> {
        if !self.config.show_header {
            return None;
        }

        let mut action = None;

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(&self.config.store_name).strong().size(18.0).color(accent_color()));
                for (label, link_action) in header_links(router) {
                    ui.separator();
                    if ui.link(label).clicked() {
                        action = Some(link_action);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(router.current().path()).monospace().color(muted_color()));
                    ui.separator();
                    ui.label(RichText::new(source_name).small().color(muted_color()));
                });
            });
            ui.add_space(4.0);
        });

        action
    }

    /// Render the central panel: welcome heading, errors, then the routed view
    pub fn central_panel<R>(&mut self, ctx: &Context, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
        CentralPanel::default()
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| ui.heading("Welcome"));
                self.show_error_messages(ui);
                add_contents(ui)
            })
            .inner
    }

    fn show_error_messages(&mut self, ui: &mut egui::Ui) {
        let mut dismissed = None;

        for (idx, msg) in self.errors.iter().enumerate() {
            egui::Frame::none()
                .fill(error_color().linear_multiply(0.2))
                .stroke(egui::Stroke::new(1.0, error_color()))
                .rounding(4.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("⚠").color(error_color()));
                        ui.label(&msg.title);
                        ui.separator();
                        ui.label(&msg.message);
                        if ui.small_button("✕").clicked() {
                            dismissed = Some(idx);
                        }
                    });
                });
        }

        if let Some(idx) = dismissed {
            self.errors.remove(idx);
        }
    }
}

/// Links shown in the header: Home always, Back once there is somewhere to return to
pub fn header_links(router: &Router) -> Vec<(&'static str, UiAction)> {
    let mut links = vec![("Home", UiAction::Navigate(Route::Catalog))];
    if router.can_go_back() {
        links.push(("← Back", UiAction::Back));
    }
    links
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}
