use egui::{Context, Visuals, Style, Color32, Rounding, Stroke, FontId, FontFamily, TextStyle};
use std::collections::BTreeMap;

/// Theme configuration
pub struct Theme {
    pub dark_mode: bool,
}

impl Theme {
    pub fn dark() -> Self {
        Self { dark_mode: true }
    }

    pub fn light() -> Self {
        Self { dark_mode: false }
    }

    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Apply the storefront theme
pub fn apply_theme(ctx: &Context, theme: &Theme) {
    let mut style = Style::default();
    let palette = Palette::for_theme(theme);
    let mut visuals = if theme.dark_mode { Visuals::dark() } else { Visuals::light() };

    visuals.window_fill = palette.panel_bg;
    visuals.panel_fill = palette.panel_bg;
    visuals.extreme_bg_color = palette.bg;
    visuals.faint_bg_color = palette.widget_bg;

    let widgets = [
        (&mut visuals.widgets.noninteractive, palette.widget_bg, palette.border),
        (&mut visuals.widgets.inactive, palette.widget_bg, palette.border),
        (&mut visuals.widgets.hovered, palette.hover, palette.border),
        (&mut visuals.widgets.active, palette.active, accent_color()),
    ];
    for (widget, fill, stroke) in widgets {
        widget.bg_fill = fill;
        widget.weak_bg_fill = fill;
        widget.bg_stroke = Stroke::new(1.0, stroke);
        widget.fg_stroke = Stroke::new(1.0, palette.text);
        widget.rounding = Rounding::same(4.0);
    }

    visuals.selection.bg_fill = accent_color().linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, accent_color());
    visuals.hyperlink_color = accent_color();

    visuals.window_shadow.extrusion = 8.0;
    visuals.popup_shadow.extrusion = 4.0;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 4.0);
    style.spacing.menu_margin = egui::Margin::same(8.0);

    let mut font_sizes = BTreeMap::new();
    font_sizes.insert(TextStyle::Small, FontId::new(11.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Body, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Button, FontId::new(14.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Heading, FontId::new(22.0, FontFamily::Proportional));
    font_sizes.insert(TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace));
    style.text_styles = font_sizes;

    ctx.set_style(style);
    ctx.set_visuals(visuals);
}

struct Palette {
    bg: Color32,
    panel_bg: Color32,
    widget_bg: Color32,
    hover: Color32,
    active: Color32,
    border: Color32,
    text: Color32,
}

impl Palette {
    fn for_theme(theme: &Theme) -> Self {
        if theme.dark_mode {
            Self {
                bg: Color32::from_rgb(23, 23, 23),
                panel_bg: Color32::from_rgb(31, 31, 31),
                widget_bg: Color32::from_rgb(40, 40, 40),
                hover: Color32::from_rgb(50, 50, 50),
                active: Color32::from_rgb(60, 60, 60),
                border: Color32::from_rgb(70, 70, 70),
                text: Color32::from_rgb(220, 220, 220),
            }
        } else {
            Self {
                bg: Color32::from_rgb(250, 250, 250),
                panel_bg: Color32::from_rgb(244, 244, 244),
                widget_bg: Color32::from_rgb(232, 232, 232),
                hover: Color32::from_rgb(220, 220, 220),
                active: Color32::from_rgb(205, 205, 205),
                border: Color32::from_rgb(190, 190, 190),
                text: Color32::from_rgb(30, 30, 30),
            }
        }
    }
}

/// Accent color used for links and selection
pub fn accent_color() -> Color32 {
    Color32::from_rgb(100, 150, 250)
}

/// Color for prices
pub fn price_color() -> Color32 {
    Color32::from_rgb(80, 190, 120)
}

/// Color for "not found" and empty states
pub fn muted_color() -> Color32 {
    Color32::from_rgb(150, 150, 150)
}

/// Color for error banners
pub fn error_color() -> Color32 {
    Color32::from_rgb(230, 80, 80)
}

/// Stable placeholder color for a product thumbnail
pub fn placeholder_color(seed: &str) -> Color32 {
    let hash = seed
        .bytes()
        .fold(2166136261u32, |h, b| (h ^ b as u32).wrapping_mul(16777619));
    let [r, g, b, _] = hash.to_le_bytes();
    Color32::from_rgb(60 + r / 2, 60 + g / 2, 60 + b / 2)
}
