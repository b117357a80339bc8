//! Application settings

/// Settings fixed at startup
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Whether to use dark mode
    pub dark_mode: bool,

    /// Whether to show the persistent header
    pub show_header: bool,

    /// Native window title
    pub window_title: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            show_header: true,
            window_title: "Storefront".to_string(),
        }
    }
}
