//! User intents delivered to views

/// Intents understood by [`crate::CatalogView::update`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIntent {
    /// Search submitted; `None` clears the filter
    FilterChanged(Option<String>),
    /// Next page requested
    PageAdvanced,
    /// Previous page requested
    PageRetreated,
}

impl CatalogIntent {
    /// Build a filter intent from raw search text. Only empty text clears the
    /// filter; anything else is matched as typed.
    pub fn filter(text: &str) -> Self {
        if text.is_empty() {
            CatalogIntent::FilterChanged(None)
        } else {
            CatalogIntent::FilterChanged(Some(text.to_string()))
        }
    }
}
