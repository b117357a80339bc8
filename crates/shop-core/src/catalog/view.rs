//! Paginated, tag-filtered view over a catalog

use tracing::debug;

use super::Catalog;
use crate::events::CatalogIntent;
use crate::product::Product;

/// Number of products shown per page
pub const PAGE_LIMIT: usize = 10;

/// Summary of the current page for captions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// 1-based page number
    pub page: usize,
    pub page_count: usize,
    /// 1-based index of the first visible product, 0 when the page is empty
    pub first: usize,
    /// 1-based index of the last visible product, 0 when the page is empty
    pub last: usize,
    pub total: usize,
}

/// State of the catalog listing
///
/// `visible` is always `filtered[offset..offset + PAGE_LIMIT]`, clipped to the
/// filtered length. Every mutator re-derives it before returning.
pub struct CatalogView {
    catalog: Catalog,
    query: Option<String>,
    filtered: Vec<usize>,
    offset: usize,
    visible: Vec<usize>,
}

impl CatalogView {
    /// Mount a view on the first page of the unfiltered catalog
    pub fn new(catalog: Catalog) -> Self {
        let filtered = catalog.matching(None);
        let mut view = Self {
            catalog,
            query: None,
            filtered,
            offset: 0,
            visible: Vec::new(),
        };
        view.rederive();
        view
    }

    /// Apply one user intent
    pub fn update(&mut self, intent: CatalogIntent) {
        debug!(?intent, offset = self.offset, "catalog intent");
        match intent {
            CatalogIntent::FilterChanged(query) => self.apply_filter(query.as_deref()),
            CatalogIntent::PageAdvanced => self.advance_page(),
            CatalogIntent::PageRetreated => self.retreat_page(),
        }
    }

    /// Replace the active tag query and go back to the first page
    pub fn apply_filter(&mut self, query: Option<&str>) {
        self.query = query.filter(|q| !q.is_empty()).map(str::to_string);
        self.filtered = self.catalog.matching(self.query.as_deref());
        self.offset = 0;
        self.rederive();

        debug!(
            query = self.query.as_deref().unwrap_or(""),
            matches = self.filtered.len(),
            "filter applied"
        );
    }

    /// Move one page forward
    ///
    /// Past the end this yields an empty page rather than failing; the Next
    /// control is disabled before that can happen.
    pub fn advance_page(&mut self) {
        self.offset = self.offset.saturating_add(PAGE_LIMIT);
        self.rederive();
    }

    /// Move one page back, stopping at the first page
    pub fn retreat_page(&mut self) {
        self.offset = self.offset.saturating_sub(PAGE_LIMIT);
        self.rederive();
    }

    fn rederive(&mut self) {
        let start = self.offset.min(self.filtered.len());
        let end = self.offset.saturating_add(PAGE_LIMIT).min(self.filtered.len());
        self.visible = self.filtered[start..end].to_vec();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of products matching the active query
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Products on the current page, in catalog order
    pub fn visible_products(&self) -> impl Iterator<Item = &Product> + '_ {
        self.visible.iter().filter_map(|&idx| self.catalog.get(idx))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Whether the Previous control should be enabled
    pub fn can_retreat(&self) -> bool {
        self.offset != 0
    }

    /// Whether the Next control should be enabled
    pub fn can_advance(&self) -> bool {
        self.offset.saturating_add(PAGE_LIMIT) < self.filtered.len()
    }

    pub fn page_info(&self) -> PageInfo {
        let total = self.filtered.len();
        let (first, last) = if self.visible.is_empty() {
            (0, 0)
        } else {
            (self.offset + 1, self.offset + self.visible.len())
        };

        let page_count = total.div_ceil(PAGE_LIMIT).max(1);

        PageInfo {
            page: (self.offset / PAGE_LIMIT + 1).min(page_count),
            page_count,
            first,
            last,
            total,
        }
    }
}
