//! Pagination, sorting and filter state for one list view.
//!
//! Filter edits land in a draft set and only take effect once applied, so a
//! half-typed filter never reaches the backend.

use payloads::{FilterValue, Filters, PageWindow, Sort, SortDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page_index: u32,
    page_size: u32,
    sort: Option<Sort>,
    applied_filters: Filters,
    draft_filters: Filters,
}

impl QueryState {
    pub fn new(page_size: u32, defaults: Filters) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            sort: None,
            applied_filters: defaults.clone(),
            draft_filters: defaults,
        }
    }

    /// Zero-based page index.
    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    /// One-based page number, as shown by pagination controls.
    pub fn current_page(&self) -> u32 {
        self.page_index + 1
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn applied_filters(&self) -> &Filters {
        &self.applied_filters
    }

    pub fn draft_filters(&self) -> &Filters {
        &self.draft_filters
    }

    pub fn window(&self) -> PageWindow {
        PageWindow {
            offset: u64::from(self.page_index) * u64::from(self.page_size),
            limit: self.page_size,
        }
    }

    /// Number of pages needed for `total` rows.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.page_size))
    }

    /// Jump to a one-based page. Pages past the end are left to the
    /// backend, which answers with an empty page.
    pub fn set_page(&mut self, page: u32) {
        self.page_index = page.max(1) - 1;
    }

    pub fn set_page_size(&mut self, page_size: u32, page: u32) {
        self.page_size = page_size.max(1);
        self.page_index = page.max(1) - 1;
    }

    /// Sorting keeps the current page.
    pub fn set_sort(
        &mut self,
        key: impl Into<String>,
        direction: SortDirection,
    ) {
        self.sort = Some(Sort {
            key: key.into(),
            direction,
        });
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn set_draft_filter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FilterValue>,
    ) {
        self.draft_filters.insert(name.into(), value.into());
    }

    pub fn apply_filters(&mut self) {
        self.applied_filters = self.draft_filters.clone();
        self.page_index = 0;
    }

    pub fn clear_filters(&mut self, defaults: Filters) {
        self.applied_filters = defaults.clone();
        self.draft_filters = defaults;
        self.page_index = 0;
    }

    /// Draft filters holding a value, for the "filters (n)" badge.
    pub fn active_filter_count(&self) -> usize {
        self.draft_filters
            .values()
            .filter(|value| !value.is_empty())
            .count()
    }

    pub fn has_pending_changes(&self) -> bool {
        self.draft_filters != self.applied_filters
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(crate::ListConfig::DEFAULT_PAGE_SIZE, Filters::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::DateRange;

    fn filters(entries: &[(&str, FilterValue)]) -> Filters {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn pages_are_one_based_at_the_edges() {
        let mut query = QueryState::new(10, Filters::new());
        query.set_page(3);
        assert_eq!(query.page_index(), 2);
        assert_eq!(query.current_page(), 3);
        assert_eq!(query.window(), PageWindow { offset: 20, limit: 10 });

        query.set_page(0);
        assert_eq!(query.page_index(), 0);
    }

    #[test]
    fn page_size_change_repositions() {
        let mut query = QueryState::new(10, Filters::new());
        query.set_page(5);
        query.set_page_size(25, 1);
        assert_eq!(query.page_size(), 25);
        assert_eq!(query.page_index(), 0);

        query.set_page_size(0, 2);
        assert_eq!(query.page_size(), 1);
        assert_eq!(query.page_index(), 1);
    }

    #[test]
    fn sort_does_not_reset_page() {
        let mut query = QueryState::new(10, Filters::new());
        query.set_page(4);
        query.set_sort("full_name", SortDirection::Desc);
        assert_eq!(query.page_index(), 3);
        assert_eq!(
            query.sort(),
            Some(&Sort {
                key: "full_name".into(),
                direction: SortDirection::Desc
            })
        );
        query.clear_sort();
        assert_eq!(query.sort(), None);
    }

    #[test]
    fn drafts_stay_out_of_applied_filters() {
        let mut query = QueryState::new(10, Filters::new());
        query.set_draft_filter("full_name", "Ana");
        query.set_draft_filter("enabled", true);
        assert!(query.applied_filters().is_empty());
        assert!(query.has_pending_changes());
    }

    #[test]
    fn apply_copies_drafts_and_resets_page() {
        let mut query = QueryState::new(10, Filters::new());
        query.set_page(7);
        query.set_draft_filter("full_name", "Ana");
        query.apply_filters();
        assert_eq!(query.page_index(), 0);
        assert_eq!(
            query.applied_filters().get("full_name"),
            Some(&FilterValue::text("Ana"))
        );
        assert!(!query.has_pending_changes());
    }

    #[test]
    fn clear_restores_defaults_and_resets_page() {
        let defaults = filters(&[("enabled", FilterValue::text(""))]);
        let mut query = QueryState::new(10, defaults.clone());
        query.set_draft_filter("enabled", "true");
        query.apply_filters();
        query.set_page(3);

        query.clear_filters(defaults.clone());
        assert_eq!(query.page_index(), 0);
        assert_eq!(query.applied_filters(), &defaults);
        assert_eq!(query.draft_filters(), &defaults);
    }

    #[test]
    fn active_count_uses_filter_semantics() {
        let mut query = QueryState::new(10, Filters::new());
        query.set_draft_filter("full_name", "  ");
        query.set_draft_filter("grade", FilterValue::Empty);
        query.set_draft_filter("enabled", false);
        query.set_draft_filter("balance", rust_decimal::Decimal::ZERO);
        query.set_draft_filter("created", DateRange::default());
        assert_eq!(query.active_filter_count(), 2);
    }

    #[test]
    fn page_count_rounds_up() {
        let query = QueryState::new(10, Filters::new());
        assert_eq!(query.page_count(0), 0);
        assert_eq!(query.page_count(10), 1);
        assert_eq!(query.page_count(21), 3);
    }
}
