use payloads::{FilterValue, Filters, SortDirection};
use serde::Serialize;
use std::future::Future;

use crate::{
    DataFetcher, EntityParams, ExportDescriptor, ExportError, ExportTable,
    FetchError, FetchResult, ListConfig, ListEndpoint, QueryState, Settled,
};

/// State and data for one entity listing.
///
/// Methods that change what should be on screen return the fetch they
/// started; the caller spawns it and re-renders once it resolves. Draft
/// filter edits fetch nothing.
pub struct ListController<E: ListEndpoint> {
    query: QueryState,
    fetcher: DataFetcher<E>,
    params: EntityParams,
    default_filters: Filters,
}

impl<E> ListController<E>
where
    E: ListEndpoint + Clone + 'static,
    E::Record: 'static,
{
    pub fn new(endpoint: E, config: &ListConfig) -> Self {
        Self {
            query: QueryState::new(config.page_size, Filters::new()),
            fetcher: DataFetcher::new(endpoint, config),
            params: EntityParams::new(),
            default_filters: Filters::new(),
        }
    }

    pub fn with_params(mut self, params: EntityParams) -> Self {
        self.params = params;
        self
    }

    /// Filters the view starts with and returns to on clear.
    pub fn with_default_filters(mut self, defaults: Filters) -> Self {
        self.query.clear_filters(defaults.clone());
        self.default_filters = defaults;
        self
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn params(&self) -> &EntityParams {
        &self.params
    }

    pub fn fetcher(&self) -> &DataFetcher<E> {
        &self.fetcher
    }

    pub fn result(&self) -> FetchResult<E::Record> {
        self.fetcher.snapshot()
    }

    pub fn active_filter_count(&self) -> usize {
        self.query.active_filter_count()
    }

    /// Fetch the current page again with unchanged state.
    pub fn reload(&self) -> impl Future<Output = Settled> + use<E> {
        self.fetcher.fetch_page(&self.params, &self.query)
    }

    pub fn set_page(
        &mut self,
        page: u32,
    ) -> impl Future<Output = Settled> + use<E> {
        self.query.set_page(page);
        self.reload()
    }

    pub fn set_page_size(
        &mut self,
        page_size: u32,
        page: u32,
    ) -> impl Future<Output = Settled> + use<E> {
        self.query.set_page_size(page_size, page);
        self.reload()
    }

    pub fn set_sort<K: Into<String>>(
        &mut self,
        key: K,
        direction: SortDirection,
    ) -> impl Future<Output = Settled> + use<E, K> {
        self.query.set_sort(key, direction);
        self.reload()
    }

    pub fn set_draft_filter(
        &mut self,
        name: impl Into<String>,
        value: impl Into<FilterValue>,
    ) {
        self.query.set_draft_filter(name, value);
    }

    pub fn apply_filters(&mut self) -> impl Future<Output = Settled> + use<E> {
        self.query.apply_filters();
        self.reload()
    }

    pub fn clear_filters(&mut self) -> impl Future<Output = Settled> + use<E> {
        self.query.clear_filters(self.default_filters.clone());
        self.reload()
    }

    /// Switch the language sent to the backend and the notice shown on a
    /// failed fetch, then refetch.
    pub fn set_lang(
        &mut self,
        lang: Option<String>,
        failure_notice: &str,
    ) -> impl Future<Output = Settled> + use<E> {
        self.fetcher.set_lang(lang);
        self.fetcher.set_failure_notice(failure_notice);
        self.reload()
    }

    /// Every record matching the applied filters and sort.
    pub fn export_all(
        &self,
    ) -> impl Future<Output = Result<Vec<E::Record>, FetchError>> + use<E> {
        self.fetcher.fetch_all(&self.params, &self.query)
    }

    /// Fetch everything and project it for a CSV download.
    pub fn export_table(
        &self,
        descriptor: &ExportDescriptor,
    ) -> impl Future<Output = Result<ExportTable, ExportError>> + use<E>
    where
        E::Record: Serialize,
    {
        let records = self.export_all();
        let descriptor = descriptor.clone();
        async move {
            let records = records.await?;
            ExportTable::from_records(&records, &descriptor)
        }
    }
}
