//! Reusable list-view core for the back-office screens.
//!
//! Every entity listing (students, payments, coffee sales, ...) is the same
//! machine: a [`QueryState`] holding paging, sorting and filters, a
//! [`DataFetcher`] that turns it into backend calls, and column/export
//! descriptors built from a static field table. [`ListController`] ties
//! them together for one screen.

pub mod columns;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod query;
pub mod upload;

pub use columns::{
    ColumnDescriptor, ExportDescriptor, ExportRow, FieldSpec, build_columns,
    build_export_descriptor, project_row_for_export,
};
pub use controller::ListController;
pub use debounce::Debouncer;
pub use error::{ExportError, FetchError, UploadError, ValidationError};
pub use export::ExportTable;
pub use fetcher::{
    ApiEndpoint, DataFetcher, EntityParams, FetchResult, FetchStatus,
    ListEndpoint, Settled,
};
pub use query::QueryState;
pub use upload::{RowCells, RowStatus, RowValidator, UploadRow, UploadSheet};

/// Settings shared by every list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConfig {
    pub page_size: u32,
    /// Sent as `lang` so the backend localizes enum labels.
    pub lang: Option<String>,
    /// Shown in place of the table error when a page fetch fails.
    pub failure_notice: String,
}

impl ListConfig {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
            lang: None,
            failure_notice: "Failed to fetch data".to_string(),
        }
    }
}
