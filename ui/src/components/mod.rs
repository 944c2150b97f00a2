pub mod data_table;
pub mod error_banner;
pub mod export_button;
pub mod filter_bar;
pub mod lang_select;
pub mod layout;
pub mod pagination_controls;

pub use data_table::DataTable;
pub use error_banner::ErrorBanner;
pub use export_button::ExportButton;
pub use filter_bar::FilterBar;
pub use lang_select::LangSelect;
pub use layout::MainLayout;
pub use pagination_controls::PaginationControls;
