pub mod use_list_view;

pub use use_list_view::{ListViewHandle, use_list_view};
