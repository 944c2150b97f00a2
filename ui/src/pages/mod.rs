pub mod entity_list;
pub mod not_found;

pub use entity_list::EntityListPage;
pub use not_found::NotFoundPage;
