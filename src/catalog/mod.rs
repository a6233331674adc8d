pub mod catalog;
pub mod loader;

pub use catalog::PublicationCatalog;
pub use loader::CatalogError;
