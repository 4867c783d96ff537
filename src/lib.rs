pub mod application;
pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod populator;
pub mod prelude;
pub mod repository;
pub mod source;
pub mod views;

pub use self::application::Application;
pub use self::error::{CatalogError, CatalogResult};
pub use self::loader::Loader;
pub use self::repository::{LoadState, Repository};
pub use self::source::{BundledCatalog, CatalogSource, FileCatalog};
