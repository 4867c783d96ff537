mod catalog;
mod product;

pub use self::catalog::{Catalog as CatalogView, CatalogState};
pub use self::product::Product as ProductView;
