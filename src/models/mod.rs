mod catalog;
mod category;
mod product;
mod samples;

pub use self::catalog::RawCatalog;
pub use self::category::{RawCategory, RawSubCategory};
pub use self::product::{ImageRef, Product, RawProduct};
pub use self::samples::sample_products;
