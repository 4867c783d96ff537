use super::product::{ImageRef, Product};
use crate::loader::Loader;

fn sample(id: i64, name: &str, price: i64, image: ImageRef, description: &str) -> Product {
    Product {
        id: id.to_string(),
        display_name: name.to_string(),
        formatted_price: Loader::format_price(price),
        image,
        description: Some(description.to_string()),
    }
}

/// Hand-authored products for previews. Prices go through the loader's
/// formatter so they render exactly like loaded data.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        sample(1, "Dental Handpiece A1", 12500, ImageRef::First, "High-speed handpiece suitable for general dentistry"),
        sample(2, "Orthodontic Bracket Set", 3200, ImageRef::Second, "Complete set for bracket bonding"),
        sample(3, "Sterilization Pouches (100)", 1100, ImageRef::Third, "Medical-grade sterilization pouches"),
    ]
}
