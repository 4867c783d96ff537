use serde::{Deserialize, Serialize};

use super::category::RawCategory;
use super::product::RawProduct;

/// Top-level shape of the catalog asset.
///
/// Products come from two independent places: nested under `catalog`
/// (category, then subcategory) and flat under `products`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalog {
    #[serde(default)]
    pub catalog: Vec<RawCategory>,
    #[serde(default)]
    pub products: Vec<RawProduct>,
}

impl RawCatalog {

    #[must_use]
    pub fn product_count(&self) -> usize {
        let nested: usize = self.catalog
            .iter()
            .flat_map(|category| &category.items)
            .map(|subcategory| subcategory.items.len())
            .sum();

        nested + self.products.len()
    }

}
