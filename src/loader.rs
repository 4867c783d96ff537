use super::constants;
use super::error::CatalogResult;
use super::models::{ImageRef, Product, RawCatalog, RawProduct};
use super::source::CatalogSource;

/// Turns the nested catalog document into the flat product list.
pub struct Loader;

impl Loader {

    #[must_use]
    pub fn format_price(price: i64) -> String {
        format!("{symbol}{price}", symbol = constants::CURRENCY_SYMBOL)
    }

    fn to_product(raw: RawProduct) -> Product {
        Product {
            id: raw.id.to_string(),
            display_name: raw.name,
            formatted_price: Self::format_price(raw.price),
            image: ImageRef::for_id(raw.id),
            description: raw.description,
        }
    }

    pub fn decode(text: &str) -> CatalogResult<RawCatalog> {
        Ok(serde_json::from_str(text)?)
    }

    /// Nested products come first, in category, subcategory, item order,
    /// followed by the top-level products. Nothing is filtered or deduplicated.
    #[must_use]
    pub fn flatten(document: RawCatalog) -> Vec<Product> {
        let mut products = Vec::with_capacity(document.product_count());

        for category in document.catalog {
            for subcategory in category.items {
                products.extend(subcategory.items.into_iter().map(Self::to_product));
            }
        }

        products.extend(document.products.into_iter().map(Self::to_product));
        products
    }

    pub fn try_load(source: &dyn CatalogSource) -> CatalogResult<Vec<Product>> {
        let text = source.read()?;
        let document = Self::decode(&text)?;
        Ok(Self::flatten(document))
    }

    /// Read failures and decode failures both come back as an empty list.
    /// The cause only goes to the log.
    pub fn load(source: &dyn CatalogSource) -> Vec<Product> {
        match Self::try_load(source) {
            Ok(products) => {
                tracing::debug!(source = %source.describe(), count = products.len(), "catalog flattened");
                products
            }
            Err(error) => {
                tracing::warn!(source = %source.describe(), error = %error, "catalog unavailable, publishing empty list");
                Vec::new()
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::models::{RawCategory, RawSubCategory};
    use crate::source::{BundledCatalog, FileCatalog};

    fn raw_product(id: i64, price: i64) -> RawProduct {
        RawProduct {
            id,
            name: format!("Product {id}"),
            image: format!("image_{id}"),
            price,
            description: Some(format!("Description {id}")),
        }
    }

    fn subcategory(id: i64, items: Vec<RawProduct>) -> RawSubCategory {
        RawSubCategory {
            id,
            name: format!("Subcategory {id}"),
            image: String::new(),
            description: String::new(),
            items,
        }
    }

    fn category(id: i64, items: Vec<RawSubCategory>) -> RawCategory {
        RawCategory {
            id,
            name: format!("Category {id}"),
            image: String::new(),
            description: String::new(),
            items,
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|product| product.id.as_str()).collect()
    }

    #[test]
    fn test_flatten_keeps_traversal_order() {
        let document = RawCatalog {
            catalog: vec![
                category(1, vec![
                    subcategory(10, vec![raw_product(3, 1), raw_product(1, 1)]),
                    subcategory(11, vec![raw_product(2, 1)]),
                ]),
                category(2, vec![subcategory(20, vec![raw_product(9, 1)])]),
            ],
            products: vec![raw_product(5, 1), raw_product(4, 1)],
        };

        let products = Loader::flatten(document);
        assert_eq!(ids(&products), ["3", "1", "2", "9", "5", "4"]);
    }

    #[test]
    fn test_flatten_keeps_every_product() {
        let document = RawCatalog {
            catalog: vec![
                category(1, vec![
                    subcategory(10, vec![raw_product(1, 1), raw_product(1, 2)]),
                    subcategory(11, Vec::new()),
                ]),
                category(2, Vec::new()),
            ],
            products: vec![raw_product(1, 3)],
        };
        let expected = document.product_count();

        let products = Loader::flatten(document);
        assert_eq!(expected, 3);
        assert_eq!(products.len(), expected);
        assert_eq!(ids(&products), ["1", "1", "1"]);
    }

    #[test]
    fn test_product_fields_are_normalized() {
        let document = RawCatalog {
            catalog: Vec::new(),
            products: vec![raw_product(42, 12500)],
        };

        let product = Loader::flatten(document).remove(0);
        assert_eq!(product.id, "42");
        assert_eq!(product.display_name, "Product 42");
        assert_eq!(product.formatted_price, "₽12500");
        assert_eq!(product.image, ImageRef::for_id(42));
        assert_eq!(product.description.as_deref(), Some("Description 42"));
    }

    #[test]
    fn test_format_price_has_no_grouping() {
        assert_eq!(Loader::format_price(0), "₽0");
        assert_eq!(Loader::format_price(1_000_000), "₽1000000");
        assert_eq!(Loader::format_price(-15), "₽-15");
    }

    #[test]
    fn test_decode_tolerates_missing_arrays() {
        let document = Loader::decode("{}").unwrap();
        assert_eq!(document, RawCatalog::default());

        let document = Loader::decode(r#"{"catalog": [{"id": 1, "name": "A", "image": "a", "description": "d"}]}"#).unwrap();
        assert_eq!(document.catalog.len(), 1);
        assert!(document.catalog[0].items.is_empty());
        assert!(document.products.is_empty());
    }

    #[test]
    fn test_missing_description_still_loads() {
        let document = Loader::decode(r#"{"products": [
            {"id": 7, "name": "Gauze", "image": "x", "price": 500},
            {"id": 8, "name": "Mirror", "image": "m", "price": 250, "description": "m"}
        ]}"#).unwrap();

        let products = Loader::flatten(document);
        assert_eq!(ids(&products), ["7", "8"]);
        assert_eq!(products[0].description, None);
        assert_eq!(products[1].description.as_deref(), Some("m"));
    }

    #[test]
    fn test_decode_error_names_position() {
        let error = Loader::decode("{\"catalog\": [").unwrap_err();
        let message = error.to_string();

        assert!(message.starts_with("catalog asset is not a valid catalog document: "));
        assert!(message.contains("line 1 column"), "{message}");
    }

    #[test]
    fn test_read_error_names_cause() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FileCatalog::new(dir.path().join("products.json"));

        let message = Loader::try_load(&missing).unwrap_err().to_string();
        assert!(message.contains("products.json: "), "{message}");
        assert!(!message.ends_with("products.json: "), "{message}");
    }

    #[test]
    fn test_decode_rejects_wrong_shapes() {
        assert!(matches!(Loader::decode("not json"), Err(CatalogError::Decode(_))));
        assert!(matches!(Loader::decode(r#"{"products": [{"id": "7"}]}"#), Err(CatalogError::Decode(_))));
        assert!(matches!(Loader::decode(r#"{"products": {}}"#), Err(CatalogError::Decode(_))));
    }

    #[test]
    fn test_load_is_fail_soft() {
        let malformed = BundledCatalog::from_static("{\"catalog\": [");
        assert!(Loader::load(&malformed).is_empty());

        let dir = tempfile::tempdir().unwrap();
        let missing = FileCatalog::new(dir.path().join("products.json"));
        assert!(Loader::load(&missing).is_empty());
        assert!(matches!(Loader::try_load(&missing), Err(CatalogError::AssetRead { .. })));
    }

    #[test]
    fn test_bundled_asset_loads() {
        let products = Loader::load(&BundledCatalog::new());
        let document = Loader::decode(constants::BUNDLED_CATALOG).unwrap();

        assert_eq!(products.len(), document.product_count());
        assert_eq!(products[0].display_name, "Dental Handpiece A1");
        assert_eq!(products[0].formatted_price, "₽12500");
    }
}
