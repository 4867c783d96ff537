use std::io::Write;

use super::prelude::*;
use super::views::CatalogState;

/// Plain text rendering of the view states, used by the binary.
pub struct Populator {}

impl Populator {

    pub fn populate_catalog(out: &mut impl Write, state: &CatalogState) -> Result<()> {
        match state {
            CatalogState::Loading => writeln!(out, "Loading catalog...")?,
            CatalogState::Error(message) => writeln!(out, "{message}")?,
            CatalogState::Success(products) => {
                for product in products.iter() {
                    Self::populate_row(out, product)?;
                }
            }
        }

        Ok(())
    }

    fn populate_row(out: &mut impl Write, product: &Product) -> Result<()> {
        writeln!(
            out,
            "{id:>6}  {name:<40} {price:>10}  [{image}]",
            id = product.id,
            name = product.display_name,
            price = product.formatted_price,
            image = product.image,
        )?;
        Ok(())
    }

    pub fn populate_product(out: &mut impl Write, product: Option<&Product>) -> Result<()> {
        let Some(product) = product else {
            writeln!(out, "Product not found")?;
            return Ok(());
        };

        writeln!(out, "{}", product.display_name)?;
        writeln!(out, "Price: {}", product.formatted_price)?;
        writeln!(out, "Image: {}", product.image)?;
        if let Some(description) = &product.description {
            writeln!(out, "{description}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_products;

    fn render(state: &CatalogState) -> String {
        let mut out = Vec::new();
        Populator::populate_catalog(&mut out, state).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_catalog_rows() {
        let products: Arc<[Product]> = Arc::from(sample_products());
        let text = render(&CatalogState::Success(products));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Dental Handpiece A1"));
        assert!(lines[0].contains("₽12500"));
        assert!(lines[0].ends_with("[first]"));
    }

    #[test]
    fn test_error_and_loading_messages() {
        assert_eq!(render(&CatalogState::Error("No products found".to_string())), "No products found\n");
        assert_eq!(render(&CatalogState::Loading), "Loading catalog...\n");
    }

    #[test]
    fn test_product_details() {
        let product = sample_products().remove(1);
        let mut out = Vec::new();
        Populator::populate_product(&mut out, Some(&product)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Orthodontic Bracket Set\nPrice: ₽3200\nImage: second\nComplete set for bracket bonding\n");

        let mut out = Vec::new();
        Populator::populate_product(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Product not found\n");
    }
}
