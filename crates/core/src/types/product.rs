//! Catalog product snapshot.

use serde::{Deserialize, Serialize};

use super::id::{Color, ProductId};
use super::price::UnitPrice;

/// Product data handed over by the catalog at selection time.
///
/// The basket copies what it needs from this snapshot when an item is added
/// and never consults the catalog again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: UnitPrice,
    /// Primary image URL.
    pub image_url: String,
    /// Color variants offered, empty when the product has none.
    #[serde(default)]
    pub colors: Vec<Color>,
}

impl Product {
    /// Whether `color` is a valid selection for this product.
    ///
    /// `None` is only valid for products without color variants.
    #[must_use]
    pub fn offers(&self, color: Option<&Color>) -> bool {
        match color {
            Some(color) => self.colors.contains(color),
            None => self.colors.is_empty(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(colors: &[&str]) -> Product {
        Product {
            id: ProductId::parse("p1").unwrap(),
            name: "Pineapple Tee".to_string(),
            price: UnitPrice::parse("25.00").unwrap(),
            image_url: "https://cdn.example.test/p1.jpg".to_string(),
            colors: colors.iter().map(|c| Color::parse(c).unwrap()).collect(),
        }
    }

    #[test]
    fn test_offers_listed_color() {
        let p = product(&["red", "blue"]);
        assert!(p.offers(Some(&Color::parse("red").unwrap())));
        assert!(!p.offers(Some(&Color::parse("green").unwrap())));
        assert!(!p.offers(None));
    }

    #[test]
    fn test_colorless_product() {
        let p = product(&[]);
        assert!(p.offers(None));
        assert!(!p.offers(Some(&Color::parse("red").unwrap())));
    }

    #[test]
    fn test_deserialize_without_colors() {
        let json = r#"{"id":"p9","name":"Mug","price":"8.00","imageUrl":"u"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.colors.is_empty());
        assert_eq!(p.price.to_string(), "8.00");
    }
}
