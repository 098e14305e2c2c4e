//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Gallery image paths.
    pub images: Vec<String>,
    /// Optional promotional video path.
    pub video: Option<String>,
}

impl Product {
    /// Create a new product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            images: Vec::new(),
            video: None,
        }
    }

    /// Check if the product has gallery media.
    pub fn has_media(&self) -> bool {
        !self.images.is_empty() || self.video.is_some()
    }
}

/// The boutique's single offering.
pub fn featured() -> Product {
    Product {
        id: ProductId::new("prod_purse"),
        name: "Traditional Indian Purse".to_string(),
        description: "Handcrafted traditional Indian purse with intricate embroidery."
            .to_string(),
        price: Money::from_decimal(20.00),
        images: vec![
            "purse/purse-1.jpg".to_string(),
            "purse/purse-2.jpg".to_string(),
            "purse/purse-3.jpg".to_string(),
        ],
        video: Some("purse/Social_Media_Reel_For_Purse.mp4".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_product() {
        let product = featured();
        assert_eq!(product.name, "Traditional Indian Purse");
        assert_eq!(product.price.cents, 2000);
        assert!(product.has_media());
    }

    #[test]
    fn test_new_product_has_no_media() {
        let product = Product::new(ProductId::generate(), "Test", Money::new(100));
        assert!(!product.has_media());
    }
}
