//! Product type.

use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Read-only to the storefront core; identity is `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price in dollars.
    pub price: f64,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Full description for the detail page.
    pub description: Option<String>,
    /// Image URLs for the detail gallery.
    pub image_urls: Vec<String>,
}

impl Product {
    /// Create a new product with no description or images.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        category_id: CategoryId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category_id,
            description: None,
            image_urls: Vec::new(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach image URLs.
    pub fn with_images(mut self, urls: impl IntoIterator<Item = String>) -> Self {
        self.image_urls = urls.into_iter().collect();
        self
    }

    /// Format the price as a dollar string.
    pub fn price_display(&self) -> String {
        format!("${}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        let product = Product::new(ProductId::new(1), "Milk", 10.0, CategoryId::new(1));
        assert_eq!(product.price_display(), "$10");

        let product = Product::new(ProductId::new(2), "Bread", 2.5, CategoryId::new(1));
        assert_eq!(product.price_display(), "$2.5");
    }
}
