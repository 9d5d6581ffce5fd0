//! In-memory product filtering for the browse page.

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Filter applied to the visible product list.
///
/// `category: None` means "All"; `text` matches case-insensitively
/// against the product name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<CategoryId>,
    pub text: Option<String>,
}

impl ProductFilter {
    /// Filter on a single category.
    pub fn category(id: CategoryId) -> Self {
        Self {
            category: Some(id),
            ..Self::default()
        }
    }

    /// Filter on a search term.
    pub fn text(term: impl Into<String>) -> Self {
        Self {
            text: Some(term.into()),
            ..Self::default()
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category_id != category {
                return false;
            }
        }
        if let Some(ref term) = self.text {
            if !product
                .name
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    /// Apply the filter to a product list.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(ProductId::new(1), "Milk", 5.0, CategoryId::new(1)),
            Product::new(ProductId::new(2), "Bread", 3.0, CategoryId::new(1)),
            Product::new(ProductId::new(3), "Keyboard", 50.0, CategoryId::new(2)),
        ]
    }

    #[test]
    fn test_default_filter_passes_everything() {
        let products = sample();
        assert_eq!(ProductFilter::default().apply(&products).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let products = sample();
        let visible = ProductFilter::category(CategoryId::new(1)).apply(&products);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|p| p.category_id == CategoryId::new(1)));
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let products = sample();
        let visible = ProductFilter::text("milk").apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Milk");
    }

    #[test]
    fn test_combined_filter() {
        let products = sample();
        let filter = ProductFilter {
            category: Some(CategoryId::new(1)),
            text: Some("bread".to_string()),
        };
        let visible = filter.apply(&products);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Bread");
    }
}
