//! Catalog provider seam.
//!
//! The storefront only reads products and categories, and it reads them
//! through this trait. A transport failure surfaces as
//! [`CatalogError::Transport`] and the consuming page presents an error
//! state; products are never handed to the core partially fetched.

use crate::catalog::{Category, Product};
use crate::error::CatalogError;
use crate::ids::ProductId;
use async_trait::async_trait;

/// Read-only source of product and category records.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch every product in the catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Fetch every category.
    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Fetch a single product, `None` when no such product exists.
    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError>;
}

/// Catalog backed by in-memory records.
///
/// Stands in for the storefront's HTTP data layer; the trait boundary
/// keeps a remote backend pluggable.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    fail: bool,
}

impl InMemoryCatalog {
    /// Create a catalog over the given records.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            fail: false,
        }
    }

    /// Create a catalog whose every fetch fails with a transport error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), CatalogError> {
        if self.fail {
            Err(CatalogError::Transport("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.check()?;
        Ok(self.products.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.check()?;
        Ok(self.categories.clone())
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        self.check()?;
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CategoryId;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(
            vec![
                Product::new(ProductId::new(1), "Milk", 5.0, CategoryId::new(1)),
                Product::new(ProductId::new(2), "Bread", 3.0, CategoryId::new(1)),
            ],
            vec![Category::new(CategoryId::new(1), "Groceries")],
        )
    }

    #[tokio::test]
    async fn test_fetch_products() {
        let products = catalog().fetch_products().await.unwrap();
        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_categories() {
        let categories = catalog().fetch_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Groceries");
    }

    #[tokio::test]
    async fn test_fetch_product_by_id() {
        let catalog = catalog();
        let product = catalog.fetch_product(ProductId::new(2)).await.unwrap();
        assert_eq!(product.unwrap().name, "Bread");

        let missing = catalog.fetch_product(ProductId::new(99)).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_failing_catalog_reports_transport_error() {
        let catalog = InMemoryCatalog::failing();
        let err = catalog.fetch_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
