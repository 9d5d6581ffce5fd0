//! Storefront domain types and logic for VeloCommerce.
//!
//! This crate provides the non-presentational half of the storefront:
//!
//! - **Catalog**: read-only products and categories behind a provider trait
//! - **Cart**: the shopping cart and its per-product quantity state machine
//! - **Validation**: the admin product form rule table
//!
//! # Example
//!
//! ```rust
//! use velo_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! let milk = ProductId::new(1);
//!
//! cart.add(milk).unwrap();
//! cart.increment(milk).unwrap();
//! assert_eq!(cart.quantity(milk), 2);
//!
//! cart.decrement(milk).unwrap();
//! cart.decrement(milk).unwrap();
//! assert_eq!(cart.quantity(milk), 0);
//! assert_eq!(cart.control_for(milk), QuantityControl::AddToCart);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod validation;

pub use error::{CartError, CatalogError};
pub use ids::{CategoryId, ProductId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CartError, CatalogError};
    pub use crate::ids::{CategoryId, ProductId};

    // Catalog
    pub use crate::catalog::{
        Category, CatalogProvider, InMemoryCatalog, Product, ProductFilter,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, QuantityControl};

    // Validation
    pub use crate::validation::{Field, FieldError, ProductDraft, ProductPayload};
}
