//! Shopping cart module.
//!
//! Contains the cart, its items, and the per-product quantity state
//! machine driven by the storefront's quantity selectors.

mod cart;

pub use cart::{Cart, CartItem, QuantityControl};
