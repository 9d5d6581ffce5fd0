//! Domain error types.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by the cart state machine.
///
/// Both variants are programming-contract violations rather than
/// user-facing failures: the quantity selector only issues operations
/// that are legal for the state it currently displays.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A mutation referenced a product that is not in the cart.
    #[error("item not in cart: {0}")]
    NotFound(ProductId),

    /// The operation violates the per-product state machine.
    #[error("invalid cart state for {product_id}: {reason}")]
    InvalidState {
        product_id: ProductId,
        reason: &'static str,
    },
}

/// Errors raised by the catalog provider.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogError {
    /// The underlying fetch failed; the UI shows a generic error state.
    #[error("catalog fetch failed: {0}")]
    Transport(String),
}
