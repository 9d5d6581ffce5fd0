//! Cart and cart item types.

use crate::error::CartError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An item in the cart.
///
/// Invariant: `quantity >= 1` for as long as the item is present. An
/// item whose quantity would reach zero is removed from the cart, never
/// retained with a zero value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity, at least 1.
    pub quantity: u32,
}

/// What a quantity selector should present for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityControl {
    /// The product is not in the cart: a single "Add to Cart" action.
    AddToCart,
    /// The product is in the cart: the quantity plus -/+ actions.
    Stepper(u32),
}

/// A shopping cart.
///
/// One cart exists per session, created empty and mutated only through
/// [`add`](Cart::add), [`increment`](Cart::increment) and
/// [`decrement`](Cart::decrement). Each product follows its own state
/// machine:
///
/// ```text
/// ABSENT --add--> PRESENT(1)
/// PRESENT(q) --increment--> PRESENT(q+1)
/// PRESENT(q>1) --decrement--> PRESENT(q-1)
/// PRESENT(1) --decrement--> ABSENT
/// ```
///
/// There is no upper bound on quantity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cart {
    items: HashMap<ProductId, CartItem>,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Add a product to the cart with quantity 1.
    ///
    /// Fails with [`CartError::InvalidState`] if the product is already
    /// in the cart; callers must use [`increment`](Cart::increment)
    /// instead.
    pub fn add(&mut self, product_id: ProductId) -> Result<(), CartError> {
        if self.items.contains_key(&product_id) {
            return Err(CartError::InvalidState {
                product_id,
                reason: "already in cart, increment instead",
            });
        }
        self.items.insert(
            product_id,
            CartItem {
                product_id,
                quantity: 1,
            },
        );
        Ok(())
    }

    /// Increase the quantity of a product already in the cart by 1.
    ///
    /// Fails with [`CartError::NotFound`] if the product is absent. A
    /// wrapped quantity would leave a present item at 0, so the
    /// increment is checked.
    pub fn increment(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let item = self
            .items
            .get_mut(&product_id)
            .ok_or(CartError::NotFound(product_id))?;
        item.quantity = item
            .quantity
            .checked_add(1)
            .ok_or(CartError::InvalidState {
                product_id,
                reason: "quantity overflow",
            })?;
        Ok(())
    }

    /// Decrease the quantity of a product already in the cart by 1.
    ///
    /// A quantity reaching zero removes the item entirely, returning
    /// that product to the ABSENT state. Fails with
    /// [`CartError::NotFound`] if the product is absent.
    pub fn decrement(&mut self, product_id: ProductId) -> Result<(), CartError> {
        let item = self
            .items
            .get_mut(&product_id)
            .ok_or(CartError::NotFound(product_id))?;
        if item.quantity == 1 {
            self.items.remove(&product_id);
        } else {
            item.quantity -= 1;
        }
        Ok(())
    }

    /// Get the current quantity for a product, or 0 if absent.
    ///
    /// Pure read, no side effect.
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.items.get(&product_id).map_or(0, |item| item.quantity)
    }

    /// What the quantity selector should present for a product.
    pub fn control_for(&self, product_id: ProductId) -> QuantityControl {
        match self.quantity(product_id) {
            0 => QuantityControl::AddToCart,
            q => QuantityControl::Stepper(q),
        }
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.get(&product_id)
    }

    /// Iterate over the items in the cart (order is unspecified).
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.values().map(|i| i.quantity).sum()
    }

    /// Get number of unique products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.quantity(ProductId::new(1)), 0);
    }

    #[test]
    fn test_add_sets_quantity_to_one() {
        let mut cart = Cart::new();
        cart.add(ProductId::new(1)).unwrap();

        assert_eq!(cart.quantity(ProductId::new(1)), 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_double_add_is_invalid_state() {
        let mut cart = Cart::new();
        cart.add(ProductId::new(1)).unwrap();

        let err = cart.add(ProductId::new(1)).unwrap_err();
        assert!(matches!(err, CartError::InvalidState { .. }));
        // The first add survives the failed second one.
        assert_eq!(cart.quantity(ProductId::new(1)), 1);
    }

    #[test]
    fn test_increment_requires_presence() {
        let mut cart = Cart::new();

        let err = cart.increment(ProductId::new(1)).unwrap_err();
        assert_eq!(err, CartError::NotFound(ProductId::new(1)));
    }

    #[test]
    fn test_n_increments_after_add() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        cart.add(id).unwrap();

        let n = 5;
        for _ in 0..n {
            cart.increment(id).unwrap();
        }

        assert_eq!(cart.quantity(id), n + 1);
    }

    #[test]
    fn test_increment_at_max_quantity_fails() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        cart.items.insert(
            id,
            CartItem {
                product_id: id,
                quantity: u32::MAX,
            },
        );

        let err = cart.increment(id).unwrap_err();
        assert!(matches!(err, CartError::InvalidState { .. }));
        // The item is untouched, in particular never 0-while-present.
        assert_eq!(cart.quantity(id), u32::MAX);
    }

    #[test]
    fn test_decrement_above_one_keeps_item() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        cart.add(id).unwrap();
        cart.increment(id).unwrap();

        cart.decrement(id).unwrap();

        assert_eq!(cart.quantity(id), 1);
        assert!(cart.get(id).is_some());
    }

    #[test]
    fn test_decrement_at_one_removes_item() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        cart.add(id).unwrap();

        cart.decrement(id).unwrap();

        assert_eq!(cart.quantity(id), 0);
        assert!(cart.get(id).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrement_requires_presence() {
        let mut cart = Cart::new();

        let err = cart.decrement(ProductId::new(1)).unwrap_err();
        assert_eq!(err, CartError::NotFound(ProductId::new(1)));
    }

    #[test]
    fn test_absent_state_is_re_enterable() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        cart.add(id).unwrap();
        cart.decrement(id).unwrap();

        // Back in ABSENT, add is legal again.
        cart.add(id).unwrap();
        assert_eq!(cart.quantity(id), 1);
    }

    #[test]
    fn test_products_are_isolated() {
        let mut cart = Cart::new();
        let a = ProductId::new(1);
        let b = ProductId::new(2);
        cart.add(a).unwrap();
        cart.add(b).unwrap();
        cart.increment(b).unwrap();

        cart.decrement(a).unwrap();

        assert_eq!(cart.quantity(a), 0);
        assert_eq!(cart.quantity(b), 2);
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        cart.add(ProductId::new(1)).unwrap();
        cart.add(ProductId::new(2)).unwrap();
        cart.increment(ProductId::new(2)).unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_control_for_follows_quantity() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);
        assert_eq!(cart.control_for(id), QuantityControl::AddToCart);

        cart.add(id).unwrap();
        assert_eq!(cart.control_for(id), QuantityControl::Stepper(1));

        cart.increment(id).unwrap();
        assert_eq!(cart.control_for(id), QuantityControl::Stepper(2));

        cart.decrement(id).unwrap();
        cart.decrement(id).unwrap();
        assert_eq!(cart.control_for(id), QuantityControl::AddToCart);
    }

    // The full scenario from the storefront: add, increment, decrement
    // twice, and the add affordance comes back.
    #[test]
    fn test_quantity_selector_scenario() {
        let mut cart = Cart::new();
        let id = ProductId::new(1);

        cart.add(id).unwrap();
        assert_eq!(cart.control_for(id), QuantityControl::Stepper(1));

        cart.increment(id).unwrap();
        assert_eq!(cart.control_for(id), QuantityControl::Stepper(2));

        cart.decrement(id).unwrap();
        assert_eq!(cart.control_for(id), QuantityControl::Stepper(1));

        cart.decrement(id).unwrap();
        assert_eq!(cart.control_for(id), QuantityControl::AddToCart);
    }
}
