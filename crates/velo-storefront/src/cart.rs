//! Shared cart store.
//!
//! One [`CartStore`] is provided via context at the app root and read
//! by every quantity selector; components never own cart state of
//! their own. Mutations run synchronously inside event handlers, so
//! the signal is the only serialization the store needs.

use leptos::logging;
use leptos::prelude::*;
use velo_commerce::cart::{Cart, CartItem, QuantityControl};
use velo_commerce::error::CartError;
use velo_commerce::ids::ProductId;

/// Reactive handle to the session cart.
#[derive(Debug, Clone, Copy)]
pub struct CartStore(RwSignal<Cart>);

impl CartStore {
    pub fn new() -> Self {
        Self(RwSignal::new(Cart::new()))
    }

    /// Current quantity for a product, 0 when absent. Reactive read.
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.0.with(|cart| cart.quantity(product_id))
    }

    /// What the selector should present for a product. Reactive read.
    pub fn control_for(&self, product_id: ProductId) -> QuantityControl {
        self.0.with(|cart| cart.control_for(product_id))
    }

    /// Snapshot of the cart items, ordered by product id for stable
    /// display. Reactive read.
    pub fn items(&self) -> Vec<CartItem> {
        self.0.with(|cart| {
            let mut items: Vec<CartItem> = cart.items().copied().collect();
            items.sort_by_key(|item| item.product_id);
            items
        })
    }

    /// Total item count across products. Reactive read.
    pub fn item_count(&self) -> u32 {
        self.0.with(|cart| cart.item_count())
    }

    pub fn add(&self, product_id: ProductId) {
        self.apply(|cart| cart.add(product_id));
    }

    pub fn increment(&self, product_id: ProductId) {
        self.apply(|cart| cart.increment(product_id));
    }

    pub fn decrement(&self, product_id: ProductId) {
        self.apply(|cart| cart.decrement(product_id));
    }

    // Contract violations mean a selector issued an operation that was
    // not legal for its displayed state; log them, never render them.
    fn apply(&self, op: impl FnOnce(&mut Cart) -> Result<(), CartError>) {
        self.0.update(|cart| {
            if let Err(err) = op(cart) {
                logging::error!("cart contract violation: {err}");
            }
        });
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the cart store to the component tree. Called once, at the
/// app root.
pub fn provide_cart() {
    provide_context(CartStore::new());
}

/// Get the shared cart store from context.
pub fn use_cart() -> CartStore {
    expect_context::<CartStore>()
}
