//! Per-product quantity selector.

use leptos::prelude::*;
use velo_commerce::cart::QuantityControl;
use velo_commerce::catalog::Product;

use crate::cart::use_cart;

/// Drives the cart state machine for exactly one product.
///
/// Holds no quantity state of its own: the presented control is
/// entirely derived from the shared cart store, so any number of
/// selectors for different products stay consistent.
#[component]
pub fn QuantitySelector(product: Product) -> impl IntoView {
    let cart = use_cart();
    let product_id = product.id;
    let label = format!("quantity of {}", product.name);

    view! {
        {move || match cart.control_for(product_id) {
            QuantityControl::AddToCart => view! {
                <button class="btn" on:click=move |_| cart.add(product_id)>
                    "Add to Cart"
                </button>
            }
            .into_any(),
            QuantityControl::Stepper(_) => view! {
                <div class="quantity-selector" aria-label=label.clone()>
                    <button class="btn" on:click=move |_| cart.decrement(product_id)>
                        "-"
                    </button>
                    <span role="status">{move || cart.quantity(product_id)}</span>
                    <button class="btn" on:click=move |_| cart.increment(product_id)>
                        "+"
                    </button>
                </div>
            }
            .into_any(),
        }}
    }
}
