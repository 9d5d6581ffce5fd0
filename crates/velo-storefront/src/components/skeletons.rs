//! Skeleton components (loading states).

use leptos::prelude::*;

#[component]
pub fn ProductTableSkeleton() -> impl IntoView {
    view! {
        <div class="product-table" aria-label="loading products">
            {(0..5)
                .map(|_| view! {
                    <div class="skeleton" style="width: 100%; height: 2.5rem; margin-bottom: 0.5rem;"></div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn ProductDetailSkeleton() -> impl IntoView {
    view! {
        <div class="product-detail">
            <div class="skeleton" style="width: 60%; height: 2rem; margin-bottom: 1rem;"></div>
            <div class="skeleton" style="width: 30%; height: 2rem; margin-bottom: 2rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 1rem;"></div>
            <div class="skeleton" style="width: 150px; height: 3rem;"></div>
        </div>
    }
}

#[component]
pub fn CartSkeleton() -> impl IntoView {
    view! {
        <div class="cart">
            <div class="skeleton" style="width: 200px; height: 1.5rem; margin-bottom: 1rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 0.5rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem; margin-bottom: 0.5rem;"></div>
            <div class="skeleton" style="width: 100%; height: 4rem;"></div>
        </div>
    }
}

#[component]
pub fn SelectSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" style="width: 180px; height: 2rem;" aria-label="loading categories">
        </div>
    }
}
