//! Product detail view.

use leptos::prelude::*;
use leptos::suspense::Suspense;
use velo_commerce::ids::ProductId;

use crate::catalog::get_product;
use crate::components::{
    ExpandableText, ProductDetailSkeleton, ProductImageGallery, QuantitySelector,
};

/// Full record view for one product.
#[component]
pub fn ProductDetail(product_id: ProductId) -> impl IntoView {
    let product = Resource::new(move || product_id, get_product);

    view! {
        <Suspense fallback=move || view! { <ProductDetailSkeleton/> }>
            {move || {
                product
                    .get()
                    .map(|result| match result {
                        Ok(Some(product)) => {
                            let description = product
                                .description
                                .clone()
                                .unwrap_or_else(|| "No description available.".to_string());
                            view! {
                                <div class="product-detail">
                                    <ProductImageGallery image_urls=product.image_urls.clone()/>
                                    <h1>{product.name.clone()}</h1>
                                    <p class="price">{product.price_display()}</p>
                                    <ExpandableText text=description/>
                                    <QuantitySelector product=product/>
                                </div>
                            }
                            .into_any()
                        }
                        Ok(None) => view! {
                            <p>"The given product was not found."</p>
                            <a href="/products">"Back to products"</a>
                        }
                        .into_any(),
                        Err(e) => view! {
                            <p class="error">"Error: " {e.to_string()}</p>
                        }
                        .into_any(),
                    })
            }}
        </Suspense>
    }
}
