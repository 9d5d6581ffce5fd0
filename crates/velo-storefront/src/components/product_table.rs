//! Product listing table.

use leptos::prelude::*;
use leptos::suspense::Suspense;
use velo_commerce::catalog::ProductFilter;

use crate::catalog::get_products;
use crate::components::{ProductTableSkeleton, QuantitySelector};

/// Table of visible products: name, price and a quantity selector per
/// row. Rows pass through the given filter; fetch failure renders an
/// error line instead of the table body.
#[component]
pub fn ProductTable(#[prop(into)] filter: Signal<ProductFilter>) -> impl IntoView {
    let products = Resource::new(|| (), |_| get_products());

    view! {
        <Suspense fallback=move || view! { <ProductTableSkeleton/> }>
            {move || {
                products
                    .get()
                    .map(|result| match result {
                        Ok(products) => {
                            let visible = filter.with(|f| f.apply(&products));
                            view! {
                                <table class="product-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Price"</th>
                                            <th></th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {visible
                                            .into_iter()
                                            .map(|product| {
                                                let href = format!("/products/{}", product.id);
                                                let name = product.name.clone();
                                                let price = product.price_display();
                                                view! {
                                                    <tr>
                                                        <td>
                                                            <a href=href>{name}</a>
                                                        </td>
                                                        <td>{price}</td>
                                                        <td>
                                                            <QuantitySelector product=product/>
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                        Err(e) => view! {
                            <p class="error">"Error: " {e.to_string()}</p>
                        }
                        .into_any(),
                    })
            }}
        </Suspense>
    }
}
