//! Admin product form.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::suspense::Suspense;
use velo_commerce::catalog::Product;
use velo_commerce::ids::CategoryId;
use velo_commerce::validation::{FieldError, ProductDraft, ProductPayload};

use crate::catalog::get_categories;
use crate::components::SelectSkeleton;

/// Form for creating or editing a product.
///
/// The draft is validated on submit; at most one field error is shown
/// at a time and the callback only ever receives a validated payload.
/// A callback failure surfaces as a status line, distinct from field
/// errors.
#[component]
pub fn ProductForm(
    #[prop(optional, into)] product: Option<Product>,
    #[prop(into)] on_submit: Callback<ProductPayload, Result<(), String>>,
) -> impl IntoView {
    let name = RwSignal::new(product.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let price = RwSignal::new(
        product
            .as_ref()
            .map(|p| p.price.to_string())
            .unwrap_or_default(),
    );
    let category = RwSignal::new(
        product
            .as_ref()
            .map(|p| p.category_id.to_string())
            .unwrap_or_default(),
    );
    let error = RwSignal::new(None::<FieldError>);
    let submit_error = RwSignal::new(None::<String>);

    let categories = Resource::new(|| (), |_| get_categories());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let draft = ProductDraft {
            name: name.get(),
            // A non-numeric price reads as missing and fails "required".
            price: price.with(|p| p.trim().parse::<f64>().ok()),
            category_id: category.with(|c| c.parse::<CategoryId>().ok()),
        };
        match draft.validate() {
            Ok(payload) => {
                error.set(None);
                match on_submit.run(payload) {
                    Ok(()) => submit_error.set(None),
                    Err(err) => submit_error.set(Some(err)),
                }
            }
            Err(e) => error.set(Some(e)),
        }
    };

    view! {
        <form class="product-form" on:submit=submit>
            {move || {
                error
                    .get()
                    .map(|e| view! { <p role="alert" class="error">{e.message}</p> })
            }}
            {move || {
                submit_error
                    .get()
                    .map(|e| view! { <p role="status" class="error">"Error: " {e}</p> })
            }}
            <input
                placeholder="Name"
                autofocus=true
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| price.set(event_target_value(&ev))
            />
            <Suspense fallback=move || view! { <SelectSkeleton/> }>
                {move || {
                    categories
                        .get()
                        .map(|result| {
                            result.ok().map(|categories| view! {
                                <select
                                    aria-label="category"
                                    on:change=move |ev| category.set(event_target_value(&ev))
                                >
                                    <option value="">"Select a category"</option>
                                    {categories
                                        .into_iter()
                                        .map(|c| {
                                            let value = c.id.to_string();
                                            let selected = value == category.get_untracked();
                                            view! {
                                                <option value=value selected=selected>
                                                    {c.name}
                                                </option>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </select>
                            })
                        })
                }}
            </Suspense>
            <button class="btn" type="submit">"Submit"</button>
        </form>
    }
}
