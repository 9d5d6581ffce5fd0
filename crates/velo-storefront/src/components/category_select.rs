//! Category filter dropdown.

use leptos::prelude::*;
use leptos::suspense::Suspense;
use velo_commerce::ids::CategoryId;

use crate::catalog::get_categories;
use crate::components::SelectSkeleton;

/// Dropdown of catalog categories plus an "All" option.
///
/// Emits `None` for "All", `Some(id)` otherwise. When the category
/// fetch fails the dropdown is simply absent; products stay browsable
/// unfiltered, so no error is rendered here.
#[component]
pub fn CategorySelect(#[prop(into)] on_change: Callback<Option<CategoryId>>) -> impl IntoView {
    let categories = Resource::new(|| (), |_| get_categories());

    view! {
        <Suspense fallback=move || view! { <SelectSkeleton/> }>
            {move || {
                categories
                    .get()
                    .map(|result| {
                        result.ok().map(|categories| view! {
                            <select
                                aria-label="category"
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    on_change.run(value.parse::<CategoryId>().ok());
                                }
                            >
                                <option value="all">"All"</option>
                                {categories
                                    .into_iter()
                                    .map(|category| {
                                        let value = category.id.to_string();
                                        view! {
                                            <option value=value>{category.name}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        })
                    })
            }}
        </Suspense>
    }
}
