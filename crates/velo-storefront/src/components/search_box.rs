//! Product search input.

use leptos::prelude::*;

/// Search input that emits the term when Enter is pressed.
///
/// An empty term is never emitted.
#[component]
pub fn SearchBox(#[prop(into)] on_change: Callback<String>) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-box"
            placeholder="Search products..."
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    let term = event_target_value(&ev);
                    if !term.is_empty() {
                        on_change.run(term);
                    }
                }
            }
        />
    }
}
