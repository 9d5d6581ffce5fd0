//! Product image gallery.

use leptos::prelude::*;

/// List of product images; renders nothing when there are no URLs.
#[component]
pub fn ProductImageGallery(image_urls: Vec<String>) -> impl IntoView {
    (!image_urls.is_empty()).then(|| view! {
        <ul class="image-gallery">
            {image_urls
                .into_iter()
                .map(|url| view! {
                    <li>
                        <img src=url alt="product image"/>
                    </li>
                })
                .collect::<Vec<_>>()}
        </ul>
    })
}
