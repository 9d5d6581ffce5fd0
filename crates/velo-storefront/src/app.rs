//! Application components and pages.

use leptos::logging;
use leptos::prelude::*;
use leptos::suspense::Suspense;
use leptos_meta::{provide_meta_context, Meta, Stylesheet, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use velo_commerce::catalog::ProductFilter;
use velo_commerce::ids::{CategoryId, ProductId};
use velo_commerce::validation::ProductPayload;

use crate::cart::{provide_cart, use_cart};
use crate::catalog::{get_product, get_products};
use crate::components::{
    CartSkeleton, CategorySelect, ProductDetail, ProductDetailSkeleton, ProductForm,
    ProductTable, QuantitySelector, SearchBox,
};

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_cart();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/style/main.css"/>
        <Meta name="description" content="VeloCommerce - storefront demo built in Rust"/>
        <Title text="VeloCommerce Store"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products") view=BrowseProductsPage/>
                    <Route path=path!("/products/:id") view=ProductPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/admin/products/new") view=NewProductPage/>
                    <Route path=path!("/admin/products/:id/edit") view=EditProductPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let cart = use_cart();

    view! {
        <header>
            <h1>"VeloCommerce"</h1>
            <nav>
                <a href="/">"Home"</a>
                <a href="/products">"Products"</a>
                <a href="/cart">"Cart (" {move || cart.item_count()} ")"</a>
                <a href="/admin/products/new">"Admin"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Built with VeloCommerce - pure Rust, client-rendered"</p>
        </footer>
    }
}

// ============================================================================
// Pages
// ============================================================================

/// Home page with hero section
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="hero">
            <h2>"Welcome to VeloCommerce"</h2>
            <p>"Browse the catalog and build your cart."</p>
            <a href="/products" class="btn">"Browse Products"</a>
        </div>
    }
}

/// Product browsing page with category and text filters
#[component]
fn BrowseProductsPage() -> impl IntoView {
    let filter = RwSignal::new(ProductFilter::default());

    view! {
        <h2>"Products"</h2>
        <div class="browse-controls">
            <SearchBox on_change=Callback::new(move |term: String| {
                filter.update(|f| f.text = Some(term))
            })/>
            <CategorySelect on_change=Callback::new(move |category: Option<CategoryId>| {
                filter.update(|f| f.category = category)
            })/>
        </div>
        <ProductTable filter=filter/>
    }
}

/// Single product page
#[component]
fn ProductPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            let raw = params.get().get("id").unwrap_or_default();
            match raw.parse::<ProductId>() {
                Ok(id) if id.value() > 0 => {
                    view! { <ProductDetail product_id=id/> }.into_any()
                }
                _ => view! { <p>"Invalid product id."</p> }.into_any(),
            }
        }}
    }
}

/// Shopping cart page
#[component]
fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let products = Resource::new(|| (), |_| get_products());

    view! {
        <h2>"Shopping Cart"</h2>
        <Suspense fallback=move || view! { <CartSkeleton/> }>
            {move || {
                products
                    .get()
                    .map(|result| match result {
                        Ok(products) => {
                            let items = cart.items();
                            if items.is_empty() {
                                view! {
                                    <p>"Your cart is empty."</p>
                                    <a href="/products">"Continue shopping"</a>
                                }
                                .into_any()
                            } else {
                                let total: f64 = items
                                    .iter()
                                    .filter_map(|item| {
                                        products
                                            .iter()
                                            .find(|p| p.id == item.product_id)
                                            .map(|p| p.price * f64::from(item.quantity))
                                    })
                                    .sum();
                                view! {
                                    <div class="cart">
                                        {items
                                            .into_iter()
                                            .filter_map(|item| {
                                                let product = products
                                                    .iter()
                                                    .find(|p| p.id == item.product_id)?
                                                    .clone();
                                                let subtotal =
                                                    product.price * f64::from(item.quantity);
                                                let name = product.name.clone();
                                                let price = product.price_display();
                                                Some(view! {
                                                    <div class="cart-line">
                                                        <strong>{name}</strong>
                                                        <span>
                                                            {price} " x " {item.quantity}
                                                        </span>
                                                        <QuantitySelector product=product/>
                                                        <strong>{format!("${subtotal}")}</strong>
                                                    </div>
                                                })
                                            })
                                            .collect::<Vec<_>>()}
                                        <div class="cart-total">
                                            <strong>"Total"</strong>
                                            <strong>{format!("${total}")}</strong>
                                        </div>
                                    </div>
                                }
                                .into_any()
                            }
                        }
                        Err(e) => view! {
                            <p class="error">"Error loading products: " {e.to_string()}</p>
                        }
                        .into_any(),
                    })
            }}
        </Suspense>
    }
}

/// Admin page for creating a product
#[component]
fn NewProductPage() -> impl IntoView {
    let saved = RwSignal::new(false);
    let on_submit = Callback::new(move |payload: ProductPayload| -> Result<(), String> {
        logging::log!("created product: {payload:?}");
        saved.set(true);
        Ok(())
    });

    view! {
        <h2>"New Product"</h2>
        <ProductForm on_submit=on_submit/>
        {move || saved.get().then(|| view! { <p role="status">"Product saved."</p> })}
    }
}

/// Admin page for editing an existing product
#[component]
fn EditProductPage() -> impl IntoView {
    let params = use_params_map();
    let saved = RwSignal::new(false);
    let on_submit = Callback::new(move |payload: ProductPayload| -> Result<(), String> {
        logging::log!("updated product: {payload:?}");
        saved.set(true);
        Ok(())
    });

    view! {
        <h2>"Edit Product"</h2>
        {move || {
            let raw = params.get().get("id").unwrap_or_default();
            match raw.parse::<ProductId>() {
                Ok(id) if id.value() > 0 => {
                    view! { <EditProductForm product_id=id on_submit=on_submit/> }.into_any()
                }
                _ => view! { <p>"Invalid product id."</p> }.into_any(),
            }
        }}
        {move || saved.get().then(|| view! { <p role="status">"Product saved."</p> })}
    }
}

/// Loads the product under edit, then hands it to the form.
#[component]
fn EditProductForm(
    product_id: ProductId,
    #[prop(into)] on_submit: Callback<ProductPayload, Result<(), String>>,
) -> impl IntoView {
    let product = Resource::new(move || product_id, get_product);

    view! {
        <Suspense fallback=move || view! { <ProductDetailSkeleton/> }>
            {move || {
                product
                    .get()
                    .map(|result| match result {
                        Ok(Some(product)) => view! {
                            <ProductForm product=product on_submit=on_submit/>
                        }
                        .into_any(),
                        Ok(None) => view! {
                            <p>"The given product was not found."</p>
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

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to Home"</a>
        </div>
    }
}
