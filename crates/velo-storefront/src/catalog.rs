//! Catalog access for the storefront.
//!
//! Pages fetch through these free functions so `Resource::new` sees
//! plain async calls; the backing [`InMemoryCatalog`] stands in for
//! the HTTP data layer behind the same provider trait.

use std::sync::OnceLock;

use velo_commerce::catalog::{CatalogProvider, Category, InMemoryCatalog, Product};
use velo_commerce::error::CatalogError;
use velo_commerce::ids::{CategoryId, ProductId};

fn catalog() -> &'static InMemoryCatalog {
    static CATALOG: OnceLock<InMemoryCatalog> = OnceLock::new();
    CATALOG.get_or_init(seed_catalog)
}

/// Fetch all products.
pub async fn get_products() -> Result<Vec<Product>, CatalogError> {
    catalog().fetch_products().await
}

/// Fetch all categories.
pub async fn get_categories() -> Result<Vec<Category>, CatalogError> {
    catalog().fetch_categories().await
}

/// Fetch a single product by ID.
pub async fn get_product(id: ProductId) -> Result<Option<Product>, CatalogError> {
    catalog().fetch_product(id).await
}

fn seed_catalog() -> InMemoryCatalog {
    let groceries = CategoryId::new(1);
    let electronics = CategoryId::new(2);
    let household = CategoryId::new(3);

    let categories = vec![
        Category::new(groceries, "Groceries"),
        Category::new(electronics, "Electronics"),
        Category::new(household, "Household"),
    ];

    let products = vec![
        Product::new(ProductId::new(1), "Milk", 5.0, groceries)
            .with_description("Whole milk, one gallon."),
        Product::new(ProductId::new(2), "Bread", 3.0, groceries)
            .with_description("Sourdough loaf, baked daily."),
        Product::new(ProductId::new(3), "Eggs", 4.0, groceries),
        Product::new(ProductId::new(4), "Mechanical Keyboard", 89.0, electronics)
            .with_description(
                "A tenkeyless mechanical keyboard with hot-swappable switches, \
                 PBT keycaps and a detachable USB-C cable. The aluminium top \
                 plate keeps the board rigid under heavy typing while the \
                 gasket-mounted plate softens the bottom-out. Ships with a \
                 keycap puller, a switch puller and a spare set of stabilizer \
                 pads. Firmware is fully remappable, supports three onboard \
                 profiles and works without any companion software on Linux, \
                 macOS and Windows alike.",
            )
            .with_images(vec![
                "/images/keyboard-front.jpg".to_string(),
                "/images/keyboard-side.jpg".to_string(),
            ]),
        Product::new(ProductId::new(5), "Monitor", 249.0, electronics)
            .with_description("27-inch 1440p IPS display.")
            .with_images(vec!["/images/monitor.jpg".to_string()]),
        Product::new(ProductId::new(6), "Laundry Detergent", 12.0, household),
        Product::new(ProductId::new(7), "Sponges", 2.0, household),
    ];

    InMemoryCatalog::new(products, categories)
}
