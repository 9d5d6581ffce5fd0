//! Product catalog module.
//!
//! Contains the read-only product and category records, the provider
//! trait the storefront fetches them through, and in-memory filtering.

mod category;
mod filter;
mod product;
mod provider;

pub use category::Category;
pub use filter::ProductFilter;
pub use product::Product;
pub use provider::{CatalogProvider, InMemoryCatalog};
