//! VeloCommerce storefront client.
//!
//! A client-rendered Leptos app over the `velo-commerce` domain crate:
//!
//! - Category-filtered product browsing with quantity selectors
//! - Product detail pages
//! - A shared shopping cart provided once via context
//! - An admin product form with field validation

pub mod app;
pub mod cart;
pub mod catalog;
pub mod components;

pub use app::App;
