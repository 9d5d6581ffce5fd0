//! Storefront components.

mod category_select;
mod expandable_text;
mod product_detail;
mod product_form;
mod product_image_gallery;
mod product_table;
mod quantity_selector;
mod search_box;
mod skeletons;

pub use category_select::CategorySelect;
pub use expandable_text::ExpandableText;
pub use product_detail::ProductDetail;
pub use product_form::ProductForm;
pub use product_image_gallery::ProductImageGallery;
pub use product_table::ProductTable;
pub use quantity_selector::QuantitySelector;
pub use search_box::SearchBox;
pub use skeletons::{CartSkeleton, ProductDetailSkeleton, ProductTableSkeleton, SelectSkeleton};
