//! Storefront Components Library
//!
//! Logic behind the storefront product components: price display, SKU
//! selector, shipping simulator and the product image slider.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::gallery;
pub use modules::pricing;
pub use modules::shipping;
pub use modules::sku;
