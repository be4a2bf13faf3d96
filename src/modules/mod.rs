pub mod gallery;
pub mod pricing;
pub mod shipping;
pub mod sku;
