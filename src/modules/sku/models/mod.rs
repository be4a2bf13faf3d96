pub mod sku_item;

pub use sku_item::{CommertialOffer, Seller, SkuCategory, SkuImage, SkuItem, SkuSpec};
