pub mod models;
pub mod services;

pub use models::{CommertialOffer, Seller, SkuCategory, SkuImage, SkuItem, SkuSpec};
pub use services::{
    max_sku_price, strip_url, SkuOption, SkuSelector, SkuSelectorEvent, SkuSelectorView, SpecGroup,
};
