pub mod sku_selector;

pub use sku_selector::{
    max_sku_price, strip_url, SkuOption, SkuSelector, SkuSelectorEvent, SkuSelectorView, SpecGroup,
};
