use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuImage {
    pub image_url: String,
    #[serde(default)]
    pub image_label: Option<String>,
}

/// Offer terms of a seller. Field names follow the catalog API, typo included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommertialOffer {
    #[serde(rename = "Price")]
    pub price: Decimal,
    #[serde(rename = "AvailableQuantity", default)]
    pub available_quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub commertial_offer: CommertialOffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuCategory {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuSpec {
    pub name: String,
    pub categories: Vec<SkuCategory>,
}

/// One SKU of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuItem {
    pub name: String,
    #[serde(default)]
    pub images: Vec<SkuImage>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub specs: Option<Vec<SkuSpec>>,
}

impl SkuItem {
    /// Offer of the first seller, which is the one displayed
    pub fn offer(&self) -> Option<&CommertialOffer> {
        self.sellers.first().map(|seller| &seller.commertial_offer)
    }

    pub fn is_available(&self) -> bool {
        self.offer()
            .is_some_and(|offer| offer.available_quantity > 0)
    }

    pub fn first_image(&self) -> Option<&SkuImage> {
        self.images.first()
    }
}
