use serde::{Deserialize, Serialize};

/// Item line of a shipping estimate request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingItem {
    /// Quantity as a string, the way the shipping API expects it
    pub quantity: String,
    /// SKU id
    pub id: String,
    pub seller: u64,
}

impl ShippingItem {
    /// A single unit of `sku_id` sold by `seller`
    pub fn single(sku_id: impl Into<String>, seller: u64) -> Self {
        Self {
            quantity: "1".to_string(),
            id: sku_id.into(),
            seller,
        }
    }
}

/// Variables of the shipping estimate query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRequest {
    pub country: String,
    pub postal_code: String,
    pub items: Vec<ShippingItem>,
}
