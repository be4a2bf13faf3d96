use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipping option (service level agreement) offered for an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sla {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Carrier estimate such as `"5bd"`
    pub shipping_estimate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogisticsInfo {
    pub item_index: usize,
    #[serde(default)]
    pub slas: Vec<Sla>,
}

/// Result of a shipping estimate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingQuote {
    #[serde(default)]
    pub logistics_info: Vec<LogisticsInfo>,
}

impl ShippingQuote {
    /// All options across items, in response order
    pub fn slas(&self) -> impl Iterator<Item = &Sla> {
        self.logistics_info.iter().flat_map(|info| info.slas.iter())
    }

    /// Cheapest option, first one on ties
    pub fn cheapest(&self) -> Option<&Sla> {
        self.slas().fold(None, |best: Option<&Sla>, sla| match best {
            Some(best) if best.price <= sla.price => Some(best),
            _ => Some(sla),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.slas().next().is_none()
    }
}
