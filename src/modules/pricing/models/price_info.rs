use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::installment::{Installment, RawInstallment};
use crate::core::{AppError, Result};

/// Validated prices for one product render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInfo {
    pub list_price: Decimal,
    /// Expected to be <= list_price; not enforced here
    pub selling_price: Decimal,
    #[serde(default)]
    pub installments: Vec<Installment>,
}

impl PriceInfo {
    pub fn new(list_price: Decimal, selling_price: Decimal) -> Self {
        Self {
            list_price,
            selling_price,
            installments: Vec::new(),
        }
    }

    pub fn with_installments(mut self, installments: Vec<Installment>) -> Self {
        self.installments = installments;
        self
    }

    pub fn has_different_prices(&self) -> bool {
        self.selling_price != self.list_price
    }

    /// `list_price - selling_price`, negative when the selling price is higher
    pub fn savings(&self) -> Decimal {
        self.list_price - self.selling_price
    }
}

/// Price payload as supplied by the host; `validate` turns it into a
/// [`PriceInfo`] or a contract violation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceInput {
    #[serde(rename = "ListPrice", alias = "listPrice")]
    pub list_price: Option<Decimal>,
    #[serde(rename = "Price", alias = "SellingPrice", alias = "sellingPrice")]
    pub selling_price: Option<Decimal>,
    #[serde(rename = "Installments", alias = "installments")]
    pub installments: Option<Vec<RawInstallment>>,
}

impl PriceInput {
    pub fn validate(&self) -> Result<PriceInfo> {
        let list_price = self
            .list_price
            .ok_or_else(|| AppError::contract("ListPrice is required"))?;
        let selling_price = self
            .selling_price
            .ok_or_else(|| AppError::contract("Price is required"))?;

        let installments = self
            .installments
            .iter()
            .flatten()
            .enumerate()
            .map(|(index, raw)| raw.validate(index))
            .collect::<Result<Vec<_>>>()?;

        Ok(PriceInfo {
            list_price,
            selling_price,
            installments,
        })
    }
}

/// Which price lines to show. Defaults match the product price component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceDisplayOptions {
    pub show_list_price: bool,
    pub show_labels: bool,
    pub show_installments: bool,
    pub show_savings: bool,
}

impl Default for PriceDisplayOptions {
    fn default() -> Self {
        Self {
            show_list_price: true,
            show_labels: true,
            show_installments: false,
            show_savings: false,
        }
    }
}

/// Price input together with display options, as one JSON document:
/// `{"price": {...}, "options": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricePayload {
    pub price: PriceInput,
    #[serde(default)]
    pub options: PriceDisplayOptions,
}

impl PricePayload {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
