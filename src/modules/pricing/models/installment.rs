use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// One installment plan offered for a product.
///
/// Deserializing goes through [`RawInstallment::validate`], so a decoded
/// plan always has a positive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawInstallment")]
pub struct Installment {
    /// Number of payments, always > 0
    pub number_of_installments: u32,
    /// Amount of each payment
    pub value: Decimal,
    pub has_interest: bool,
}

impl Installment {
    pub fn new(number_of_installments: u32, value: Decimal, has_interest: bool) -> Result<Self> {
        if number_of_installments == 0 {
            return Err(AppError::contract(
                "NumberOfInstallments must be greater than 0",
            ));
        }

        Ok(Self {
            number_of_installments,
            value,
            has_interest,
        })
    }

    pub fn is_interest_free(&self) -> bool {
        !self.has_interest
    }
}

/// Installment as it arrives from the catalog payload, before validation.
///
/// `hasInterest` wins when present; otherwise a non-zero `InterestRate`
/// marks the plan as carrying interest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInstallment {
    #[serde(rename = "NumberOfInstallments", alias = "numberOfInstallments")]
    pub number_of_installments: Option<i64>,
    #[serde(rename = "Value", alias = "value")]
    pub value: Option<Decimal>,
    #[serde(rename = "InterestRate", alias = "interestRate")]
    pub interest_rate: Option<Decimal>,
    #[serde(rename = "hasInterest", skip_serializing_if = "Option::is_none")]
    pub has_interest: Option<bool>,
}

impl RawInstallment {
    /// Validate into an [`Installment`]; `index` is used in error messages
    pub fn validate(&self, index: usize) -> Result<Installment> {
        let count = self.number_of_installments.ok_or_else(|| {
            AppError::contract(format!(
                "Installments[{}].NumberOfInstallments is required",
                index
            ))
        })?;

        let count = u32::try_from(count)
            .ok()
            .filter(|c| *c > 0)
            .ok_or_else(|| {
                AppError::contract(format!(
                    "Installments[{}].NumberOfInstallments must be a positive integer, got {}",
                    index, count
                ))
            })?;

        let value = self.value.ok_or_else(|| {
            AppError::contract(format!("Installments[{}].Value is required", index))
        })?;

        let has_interest = self
            .has_interest
            .unwrap_or_else(|| self.interest_rate.is_some_and(|rate| !rate.is_zero()));

        Installment::new(count, value, has_interest)
    }
}

impl TryFrom<RawInstallment> for Installment {
    type Error = AppError;

    fn try_from(raw: RawInstallment) -> Result<Self> {
        raw.validate(0)
    }
}
