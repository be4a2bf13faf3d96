use crate::core::{AppError, Result};

/// Shipping estimate endpoint settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingConfig {
    pub graphql_url: String,
    pub timeout_secs: u64,
    /// Country sent with every estimate request
    pub country: String,
}

impl ShippingConfig {
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(ShippingConfig {
            graphql_url: var("SHIPPING_GRAPHQL_URL")
                .unwrap_or_else(|| "http://localhost:8080/graphql".to_string()),
            timeout_secs: var("SHIPPING_TIMEOUT_SECS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .map_err(|_| {
                    AppError::Configuration("Invalid SHIPPING_TIMEOUT_SECS".to_string())
                })?,
            country: var("SHIPPING_COUNTRY").unwrap_or_else(|| "BRA".to_string()),
        })
    }
}
