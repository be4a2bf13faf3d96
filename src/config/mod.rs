use crate::core::{AppError, CurrencyConfig, Result};
use std::env;

pub mod shipping;

pub use shipping::ShippingConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storefront: StorefrontConfig,
    pub shipping: ShippingConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Culture of the rendering context
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub currency: CurrencyConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_vars(&|key: &str| env::var(key).ok())
    }

    /// Build configuration from a variable lookup
    pub fn from_vars(var: &impl Fn(&str) -> Option<String>) -> Result<Self> {
        let currency_code = var("STOREFRONT_CURRENCY").unwrap_or_else(|| "USD".to_string());
        let currency = CurrencyConfig::new(&currency_code).map_err(|_| {
            AppError::Configuration(format!("Invalid STOREFRONT_CURRENCY: {}", currency_code))
        })?;

        let config = Config {
            app: AppConfig {
                env: var("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
            storefront: StorefrontConfig { currency },
            shipping: ShippingConfig::from_vars(var)?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.shipping.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Shipping timeout must be greater than 0".to_string(),
            ));
        }

        if self.shipping.country.trim().is_empty() {
            return Err(AppError::Configuration(
                "Shipping country must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
