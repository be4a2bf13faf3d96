use async_trait::async_trait;

use crate::core::Result;
use crate::modules::shipping::models::{ShippingQuote, ShippingRequest};

/// Source of shipping estimates. One request, one response; implementations
/// do not retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingEstimator: Send + Sync {
    async fn estimate(&self, request: ShippingRequest) -> Result<ShippingQuote>;
}
