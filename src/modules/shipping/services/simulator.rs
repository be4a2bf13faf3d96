use tracing::{debug, error, info};

use super::estimator_trait::ShippingEstimator;
use super::zipcode::{format_zipcode, is_complete_zipcode};
use crate::core::messages::SHIPPING_LABEL;
use crate::core::{MessageFormatter, Result};
use crate::modules::shipping::models::{ShippingItem, ShippingQuote, ShippingRequest};

/// Input to the shipping simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingEvent {
    /// Raw text typed into the zipcode field
    ZipcodeChanged(String),
    Submit,
    EstimateReceived(ShippingQuote),
    EstimateFailed(String),
}

/// Work the host must perform on behalf of the simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShippingCommand {
    FetchEstimate(ShippingRequest),
}

/// Shipping cost simulator for one SKU.
///
/// `Submit` moves to loading and asks the host to fetch; the outcome event
/// clears loading. A failed fetch keeps the last quote.
#[derive(Debug, Clone)]
pub struct ShippingSimulator {
    sku_id: String,
    seller: u64,
    country: String,
    zipcode: String,
    quote: Option<ShippingQuote>,
    loading: bool,
}

impl ShippingSimulator {
    pub fn new(sku_id: impl Into<String>, seller: u64, country: impl Into<String>) -> Self {
        Self {
            sku_id: sku_id.into(),
            seller,
            country: country.into(),
            zipcode: String::new(),
            quote: None,
            loading: false,
        }
    }

    /// Masked zipcode as displayed in the input
    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    pub fn quote(&self) -> Option<&ShippingQuote> {
        self.quote.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Localized label of the zipcode input
    pub fn input_label(&self, messages: &dyn MessageFormatter) -> String {
        messages.format_message(SHIPPING_LABEL, &[])
    }

    /// Submit button state
    pub fn can_submit(&self) -> bool {
        is_complete_zipcode(&self.zipcode)
    }

    pub fn request(&self) -> ShippingRequest {
        ShippingRequest {
            country: self.country.clone(),
            postal_code: self.zipcode.clone(),
            items: vec![ShippingItem::single(self.sku_id.clone(), self.seller)],
        }
    }

    pub fn handle(&mut self, event: ShippingEvent) -> Option<ShippingCommand> {
        match event {
            ShippingEvent::ZipcodeChanged(raw) => {
                self.zipcode = format_zipcode(&raw);
                None
            }
            ShippingEvent::Submit => {
                if self.loading || !self.can_submit() {
                    debug!(
                        "Ignoring submit (loading: {}, zipcode: {:?})",
                        self.loading, self.zipcode
                    );
                    return None;
                }
                self.loading = true;
                Some(ShippingCommand::FetchEstimate(self.request()))
            }
            ShippingEvent::EstimateReceived(quote) => {
                self.quote = Some(quote);
                self.loading = false;
                None
            }
            ShippingEvent::EstimateFailed(message) => {
                error!("Shipping estimate failed: {}", message);
                self.loading = false;
                None
            }
        }
    }

    /// Submit once through `estimator` and feed the outcome back.
    ///
    /// Returns `Ok(None)` when submitting is not allowed; fetch errors are
    /// recorded as `EstimateFailed` and then returned.
    pub async fn run<E>(&mut self, estimator: &E) -> Result<Option<&ShippingQuote>>
    where
        E: ShippingEstimator + ?Sized,
    {
        let Some(ShippingCommand::FetchEstimate(request)) = self.handle(ShippingEvent::Submit)
        else {
            return Ok(None);
        };

        match estimator.estimate(request).await {
            Ok(quote) => {
                info!("Shipping estimate ready for SKU {}", self.sku_id);
                self.handle(ShippingEvent::EstimateReceived(quote));
                Ok(self.quote.as_ref())
            }
            Err(e) => {
                self.handle(ShippingEvent::EstimateFailed(e.to_string()));
                Err(e)
            }
        }
    }
}
