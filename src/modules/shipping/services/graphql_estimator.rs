use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use super::estimator_trait::ShippingEstimator;
use crate::config::ShippingConfig;
use crate::core::{AppError, Result};
use crate::modules::shipping::models::{ShippingQuote, ShippingRequest};

pub const GET_SHIPPING_ESTIMATES: &str = r#"query getShippingEstimates($country: String, $postalCode: String, $items: [ShippingItem]) {
  shipping(country: $country, postalCode: $postalCode, items: $items) {
    logisticsInfo {
      itemIndex
      slas {
        id
        name
        price
        shippingEstimate
      }
    }
  }
}"#;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a> {
    query: &'a str,
    operation_name: &'a str,
    variables: &'a ShippingRequest,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<ShippingData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct ShippingData {
    shipping: Option<ShippingQuote>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// Shipping estimator backed by the storefront GraphQL endpoint
pub struct GraphqlShippingEstimator {
    client: Client,
    endpoint: String,
}

impl GraphqlShippingEstimator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &ShippingConfig) -> Result<Self> {
        Self::new(
            config.graphql_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Extract the quote from a GraphQL response body
pub fn parse_response(body: &str) -> Result<ShippingQuote> {
    let response: GraphqlResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(AppError::shipping(format!(
            "GraphQL errors: {}",
            messages.join("; ")
        )));
    }

    response
        .data
        .and_then(|data| data.shipping)
        .ok_or_else(|| AppError::shipping("Response has no shipping data"))
}

#[async_trait]
impl ShippingEstimator for GraphqlShippingEstimator {
    async fn estimate(&self, request: ShippingRequest) -> Result<ShippingQuote> {
        info!(
            "Requesting shipping estimate for {} item(s) to {} ({})",
            request.items.len(),
            request.postal_code,
            request.country
        );

        let body = GraphqlRequest {
            query: GET_SHIPPING_ESTIMATES,
            operation_name: "getShippingEstimates",
            variables: &request,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::shipping(format!("Shipping API error: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            error!("Shipping API returned {}: {}", status, error_body);
            return Err(AppError::shipping(format!(
                "Shipping API error {}: {}",
                status, error_body
            )));
        }

        let text = response.text().await?;
        let quote = parse_response(&text)?;

        info!(
            "Received {} shipping option(s)",
            quote.slas().count()
        );

        Ok(quote)
    }
}
