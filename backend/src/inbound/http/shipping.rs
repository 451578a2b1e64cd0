//! Shipping quote HTTP handler.
//!
//! ```text
//! POST /calculate
//! ```
//!
//! The body is decoded here rather than through `web::Json` so malformed
//! payloads are counted and answered with the shared error envelope.

use std::time::Instant;

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::{ShippingErrorKind, ShippingMetricsError};
use crate::domain::{
    Error, PackageDimensions, RequestContext, ShippingOption, ShippingQuote, ShippingRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Package dimensions in centimetres.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, ToSchema)]
pub struct DimensionsBody {
    /// Longest side.
    #[schema(example = 10.0)]
    pub length: f64,
    /// Width.
    #[schema(example = 10.0)]
    pub width: f64,
    /// Height.
    #[schema(example = 10.0)]
    pub height: f64,
}

/// Request payload for a shipping quote.
///
/// Absent fields take their zero value and are then rejected by validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct CalculateShippingRequestBody {
    /// Sender postal code; `-` and spaces are ignored.
    #[schema(example = "01310-100")]
    pub origin_zipcode: String,
    /// Recipient postal code; `-` and spaces are ignored.
    #[schema(example = "20040-020")]
    pub destination_zipcode: String,
    /// Weight in kilograms.
    #[schema(example = 0.5)]
    pub weight: f64,
    /// Package dimensions in centimetres.
    pub dimensions: DimensionsBody,
    /// Quote the express tier as the headline cost.
    pub is_express: bool,
}

impl From<CalculateShippingRequestBody> for ShippingRequest {
    fn from(body: CalculateShippingRequestBody) -> Self {
        let DimensionsBody {
            length,
            width,
            height,
        } = body.dimensions;
        Self {
            origin: body.origin_zipcode,
            destination: body.destination_zipcode,
            weight: body.weight,
            dimensions: PackageDimensions::new(length, width, height),
            expedited: body.is_express,
        }
    }
}

/// One priced service tier.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ShippingOptionBody {
    /// Tier name, `standard` or `express`.
    #[schema(example = "standard")]
    pub service: String,
    /// Price in minor currency units.
    #[schema(example = 1150.0)]
    pub cost: f64,
    /// Delivery estimate.
    #[schema(example = "2 dias")]
    pub time: String,
}

impl From<ShippingOption> for ShippingOptionBody {
    fn from(option: ShippingOption) -> Self {
        Self {
            service: option.service.as_str().to_owned(),
            cost: option.cost,
            time: option.time,
        }
    }
}

/// Response payload for a shipping quote.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct CalculateShippingResponseBody {
    /// Price of the requested tier in minor currency units.
    #[schema(example = 1150.0)]
    pub shipping_cost: f64,
    /// Delivery estimate of the requested tier.
    #[schema(example = "2 dias")]
    pub estimated_delivery_time: String,
    /// Every tier that can be booked.
    #[schema(example = json!(["standard", "express"]))]
    pub available_services: Vec<String>,
    /// Price and estimate for every tier, standard first.
    pub shipping_options: Vec<ShippingOptionBody>,
}

impl From<ShippingQuote> for CalculateShippingResponseBody {
    fn from(quote: ShippingQuote) -> Self {
        Self {
            shipping_cost: quote.shipping_cost,
            estimated_delivery_time: quote.estimated_delivery_time,
            available_services: quote
                .available_services
                .iter()
                .map(|tier| tier.as_str().to_owned())
                .collect(),
            shipping_options: quote.shipping_options.into_iter().map(Into::into).collect(),
        }
    }
}

fn log_metrics_failure(result: Result<(), ShippingMetricsError>) {
    if let Err(error) = result {
        warn!(%error, "failed to record shipping metrics");
    }
}

/// Quote a shipment for both service tiers.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateShippingRequestBody,
    responses(
        (status = 200, description = "Shipping quote", body = CalculateShippingResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema)
    ),
    tags = ["shipping"],
    operation_id = "calculateShipping"
)]
#[post("/calculate")]
pub async fn calculate_shipping(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<web::Json<CalculateShippingResponseBody>> {
    let started = Instant::now();
    log_metrics_failure(state.metrics.record_request().await);

    let payload: CalculateShippingRequestBody = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(error) => {
            warn!(%error, "invalid request body");
            log_metrics_failure(
                state
                    .metrics
                    .record_error(ShippingErrorKind::InvalidBody)
                    .await,
            );
            return Err(Error::invalid_request("invalid request body"));
        }
    };

    let ctx = RequestContext::from_current();
    let request = ShippingRequest::from(payload);
    match state.quotes.quote(&ctx, &request).await {
        Ok(quote) => {
            log_metrics_failure(
                state
                    .metrics
                    .record_success(started.elapsed(), quote.shipping_cost)
                    .await,
            );
            Ok(web::Json(quote.into()))
        }
        Err(error) => {
            log_metrics_failure(
                state
                    .metrics
                    .record_error(ShippingErrorKind::InvalidRequest)
                    .await,
            );
            Err(error.into())
        }
    }
}

#[cfg(test)]
#[path = "shipping_tests.rs"]
mod tests;
