//! Shipping quote domain service.
//!
//! Validates a request, prices it and assembles the quote. The calculation
//! is synchronous and holds no state, so one instance is shared by every
//! worker.

use async_trait::async_trait;
use tracing::{info, warn};

use super::ports::ShippingQuoteCommand;
use super::pricing::{calculate_base_cost, calculate_details};
use super::quote::assemble_quote;
use super::quote_error::{QuoteError, QuoteField};
use super::shipping::{ShippingQuote, ShippingRequest};
use super::validation::{
    ShippingValidationError, calculate_volume, validate_dimensions, validate_weight,
    validate_zipcode,
};
use super::RequestContext;

/// Service implementing [`ShippingQuoteCommand`].
///
/// # Examples
/// ```
/// use shipping_calculator::TraceId;
/// use shipping_calculator::domain::{
///     PackageDimensions, RequestContext, ShippingQuoteService, ShippingRequest,
/// };
///
/// let request = ShippingRequest {
///     origin: "01310-100".into(),
///     destination: "01310-200".into(),
///     weight: 0.5,
///     dimensions: PackageDimensions::new(10.0, 10.0, 10.0),
///     expedited: false,
/// };
/// let ctx = RequestContext::new(TraceId::generate());
/// let quote = ShippingQuoteService::new()
///     .calculate(&ctx, &request)
///     .expect("valid request");
/// assert_eq!(quote.shipping_cost, 1150.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShippingQuoteService;

impl ShippingQuoteService {
    /// Create the service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Quote `request` synchronously.
    ///
    /// # Errors
    /// Returns [`QuoteError::InvalidField`] for the first field that fails
    /// validation.
    pub fn calculate(
        &self,
        ctx: &RequestContext,
        request: &ShippingRequest,
    ) -> Result<ShippingQuote, QuoteError> {
        let _span = ctx.span().entered();
        let dims = request.dimensions;
        let volume = calculate_volume(dims.length, dims.width, dims.height);

        info!(
            origin = %request.origin,
            destination = %request.destination,
            weight = request.weight,
            volume,
            "shipping quote requested"
        );

        check(
            QuoteField::OriginZipcode,
            &request.origin,
            validate_zipcode(&request.origin, QuoteField::OriginZipcode.as_str()),
        )?;
        check(
            QuoteField::DestinationZipcode,
            &request.destination,
            validate_zipcode(&request.destination, QuoteField::DestinationZipcode.as_str()),
        )?;
        check(QuoteField::Weight, &request.weight, validate_weight(request.weight))?;
        check(
            QuoteField::Dimensions,
            &format_args!("{}x{}x{}", dims.length, dims.width, dims.height),
            validate_dimensions(dims.length, dims.width, dims.height),
        )?;

        let base_cost = calculate_base_cost(&request.origin, &request.destination);
        let breakdown = calculate_details(base_cost, request.weight, volume, request.expedited);
        info!(
            base_cost = breakdown.base_cost,
            weight_surcharge = breakdown.weight_surcharge,
            volume_surcharge = breakdown.volume_surcharge,
            express_surcharge = breakdown.express_surcharge,
            "shipping cost calculated"
        );

        let quote = assemble_quote(&breakdown, request.expedited);
        info!(
            cost = quote.shipping_cost,
            time = %quote.estimated_delivery_time,
            "shipping quote ready"
        );
        Ok(quote)
    }
}

fn check(
    field: QuoteField,
    value: &dyn std::fmt::Display,
    result: Result<(), ShippingValidationError>,
) -> Result<(), QuoteError> {
    result.map_err(|source| {
        warn!(param = %field, value = %value, error = %source, "invalid parameter");
        QuoteError::invalid_field(field, source)
    })
}

#[async_trait]
impl ShippingQuoteCommand for ShippingQuoteService {
    async fn quote(
        &self,
        ctx: &RequestContext,
        request: &ShippingRequest,
    ) -> Result<ShippingQuote, QuoteError> {
        self.calculate(ctx, request)
    }
}

#[cfg(test)]
#[path = "shipping_quote_service_tests.rs"]
mod tests;
