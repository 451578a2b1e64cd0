//! Driving port for shipping quotes.
//!
//! Inbound adapters depend on this trait rather than on the concrete service
//! so handlers can be exercised against mocks.

use async_trait::async_trait;

use crate::domain::{QuoteError, RequestContext, ShippingQuote, ShippingRequest};

/// Driving port quoting a single shipment.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingQuoteCommand: Send + Sync {
    /// Validate, price and assemble a quote for `request`.
    ///
    /// Fails on the first invalid field, in the order origin, destination,
    /// weight, dimensions.
    async fn quote(
        &self,
        ctx: &RequestContext,
        request: &ShippingRequest,
    ) -> Result<ShippingQuote, QuoteError>;
}
