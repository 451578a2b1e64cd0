//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ShippingQuoteService;
use crate::domain::ports::{NoOpShippingMetrics, ShippingMetrics, ShippingQuoteCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Quote use-case behind `POST /calculate`.
    pub quotes: Arc<dyn ShippingQuoteCommand>,
    /// Request, latency and cost recorder.
    pub metrics: Arc<dyn ShippingMetrics>,
}

impl HttpState {
    /// Construct state from the quote port and a metrics recorder.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use shipping_calculator::domain::ShippingQuoteService;
    /// use shipping_calculator::domain::ports::NoOpShippingMetrics;
    /// use shipping_calculator::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(ShippingQuoteService::new()),
    ///     Arc::new(NoOpShippingMetrics),
    /// );
    /// let _quotes = state.quotes.clone();
    /// ```
    #[must_use]
    pub const fn new(
        quotes: Arc<dyn ShippingQuoteCommand>,
        metrics: Arc<dyn ShippingMetrics>,
    ) -> Self {
        Self { quotes, metrics }
    }
}

impl Default for HttpState {
    /// Real quote service with metrics disabled.
    fn default() -> Self {
        Self::new(
            Arc::new(ShippingQuoteService::new()),
            Arc::new(NoOpShippingMetrics),
        )
    }
}
