//! Domain port surface for quote request metrics.
//!
//! Handlers record through this port so the Prometheus exporter stays an
//! outbound concern and tests can run without a registry.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording quote metrics.
    pub enum ShippingMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } =>
            "shipping metrics exporter failed: {message}",
    }
}

/// Reason label for failed quote requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ShippingErrorKind {
    /// The body was missing or was not valid JSON for the request shape.
    InvalidBody,
    /// A field failed validation.
    InvalidRequest,
}

impl ShippingErrorKind {
    /// Label value used by exporters.
    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::InvalidBody => "invalid_body",
            Self::InvalidRequest => "invalid_request",
        }
    }
}

impl fmt::Display for ShippingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Metrics recording port for quote requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingMetrics: Send + Sync {
    /// Count one incoming quote request, valid or not.
    async fn record_request(&self) -> Result<(), ShippingMetricsError>;

    /// Record the calculation time and quoted cost of a successful request.
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    /// use shipping_calculator::domain::ports::{NoOpShippingMetrics, ShippingMetrics};
    ///
    /// # async fn demo() {
    /// let metrics = NoOpShippingMetrics;
    /// let result = metrics
    ///     .record_success(Duration::from_millis(3), 1150.0)
    ///     .await;
    /// assert!(result.is_ok());
    /// # }
    /// ```
    async fn record_success(&self, duration: Duration, cost: f64)
    -> Result<(), ShippingMetricsError>;

    /// Count one failed request.
    async fn record_error(&self, kind: ShippingErrorKind) -> Result<(), ShippingMetricsError>;
}

/// No-op implementation used when metrics are disabled or in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpShippingMetrics;

#[async_trait]
impl ShippingMetrics for NoOpShippingMetrics {
    async fn record_request(&self) -> Result<(), ShippingMetricsError> {
        Ok(())
    }

    async fn record_success(
        &self,
        _duration: Duration,
        _cost: f64,
    ) -> Result<(), ShippingMetricsError> {
        Ok(())
    }

    async fn record_error(&self, _kind: ShippingErrorKind) -> Result<(), ShippingMetricsError> {
        Ok(())
    }
}
