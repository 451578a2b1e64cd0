//! Prometheus adapter for shipping quote metrics.
//!
//! Registers four families: a request counter, an error counter labelled by
//! reason, and histograms for calculation time and quoted cost.

use std::time::Duration;

use async_trait::async_trait;
use prometheus::{Counter, CounterVec, Histogram, HistogramOpts, Opts, Registry};

use crate::domain::ports::{ShippingErrorKind, ShippingMetrics, ShippingMetricsError};

const DURATION_BUCKETS_MS: &[f64] = &[0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 25.0, 50.0, 100.0];
const COST_BUCKETS: &[f64] = &[
    1_000.0, 1_250.0, 1_500.0, 2_000.0, 3_000.0, 5_000.0, 10_000.0, 25_000.0, 100_000.0,
];

/// Prometheus-backed recorder for quote requests.
pub struct PrometheusShippingMetrics {
    requests_total: Counter,
    errors_total: CounterVec,
    duration_ms: Histogram,
    cost: Histogram,
}

impl PrometheusShippingMetrics {
    /// Create and register the metric families with the provided registry.
    ///
    /// # Errors
    ///
    /// Returns an error when Prometheus rejects metric registration.
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let requests_total = Counter::with_opts(Opts::new(
            "shipping_calculate_total",
            "Total shipping quote requests",
        ))?;
        let errors_total = CounterVec::new(
            Opts::new(
                "shipping_calculate_errors_total",
                "Failed shipping quote requests by reason",
            ),
            &["reason"],
        )?;
        let duration_ms = Histogram::with_opts(
            HistogramOpts::new(
                "shipping_calculate_duration_ms",
                "Time spent calculating a shipping quote in milliseconds",
            )
            .buckets(DURATION_BUCKETS_MS.to_vec()),
        )?;
        let cost = Histogram::with_opts(
            HistogramOpts::new(
                "shipping_calculate_cost",
                "Quoted shipping cost in minor currency units",
            )
            .buckets(COST_BUCKETS.to_vec()),
        )?;
        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(errors_total.clone()))?;
        registry.register(Box::new(duration_ms.clone()))?;
        registry.register(Box::new(cost.clone()))?;
        Ok(Self {
            requests_total,
            errors_total,
            duration_ms,
            cost,
        })
    }
}

#[async_trait]
impl ShippingMetrics for PrometheusShippingMetrics {
    async fn record_request(&self) -> Result<(), ShippingMetricsError> {
        self.requests_total.inc();
        Ok(())
    }

    async fn record_success(
        &self,
        duration: Duration,
        cost: f64,
    ) -> Result<(), ShippingMetricsError> {
        self.duration_ms.observe(duration.as_secs_f64() * 1_000.0);
        self.cost.observe(cost);
        Ok(())
    }

    async fn record_error(&self, kind: ShippingErrorKind) -> Result<(), ShippingMetricsError> {
        self.errors_total
            .get_metric_with_label_values(&[kind.as_label()])
            .map_err(|err| ShippingMetricsError::export(err.to_string()))?
            .inc();
        Ok(())
    }
}
