//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod shipping_metrics;
mod shipping_quote_command;

#[cfg(test)]
pub use shipping_metrics::MockShippingMetrics;
pub use shipping_metrics::{
    NoOpShippingMetrics, ShippingErrorKind, ShippingMetrics, ShippingMetricsError,
};
#[cfg(test)]
pub use shipping_quote_command::MockShippingQuoteCommand;
pub use shipping_quote_command::ShippingQuoteCommand;
