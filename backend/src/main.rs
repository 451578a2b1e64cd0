//! Shipping calculator entry-point: loads settings, installs tracing and
//! serves the quote endpoint, health probes and OpenAPI docs.

mod server;

#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use actix_web::web;
use ortho_config::OrthoConfig as _;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use shipping_calculator::config::ServerSettings;
use shipping_calculator::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr());
    #[cfg(feature = "metrics")]
    let config = {
        let namespace = settings.metrics_namespace();
        config.with_metrics(initialize_metrics(|| {
            PrometheusMetricsBuilder::new(&namespace)
                .endpoint("/metrics")
                .build()
        }))
    };

    let server = create_server(health_state, config)?;
    info!(
        application = settings.application_name(),
        addr = %settings.bind_addr(),
        "shipping calculator listening"
    );
    server.await
}

/// Build Prometheus middleware, logging and continuing without it on failure.
#[cfg(feature = "metrics")]
fn initialize_metrics<F, E>(make: F) -> Option<PrometheusMetrics>
where
    F: FnOnce() -> Result<PrometheusMetrics, E>,
    E: std::fmt::Display,
{
    match make() {
        Ok(metrics) => Some(metrics),
        Err(error) => {
            warn!(%error, "Prometheus metrics disabled: initialisation failed");
            None
        }
    }
}
