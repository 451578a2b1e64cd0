//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

#[cfg(feature = "metrics")]
use metrics::{MetricsLayer, build_shipping_metrics};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use shipping_calculator::Trace;
#[cfg(debug_assertions)]
use shipping_calculator::doc::ApiDoc;
#[cfg(not(feature = "metrics"))]
use shipping_calculator::domain::ports::NoOpShippingMetrics;
use shipping_calculator::domain::ports::ShippingMetrics;
use shipping_calculator::domain::ShippingQuoteService;
use shipping_calculator::inbound::http::health::{HealthState, live, ready};
use shipping_calculator::inbound::http::shipping::calculate_shipping;
use shipping_calculator::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

#[cfg(feature = "metrics")]
fn shipping_metrics(config: &ServerConfig) -> std::io::Result<Arc<dyn ShippingMetrics>> {
    build_shipping_metrics(config.prometheus.as_ref())
}

#[cfg(not(feature = "metrics"))]
fn shipping_metrics(_config: &ServerConfig) -> std::io::Result<Arc<dyn ShippingMetrics>> {
    Ok(Arc::new(NoOpShippingMetrics))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(calculate_shipping)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] containing the bind address and optional metrics.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when metric registration, binding the socket
/// or starting the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::new(
        Arc::new(ShippingQuoteService::new()),
        shipping_metrics(&config)?,
    ));
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
