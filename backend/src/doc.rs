//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the quote endpoint and the health probes
//! - **Schemas**: request and response bodies plus the domain error wrappers
//!   ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep domain types free of
//!   utoipa
//!
//! The generated specification is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::shipping::{
    CalculateShippingRequestBody, CalculateShippingResponseBody, DimensionsBody,
    ShippingOptionBody,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shipping calculator API",
        description = "Quotes shipping prices and delivery estimates for parcels."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::shipping::calculate_shipping,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CalculateShippingRequestBody,
        CalculateShippingResponseBody,
        DimensionsBody,
        ShippingOptionBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "shipping", description = "Shipping price quotes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
