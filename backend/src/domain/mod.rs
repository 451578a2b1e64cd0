//! Domain primitives and services for shipping quotes.
//!
//! Purpose: Define strongly typed shipping values, validation rules and the
//! pricing engine. Nothing here performs I/O; adapters live under
//! `inbound` and `outbound`.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - ShippingRequest / ShippingQuote: quote input and rendered output.
//! - ShippingQuoteService: validation, pricing and assembly.
//! - QuoteError: field-scoped quote failure.
//! - TraceId / RequestContext: request correlation.

pub mod error;
pub mod ports;
pub mod pricing;
pub mod quote;
pub mod quote_error;
pub mod request_context;
pub mod shipping;
pub mod shipping_quote_service;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode};
pub use self::pricing::{BASE_COST, EXPRESS_SURCHARGE_RATE, calculate_base_cost, calculate_details};
pub use self::quote::{assemble_quote, format_delivery_time};
pub use self::quote_error::{QuoteError, QuoteField};
pub use self::request_context::RequestContext;
pub use self::shipping::{
    CostBreakdown, PackageDimensions, ServiceTier, ShippingOption, ShippingQuote, ShippingRequest,
};
pub use self::shipping_quote_service::ShippingQuoteService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{
    DimensionAxis, MAX_VOLUME_CM3, ShippingValidationError, calculate_volume, normalize_zipcode,
    validate_dimensions, validate_weight, validate_zipcode,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use shipping_calculator::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("invalid request body"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
