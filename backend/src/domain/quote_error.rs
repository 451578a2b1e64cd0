//! Failures raised while quoting a shipment.

use std::fmt;

use serde_json::json;

use super::validation::ShippingValidationError;
use super::Error;

/// Request field category named in quote failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteField {
    /// `origin_zipcode`.
    OriginZipcode,
    /// `destination_zipcode`.
    DestinationZipcode,
    /// `weight`.
    Weight,
    /// Any of `dimensions.{length,width,height}` or the derived volume.
    Dimensions,
}

impl QuoteField {
    /// Wire name of the field category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OriginZipcode => "origin_zipcode",
            Self::DestinationZipcode => "destination_zipcode",
            Self::Weight => "weight",
            Self::Dimensions => "dimensions",
        }
    }
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quote failure. Every variant is a client error and never retryable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum QuoteError {
    /// A request field failed validation.
    #[error("invalid {field}: {source}")]
    InvalidField {
        /// Field category that failed.
        field: QuoteField,
        /// Underlying validation failure.
        source: ShippingValidationError,
    },
}

impl QuoteError {
    /// Wrap a validation failure for `field`.
    #[must_use]
    pub fn invalid_field(field: QuoteField, source: ShippingValidationError) -> Self {
        Self::InvalidField { field, source }
    }

    /// Field category that caused the failure.
    #[must_use]
    pub fn field(&self) -> QuoteField {
        match self {
            Self::InvalidField { field, .. } => *field,
        }
    }
}

impl From<QuoteError> for Error {
    fn from(value: QuoteError) -> Self {
        let message = value.to_string();
        match value {
            QuoteError::InvalidField { field, source } => Error::invalid_request(message)
                .with_details(json!({
                    "field": field.as_str(),
                    "code": source.code(),
                })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(
        QuoteField::OriginZipcode,
        ShippingValidationError::MissingZipcode { field: "origin_zipcode".into() },
        "invalid origin_zipcode: origin_zipcode is required",
    )]
    #[case(
        QuoteField::Weight,
        ShippingValidationError::NonPositiveWeight,
        "invalid weight: weight must be greater than 0",
    )]
    fn display_names_field_category(
        #[case] field: QuoteField,
        #[case] source: ShippingValidationError,
        #[case] expected: &str,
    ) {
        assert_eq!(QuoteError::invalid_field(field, source).to_string(), expected);
    }

    #[test]
    fn converts_into_invalid_request_with_details() {
        let err: Error = QuoteError::invalid_field(
            QuoteField::DestinationZipcode,
            ShippingValidationError::MalformedZipcode {
                field: "destination_zipcode".into(),
            },
        )
        .into();

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            err.message(),
            "invalid destination_zipcode: destination_zipcode must be a valid zipcode format (4-8 digits)"
        );
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "destination_zipcode", "code": "invalid_format" }))
        );
    }
}
