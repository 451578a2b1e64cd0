//! Input validation for shipping requests.
//!
//! Checks are independent and return the first failure only; callers decide
//! the order in which fields are inspected.

/// Largest package volume accepted, in cubic centimetres.
pub const MAX_VOLUME_CM3: f64 = 15_000.0;

const MIN_WEIGHT_KG: f64 = 0.0;
const MIN_ZIPCODE_DIGITS: usize = 4;
const MAX_ZIPCODE_DIGITS: usize = 8;

/// Dimension axis named in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionAxis {
    /// Package length.
    Length,
    /// Package width.
    Width,
    /// Package height.
    Height,
}

impl DimensionAxis {
    /// Field label used in messages, e.g. `dimensions.length`.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Length => "dimensions.length",
            Self::Width => "dimensions.width",
            Self::Height => "dimensions.height",
        }
    }
}

/// A single rejected input value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShippingValidationError {
    /// The postal code was empty.
    #[error("{field} is required")]
    MissingZipcode {
        /// Field label, e.g. `origin_zipcode`.
        field: String,
    },
    /// The postal code was not 4 to 8 digits after normalisation.
    #[error("{field} must be a valid zipcode format (4-8 digits)")]
    MalformedZipcode {
        /// Field label, e.g. `origin_zipcode`.
        field: String,
    },
    /// The weight was zero or negative.
    #[error("weight must be greater than 0")]
    NonPositiveWeight,
    /// A dimension was zero or negative.
    #[error("{} must be positive", .axis.field())]
    NonPositiveDimension {
        /// Offending axis.
        axis: DimensionAxis,
    },
    /// The package is larger than [`MAX_VOLUME_CM3`].
    #[error(
        "package volume ({volume:.2} cm³) exceeds maximum allowed volume ({max:.2} cm³)",
        max = MAX_VOLUME_CM3
    )]
    VolumeExceeded {
        /// Computed volume in cubic centimetres.
        volume: f64,
    },
}

impl ShippingValidationError {
    /// Machine-readable reason, surfaced in error details.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingZipcode { .. } => "required",
            Self::MalformedZipcode { .. } => "invalid_format",
            Self::NonPositiveWeight | Self::NonPositiveDimension { .. } => "must_be_positive",
            Self::VolumeExceeded { .. } => "volume_exceeded",
        }
    }
}

/// Strip hyphens and spaces from a postal code.
///
/// No other whitespace is touched.
///
/// # Examples
/// ```
/// use shipping_calculator::domain::normalize_zipcode;
///
/// assert_eq!(normalize_zipcode("01000-000"), "01000000");
/// assert_eq!(normalize_zipcode("01 000\t"), "01000\t");
/// ```
#[must_use]
pub fn normalize_zipcode(raw: &str) -> String {
    raw.chars().filter(|c| !matches!(c, '-' | ' ')).collect()
}

/// Validate a postal code for the given field label.
///
/// Digits are checked with a plain character scan rather than a pattern
/// engine so hostile input cannot trigger backtracking.
///
/// # Errors
/// Returns [`ShippingValidationError::MissingZipcode`] for empty input and
/// [`ShippingValidationError::MalformedZipcode`] when the normalised value is
/// not 4 to 8 ASCII digits.
///
/// # Examples
/// ```
/// use shipping_calculator::domain::validate_zipcode;
///
/// assert!(validate_zipcode("01310-100", "origin_zipcode").is_ok());
/// let err = validate_zipcode("123", "origin_zipcode").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "origin_zipcode must be a valid zipcode format (4-8 digits)"
/// );
/// ```
pub fn validate_zipcode(raw: &str, field: &str) -> Result<(), ShippingValidationError> {
    if raw.is_empty() {
        return Err(ShippingValidationError::MissingZipcode {
            field: field.to_owned(),
        });
    }

    let normalized = normalize_zipcode(raw);
    let malformed = || ShippingValidationError::MalformedZipcode {
        field: field.to_owned(),
    };

    if !(MIN_ZIPCODE_DIGITS..=MAX_ZIPCODE_DIGITS).contains(&normalized.len()) {
        return Err(malformed());
    }
    if !normalized.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(malformed());
    }
    Ok(())
}

/// Validate that the weight is strictly positive.
///
/// # Errors
/// Returns [`ShippingValidationError::NonPositiveWeight`] when `weight <= 0`.
pub fn validate_weight(weight: f64) -> Result<(), ShippingValidationError> {
    if weight <= MIN_WEIGHT_KG {
        return Err(ShippingValidationError::NonPositiveWeight);
    }
    Ok(())
}

/// Validate dimensions: each positive, then the volume cap.
///
/// # Errors
/// Returns the first failing check, in the order length, width, height,
/// volume.
pub fn validate_dimensions(
    length: f64,
    width: f64,
    height: f64,
) -> Result<(), ShippingValidationError> {
    let axes = [
        (DimensionAxis::Length, length),
        (DimensionAxis::Width, width),
        (DimensionAxis::Height, height),
    ];
    if let Some((axis, _)) = axes.into_iter().find(|(_, value)| *value <= 0.0) {
        return Err(ShippingValidationError::NonPositiveDimension { axis });
    }

    let volume = calculate_volume(length, width, height);
    if volume > MAX_VOLUME_CM3 {
        return Err(ShippingValidationError::VolumeExceeded { volume });
    }
    Ok(())
}

/// Multiply the three dimensions. Performs no validation.
#[must_use]
pub fn calculate_volume(length: f64, width: f64, height: f64) -> f64 {
    length * width * height
}
