//! Shipping quote value objects.
//!
//! Every type here lives for a single request: built from the inbound
//! payload, priced, rendered and dropped. None carries identity.

use std::fmt;

/// Package dimensions in centimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackageDimensions {
    /// Length in centimetres.
    pub length: f64,
    /// Width in centimetres.
    pub width: f64,
    /// Height in centimetres.
    pub height: f64,
}

impl PackageDimensions {
    /// Construct dimensions from length, width and height.
    #[must_use]
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }
}

/// Input for a shipping quote.
///
/// Fields are raw caller input; nothing here has been validated yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRequest {
    /// Origin postal code as supplied by the caller.
    pub origin: String,
    /// Destination postal code as supplied by the caller.
    pub destination: String,
    /// Package weight in kilograms.
    pub weight: f64,
    /// Package dimensions in centimetres.
    pub dimensions: PackageDimensions,
    /// Whether the express tier is the quoted one.
    pub expedited: bool,
}

/// Delivery service tiers offered for every quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceTier {
    /// Two-day delivery at the base price.
    Standard,
    /// Next-day delivery with a 50% markup.
    Express,
}

impl ServiceTier {
    /// Every tier in the order they are presented to callers.
    pub const ALL: [Self; 2] = [Self::Standard, Self::Express];

    /// Stable wire name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }

    /// Promised delivery time in days.
    #[must_use]
    pub const fn delivery_days(self) -> u32 {
        match self {
            Self::Standard => 2,
            Self::Express => 1,
        }
    }

    /// Tier selected by the `expedited` flag of a request.
    #[must_use]
    pub const fn from_expedited(expedited: bool) -> Self {
        if expedited {
            Self::Express
        } else {
            Self::Standard
        }
    }
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intermediate pricing figures, in minor currency units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    /// Distance-derived starting price.
    pub base_cost: f64,
    /// Surcharge proportional to weight.
    pub weight_surcharge: f64,
    /// Surcharge proportional to volume.
    pub volume_surcharge: f64,
    /// Markup applied when express delivery was requested, zero otherwise.
    pub express_surcharge: f64,
    /// Sum of the base cost and every surcharge.
    pub total_cost: f64,
    /// Delivery estimate for the requested tier.
    pub estimated_days: u32,
}

/// One priced service tier.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingOption {
    /// Tier being priced.
    pub service: ServiceTier,
    /// Price in minor currency units.
    pub cost: f64,
    /// Localised delivery time, e.g. `"2 dias"`.
    pub time: String,
}

/// Rendered quote returned to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingQuote {
    /// Price of the requested tier.
    pub shipping_cost: f64,
    /// Localised delivery time of the requested tier.
    pub estimated_delivery_time: String,
    /// Names of every tier on offer.
    pub available_services: Vec<ServiceTier>,
    /// Every tier priced, standard first.
    pub shipping_options: Vec<ShippingOption>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, ServiceTier::Express)]
    #[case(false, ServiceTier::Standard)]
    fn tier_follows_expedited_flag(#[case] expedited: bool, #[case] expected: ServiceTier) {
        assert_eq!(ServiceTier::from_expedited(expedited), expected);
    }

    #[test]
    fn tiers_are_listed_standard_first() {
        let names: Vec<&str> = ServiceTier::ALL.iter().map(|tier| tier.as_str()).collect();
        assert_eq!(names, ["standard", "express"]);
    }
}
