//! Pricing engine: base cost from a postal-code distance proxy plus
//! weight, volume and express surcharges.
//!
//! The distance proxy is the absolute difference between the numeric values
//! of both postal codes. It is a placeholder, not a geographic distance.
//! Every figure is `f64` in minor currency units and is never rounded here.

use super::shipping::{CostBreakdown, ServiceTier};
use super::validation::normalize_zipcode;

/// Flat starting price in minor units (10.00 in major units).
pub const BASE_COST: f64 = 1000.0;

/// Distances below this value are priced at [`BASE_COST`].
const SAME_REGION_DISTANCE: f64 = 1000.0;
/// Distance at which the base cost doubles.
const DISTANCE_SCALE: f64 = 10_000.0;

/// Share of the base cost charged per weight unit.
const WEIGHT_SURCHARGE_RATE: f64 = 0.10;
/// Weight unit in kilograms.
const WEIGHT_UNIT_KG: f64 = 0.5;

/// Share of the base cost charged per volume unit.
const VOLUME_SURCHARGE_RATE: f64 = 0.05;
/// Volume unit in cubic centimetres.
const VOLUME_UNIT_CM3: f64 = 1000.0;

/// Markup applied to the subtotal for express delivery.
pub const EXPRESS_SURCHARGE_RATE: f64 = 0.50;

/// Derive the base cost from the distance between two postal codes.
///
/// Both codes are normalised and parsed as numbers. When either fails to
/// parse the flat [`BASE_COST`] is returned; this fallback is deliberate and
/// never surfaces as an error.
///
/// # Examples
/// ```
/// use shipping_calculator::domain::{calculate_base_cost, BASE_COST};
///
/// assert_eq!(calculate_base_cost("1414", "1428"), BASE_COST);
/// assert_eq!(calculate_base_cost("01000-000", "02000-000"), 2000.0);
/// ```
#[must_use]
pub fn calculate_base_cost(origin: &str, destination: &str) -> f64 {
    let parsed = (
        normalize_zipcode(origin).parse::<f64>(),
        normalize_zipcode(destination).parse::<f64>(),
    );
    let (Ok(origin_value), Ok(destination_value)) = parsed else {
        tracing::debug!(
            origin,
            destination,
            "postal codes are not numeric; using flat base cost"
        );
        return BASE_COST;
    };

    let distance = (origin_value - destination_value).abs();
    if distance < SAME_REGION_DISTANCE {
        return BASE_COST;
    }
    BASE_COST * (1.0 + distance / DISTANCE_SCALE)
}

/// Apply weight, volume and express surcharges to a base cost.
///
/// Weight and volume units are fractional: 0.75 kg is 1.5 weight units.
///
/// # Examples
/// ```
/// use shipping_calculator::domain::calculate_details;
///
/// let breakdown = calculate_details(1000.0, 0.5, 1000.0, false);
/// assert_eq!(breakdown.weight_surcharge, 100.0);
/// assert_eq!(breakdown.volume_surcharge, 50.0);
/// assert_eq!(breakdown.total_cost, 1150.0);
/// ```
#[must_use]
pub fn calculate_details(base_cost: f64, weight: f64, volume: f64, expedited: bool) -> CostBreakdown {
    let weight_surcharge = base_cost * WEIGHT_SURCHARGE_RATE * (weight / WEIGHT_UNIT_KG);
    let volume_surcharge = base_cost * VOLUME_SURCHARGE_RATE * (volume / VOLUME_UNIT_CM3);
    let subtotal = base_cost + weight_surcharge + volume_surcharge;

    let express_surcharge = if expedited {
        subtotal * EXPRESS_SURCHARGE_RATE
    } else {
        0.0
    };

    CostBreakdown {
        base_cost,
        weight_surcharge,
        volume_surcharge,
        express_surcharge,
        total_cost: subtotal + express_surcharge,
        estimated_days: ServiceTier::from_expedited(expedited).delivery_days(),
    }
}

#[cfg(test)]
mod tests {
    //! Pricing formulas on inputs that are exact in binary floating point.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::close_codes("1414", "1428")]
    #[case::identical("01310100", "01310100")]
    #[case::just_below_threshold("10000", "10999")]
    #[case::unparseable("abc", "def")]
    #[case::one_side_unparseable("01310100", "abcd")]
    #[case::empty("", "")]
    fn flat_base_cost(#[case] origin: &str, #[case] destination: &str) {
        assert_eq!(calculate_base_cost(origin, destination), BASE_COST);
    }

    #[test]
    fn distant_codes_scale_linearly() {
        assert_eq!(calculate_base_cost("01000-000", "02000-000"), 2000.0);
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(
            calculate_base_cost("20000", "10000"),
            calculate_base_cost("10000", "20000")
        );
        assert_eq!(calculate_base_cost("20000", "10000"), 2000.0);
    }

    #[test]
    fn threshold_distance_is_scaled() {
        assert_eq!(calculate_base_cost("11000", "10000"), 1100.0);
    }

    #[test]
    fn standard_breakdown_has_no_express_surcharge() {
        let breakdown = calculate_details(1000.0, 0.5, 1000.0, false);

        assert_eq!(breakdown.base_cost, 1000.0);
        assert_eq!(breakdown.weight_surcharge, 100.0);
        assert_eq!(breakdown.volume_surcharge, 50.0);
        assert_eq!(breakdown.express_surcharge, 0.0);
        assert_eq!(breakdown.total_cost, 1150.0);
        assert_eq!(breakdown.estimated_days, 2);
    }

    #[test]
    fn express_breakdown_marks_up_subtotal() {
        let breakdown = calculate_details(1000.0, 1.0, 1000.0, true);

        assert_eq!(breakdown.weight_surcharge, 200.0);
        assert_eq!(breakdown.volume_surcharge, 50.0);
        assert_eq!(breakdown.express_surcharge, 625.0);
        assert_eq!(breakdown.total_cost, 1875.0);
        assert_eq!(breakdown.estimated_days, 1);
    }

    #[rstest]
    #[case(0.25, 500.0)]
    #[case(2.0, 4000.0)]
    #[case(5.0, 15_000.0)]
    fn standard_total_follows_closed_form(#[case] weight: f64, #[case] volume: f64) {
        let base = 1000.0;
        let breakdown = calculate_details(base, weight, volume, false);
        let expected = base * (1.0 + 0.10 * weight / 0.5 + 0.05 * volume / 1000.0);
        assert!(
            (breakdown.total_cost - expected).abs() < 1e-9,
            "total {} should match closed form {expected}",
            breakdown.total_cost
        );
    }

    #[test]
    fn fractional_weight_units_are_not_rounded() {
        let breakdown = calculate_details(1000.0, 0.75, 0.0, false);
        assert_eq!(breakdown.weight_surcharge, 150.0);
    }
}
