//! Quote assembly: turn a cost breakdown into the rendered quote.
//!
//! Both tiers are always priced. The standard price is rebuilt from the
//! breakdown without its express surcharge and the express price is that
//! standard price marked up by [`EXPRESS_SURCHARGE_RATE`].

use super::pricing::EXPRESS_SURCHARGE_RATE;
use super::shipping::{CostBreakdown, ServiceTier, ShippingOption, ShippingQuote};

/// Render a delivery estimate in Portuguese, e.g. `"1 dia"` or `"2 dias"`.
///
/// # Examples
/// ```
/// use shipping_calculator::domain::format_delivery_time;
///
/// assert_eq!(format_delivery_time(1), "1 dia");
/// assert_eq!(format_delivery_time(2), "2 dias");
/// ```
#[must_use]
pub fn format_delivery_time(days: u32) -> String {
    if days == 1 {
        "1 dia".to_owned()
    } else {
        format!("{days} dias")
    }
}

/// Assemble the caller-facing quote from a breakdown.
///
/// The headline cost and delivery time are those of the tier selected by
/// `expedited`. The breakdown's own express surcharge and total are not
/// consulted.
#[must_use]
pub fn assemble_quote(breakdown: &CostBreakdown, expedited: bool) -> ShippingQuote {
    let standard_cost =
        breakdown.base_cost + breakdown.weight_surcharge + breakdown.volume_surcharge;
    let express_cost = standard_cost * (1.0 + EXPRESS_SURCHARGE_RATE);

    let shipping_options = ServiceTier::ALL
        .into_iter()
        .map(|service| ShippingOption {
            service,
            cost: match service {
                ServiceTier::Standard => standard_cost,
                ServiceTier::Express => express_cost,
            },
            time: format_delivery_time(service.delivery_days()),
        })
        .collect();

    ShippingQuote {
        shipping_cost: if expedited {
            express_cost
        } else {
            standard_cost
        },
        estimated_delivery_time: format_delivery_time(
            ServiceTier::from_expedited(expedited).delivery_days(),
        ),
        available_services: ServiceTier::ALL.to_vec(),
        shipping_options,
    }
}
