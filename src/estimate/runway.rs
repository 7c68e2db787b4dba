use crate::{
    compass::{NumericRange, UserProfile},
    utils::clamp,
};

use super::{ordered, sanitize, MAX_MONTHS};

/// How many months the safety net sustains current spending, as a worst/best envelope.
///
/// The pairing is crossed: the low end divides the smallest savings by the largest
/// spend, the high end the largest savings by the smallest spend. Spend is floored at
/// 1 and both ends are clamped to `[0, 120]`. A missing profile yields `{0, 0}`.
pub fn runway_months(profile: Option<&UserProfile>) -> NumericRange {
    let Some(profile) = profile else {
        return NumericRange::ZERO;
    };
    let safety_net = sanitize(profile.safety_net, 0.0, "safety_net");
    let spend = sanitize(profile.monthly_spend, 1.0, "monthly_spend");

    let min_months = clamp(safety_net.min() / spend.max().max(1.0), 0.0, MAX_MONTHS);
    let max_months = clamp(safety_net.max() / spend.min().max(1.0), 0.0, MAX_MONTHS);
    ordered(min_months, max_months)
}
