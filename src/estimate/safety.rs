use serde::Serialize;

use crate::{
    compass::{resolve, Tightness, UserProfile},
    utils::{clamp, finite_or},
};

use super::MAX_MONTHS;

/// Months of runway that fill the gauge completely.
pub const FULL_GAUGE_MONTHS: f64 = 12.0;

/// Point reading of the safety net shown as a fill level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SafetyLevel {
    /// Neutral savings over neutral spend, in `[0, 120]`.
    pub mid_months: f64,
    /// `mid_months / 12`, in `[0, 1]`.
    pub fill: f64,
}

pub fn safety_level(profile: Option<&UserProfile>) -> SafetyLevel {
    let Some(profile) = profile else {
        return SafetyLevel::default();
    };
    let savings = finite_or(resolve(&profile.safety_net, Tightness::Neutral), 0.0);
    let spend = finite_or(resolve(&profile.monthly_spend, Tightness::Neutral), 1.0);
    let mid_months = clamp(savings / spend.max(1.0), 0.0, MAX_MONTHS);
    SafetyLevel {
        mid_months,
        fill: clamp(mid_months / FULL_GAUGE_MONTHS, 0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compass::NumericRange;

    #[test]
    fn level_uses_neutral_midpoints() {
        let profile = UserProfile::new(
            NumericRange::new(20_000.0, 40_000.0),
            NumericRange::new(6_000.0, 10_000.0),
        )
        .with_tightness(Tightness::Tight);
        let level = safety_level(Some(&profile));
        assert_eq!(level.mid_months, 3.75);
        assert_eq!(level.fill, 0.3125);
    }

    #[test]
    fn gauge_saturates() {
        let profile = UserProfile::new(NumericRange::exact(1e9), NumericRange::exact(0.0));
        let level = safety_level(Some(&profile));
        assert_eq!(level.mid_months, MAX_MONTHS);
        assert_eq!(level.fill, 1.0);
        assert_eq!(safety_level(None), SafetyLevel::default());
    }
}
