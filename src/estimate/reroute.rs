use serde::Serialize;

use crate::compass::{resolve, Tightness, UserProfile};

/// Share of the neutral monthly spend assumed to be available for the milestone
/// each month. A tunable policy constant, not a property of the domain.
pub const SAVINGS_CAPACITY_SHARE: f64 = 0.10;
/// Days over which the "hold the goal" option spreads the unplanned expense.
pub const SPREAD_DAYS: f64 = 30.0;

/// Option A: keep the milestone date and absorb the expense by spending a little
/// less each day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoldGoalOption {
    pub daily_adjustment: i64,
}

/// Option B: keep today's pace and let the milestone slip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HoldPaceOption {
    pub days_delay: i64,
}

/// Two-sided tradeoff after an unplanned expense. Both sides are always present so
/// the caller presents a choice rather than a verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ReroutePlan {
    pub delta: f64,
    /// Assumed monthly savings capacity, at least 1.
    pub savings_capacity: f64,
    pub hold_goal: HoldGoalOption,
    pub hold_pace: HoldPaceOption,
}

/// Computes both rerouting options for an expense of `delta`.
///
/// A missing profile, or a delta that is not a positive finite amount, yields a plan
/// with both adjustments at zero.
pub fn reroute_after_expense(profile: Option<&UserProfile>, delta: f64) -> ReroutePlan {
    let Some(profile) = profile else {
        return ReroutePlan {
            delta,
            ..ReroutePlan::default()
        };
    };
    let spend_mid = resolve(&profile.monthly_spend, Tightness::Neutral);
    let spend_mid = if spend_mid.is_finite() { spend_mid } else { 0.0 };
    let savings_capacity = (spend_mid * SAVINGS_CAPACITY_SHARE).round().max(1.0);

    if !delta.is_finite() || delta <= 0.0 {
        tracing::debug!(delta, "reroute requested for non-positive expense");
        return ReroutePlan {
            delta,
            savings_capacity,
            ..ReroutePlan::default()
        };
    }

    ReroutePlan {
        delta,
        savings_capacity,
        hold_goal: HoldGoalOption {
            daily_adjustment: (delta / SPREAD_DAYS).round() as i64,
        },
        hold_pace: HoldPaceOption {
            days_delay: (delta / savings_capacity * SPREAD_DAYS).round() as i64,
        },
    }
}
