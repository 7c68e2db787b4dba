use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    compass::{resolve, NumericRange, SpendView, UserProfile},
    ledger::{days_left_in_month, Ledger, TimeWindow},
    utils::{clamp, finite_or},
};

use super::{ordered, sanitize};

/// Display bound for a per-day freedom figure.
pub const MAX_DAILY_FREEDOM: f64 = 20_000.0;
/// Monthly spend is spread over a flat month of this many days for the daily budget.
pub const FLAT_MONTH_DAYS: f64 = 30.0;

/// Calendar-day model of today's freedom: the monthly spend range spread over the
/// days left in the current month (today included, at least one).
///
/// Each end is clamped to `[0, 20000]`. A missing profile yields `{0, 0}`.
pub fn daily_freedom(profile: Option<&UserProfile>, today: NaiveDate) -> NumericRange {
    let Some(profile) = profile else {
        return NumericRange::ZERO;
    };
    let spend = sanitize(profile.monthly_spend, 0.0, "monthly_spend");
    let days_left = f64::from(days_left_in_month(today));

    let min = clamp(spend.min() / days_left, 0.0, MAX_DAILY_FREEDOM);
    let max = clamp(spend.max() / days_left, 0.0, MAX_DAILY_FREEDOM);
    ordered(min, max)
}

/// Single-day budget: the stance-resolved monthly spend over a flat 30-day month,
/// scaled by the perspective toggle. Never negative.
pub fn daily_budget(profile: Option<&UserProfile>, view: SpendView) -> f64 {
    let Some(profile) = profile else {
        return 0.0;
    };
    let monthly = finite_or(resolve(&profile.monthly_spend, profile.tightness), 0.0);
    (monthly / FLAT_MONTH_DAYS * view.factor()).max(0.0)
}

/// Today's budget against what the ledger shows already spent today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TodayBudget {
    pub budget_per_day: f64,
    pub spent_today: f64,
    pub free_today: f64,
    /// Share of the budget still free, in `[0, 1]`.
    pub fill: f64,
}

pub fn today_budget(
    profile: Option<&UserProfile>,
    ledger: &Ledger,
    today: &TimeWindow,
    view: SpendView,
) -> TodayBudget {
    let budget_per_day = daily_budget(profile, view);
    let spent_today = ledger.spent_in(today);
    let free_today = (budget_per_day - spent_today).max(0.0);
    TodayBudget {
        budget_per_day,
        spent_today,
        free_today,
        fill: clamp(free_today / budget_per_day.max(1.0), 0.0, 1.0),
    }
}
