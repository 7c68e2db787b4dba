//! The estimation engine: pure derivations from the latest profile and ledger snapshot.
//!
//! Every function here is total. Missing profiles yield zeroed metrics, non-finite
//! inputs are replaced by documented fallbacks, and every output is clamped into its
//! display bound.

pub mod freedom;
pub mod metrics;
pub mod milestone;
pub mod reroute;
pub mod runway;
pub mod safety;
pub mod stress;

pub use freedom::{daily_budget, daily_freedom, today_budget, TodayBudget};
pub use metrics::{DerivedMetrics, EvaluationContext, MetricsService};
pub use milestone::milestone_progress;
pub use reroute::{reroute_after_expense, HoldGoalOption, HoldPaceOption, ReroutePlan};
pub use runway::runway_months;
pub use safety::{safety_level, SafetyLevel};
pub use stress::{stress_test, StressOutcome, StressScenario};

use crate::{compass::NumericRange, utils::finite_or};

/// Upper display bound for any months figure.
pub const MAX_MONTHS: f64 = 120.0;

/// Replaces non-finite bounds with `fallback`, logging the substitution.
pub(crate) fn sanitize(range: NumericRange, fallback: f64, what: &str) -> NumericRange {
    if range.is_finite() {
        return range;
    }
    tracing::debug!(input = what, fallback, "non-finite range bound replaced");
    NumericRange::new(finite_or(range.min(), fallback), finite_or(range.max(), fallback))
}

/// Orders two already-bounded figures into a range.
pub(crate) fn ordered(a: f64, b: f64) -> NumericRange {
    NumericRange::new(a, b)
}
