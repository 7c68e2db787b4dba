use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    compass::{NumericRange, SpendView, UserProfile},
    ledger::{Ledger, LedgerSummary, MonthKey, TimeWindow},
    time::Clock,
};

use super::{
    freedom::{daily_freedom, today_budget, TodayBudget},
    milestone::milestone_progress,
    reroute::{reroute_after_expense, ReroutePlan},
    runway::runway_months,
    safety::{safety_level, SafetyLevel},
    stress::{stress_test, StressOutcome, StressScenario},
};

/// Inputs that are neither profile nor ledger: the moment of evaluation, the local
/// offset used to cut days and months, and the perspective toggle.
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
    pub view: SpendView,
}

impl EvaluationContext {
    pub fn from_clock(clock: &dyn Clock, view: SpendView) -> Self {
        Self {
            now: clock.now(),
            offset: clock.offset(),
            view,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.offset).date_naive()
    }

    pub fn current_month(&self) -> MonthKey {
        MonthKey::of(&self.now, &self.offset)
    }

    pub fn today_window(&self) -> TimeWindow {
        TimeWindow::local_day(self.today(), &self.offset)
    }
}

/// Display metrics for one evaluation. Recomputed on every call, never persisted.
///
/// With no profile every profile-derived figure is zero and `available` is false;
/// ledger-derived figures are still reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub available: bool,
    pub runway_months: NumericRange,
    pub daily_freedom: NumericRange,
    pub milestone_progress: f64,
    pub safety: SafetyLevel,
    pub today: TodayBudget,
    pub month: LedgerSummary,
    pub preserved_total: f64,
}

/// Query facade over the estimation functions. Holds no state.
pub struct MetricsService;

impl MetricsService {
    pub fn evaluate(
        profile: Option<&UserProfile>,
        ledger: &Ledger,
        ctx: &EvaluationContext,
    ) -> DerivedMetrics {
        if profile.is_none() {
            tracing::debug!("no profile available, reporting zeroed metrics");
        }
        DerivedMetrics {
            available: profile.is_some(),
            runway_months: runway_months(profile),
            daily_freedom: daily_freedom(profile, ctx.today()),
            milestone_progress: milestone_progress(profile),
            safety: safety_level(profile),
            today: today_budget(profile, ledger, &ctx.today_window(), ctx.view),
            month: ledger.summarize_month(ctx.current_month(), &ctx.offset),
            preserved_total: ledger.preserved_total(),
        }
    }

    pub fn reroute(profile: Option<&UserProfile>, delta: f64) -> ReroutePlan {
        reroute_after_expense(profile, delta)
    }

    pub fn stress(
        profile: Option<&UserProfile>,
        scenario: StressScenario,
        spend_override: Option<f64>,
    ) -> StressOutcome {
        stress_test(profile, scenario, spend_override)
    }

    pub fn month_report(
        ledger: &Ledger,
        month: MonthKey,
        ctx: &EvaluationContext,
    ) -> LedgerSummary {
        ledger.summarize_month(month, &ctx.offset)
    }
}
