use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    compass::{resolve, NumericRange, Tightness, UserProfile},
    utils::{clamp, finite_or, round1},
};

use super::{runway::runway_months, MAX_MONTHS};

/// What-if situations run against the safety net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StressScenario {
    /// Income stops; spending continues as usual.
    JobLoss,
    /// Income stops and spending runs higher than usual.
    Illness,
}

impl StressScenario {
    pub fn spend_factor(&self) -> f64 {
        match self {
            StressScenario::JobLoss => 1.0,
            StressScenario::Illness => 1.3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StressScenario::JobLoss => "job-loss",
            StressScenario::Illness => "illness",
        }
    }
}

impl fmt::Display for StressScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StressScenario {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "job-loss" | "quit" => Ok(StressScenario::JobLoss),
            "illness" => Ok(StressScenario::Illness),
            other => Err(format!("unknown scenario `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StressOutcome {
    pub scenario: StressScenario,
    /// Monthly spend the scenario was run with, before the scenario factor.
    pub monthly_spend: f64,
    /// Months the neutral safety net lasts, one decimal, in `[0, 120]`.
    pub months: f64,
    pub runway: NumericRange,
}

/// Runs `scenario` against the profile. `spend_override` replaces the neutral monthly
/// spend when given. A missing profile yields zero months.
pub fn stress_test(
    profile: Option<&UserProfile>,
    scenario: StressScenario,
    spend_override: Option<f64>,
) -> StressOutcome {
    let Some(profile) = profile else {
        return StressOutcome {
            scenario,
            monthly_spend: spend_override.map_or(0.0, |spend| finite_or(spend, 0.0)),
            months: 0.0,
            runway: NumericRange::ZERO,
        };
    };
    let savings = finite_or(resolve(&profile.safety_net, Tightness::Neutral), 0.0);
    let monthly_spend = spend_override
        .unwrap_or_else(|| resolve(&profile.monthly_spend, Tightness::Neutral));
    let monthly_spend = finite_or(monthly_spend, 1.0);
    let effective = monthly_spend.max(1.0) * scenario.spend_factor();

    StressOutcome {
        scenario,
        monthly_spend,
        months: clamp(round1(savings / effective), 0.0, MAX_MONTHS),
        runway: runway_months(Some(profile)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(
            NumericRange::new(20_000.0, 40_000.0),
            NumericRange::new(6_000.0, 10_000.0),
        )
    }

    #[test]
    fn job_loss_uses_neutral_figures() {
        let outcome = stress_test(Some(&profile()), StressScenario::JobLoss, None);
        assert_eq!(outcome.monthly_spend, 8_000.0);
        assert_eq!(outcome.months, 3.8);
        assert_eq!(outcome.runway.min(), 2.0);
    }

    #[test]
    fn illness_inflates_spend() {
        let outcome = stress_test(Some(&profile()), StressScenario::Illness, None);
        // 30000 / (8000 * 1.3) = 2.88...
        assert_eq!(outcome.months, 2.9);
    }

    #[test]
    fn override_replaces_spend() {
        let outcome = stress_test(Some(&profile()), StressScenario::JobLoss, Some(3_000.0));
        assert_eq!(outcome.monthly_spend, 3_000.0);
        assert_eq!(outcome.months, 10.0);

        let floored = stress_test(Some(&profile()), StressScenario::JobLoss, Some(0.0));
        assert_eq!(floored.months, MAX_MONTHS);
    }

    #[test]
    fn scenario_names_round_trip() {
        assert_eq!("quit".parse(), Ok(StressScenario::JobLoss));
        assert_eq!("illness".parse(), Ok(StressScenario::Illness));
        assert!("flood".parse::<StressScenario>().is_err());
        let absent = stress_test(None, StressScenario::Illness, None);
        assert_eq!(absent.months, 0.0);
    }
}
