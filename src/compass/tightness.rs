use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::range::NumericRange;

/// The user's declared risk posture when a single number must stand in for a range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tightness {
    /// Most conservative reading.
    Tight,
    #[default]
    #[serde(alias = "ok")]
    Neutral,
    /// Most generous reading.
    Loose,
}

/// Collapses `range` into one scalar according to `tightness`.
///
/// Every component that needs a point estimate goes through here, so changing the
/// default stance moves every downstream figure together.
pub fn resolve(range: &NumericRange, tightness: Tightness) -> f64 {
    match tightness {
        Tightness::Tight => range.min(),
        Tightness::Neutral => range.midpoint(),
        Tightness::Loose => range.max(),
    }
}

impl Tightness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tightness::Tight => "tight",
            Tightness::Neutral => "neutral",
            Tightness::Loose => "loose",
        }
    }
}

impl fmt::Display for Tightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tightness {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tight" | "conservative" => Ok(Tightness::Tight),
            "neutral" | "ok" => Ok(Tightness::Neutral),
            "loose" | "generous" => Ok(Tightness::Loose),
            other => Err(format!("unknown tightness `{other}`")),
        }
    }
}

/// Perspective toggle applied on top of the resolved daily budget.
///
/// Independent from [`Tightness`]: the stance picks the point in the range, the view
/// scales the resulting per-day figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpendView {
    Tighter,
    #[default]
    AsIs,
    Looser,
}

impl SpendView {
    pub fn factor(&self) -> f64 {
        match self {
            SpendView::Tighter => 0.8,
            SpendView::AsIs => 1.0,
            SpendView::Looser => 1.2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpendView::Tighter => "tighter",
            SpendView::AsIs => "as-is",
            SpendView::Looser => "looser",
        }
    }
}

impl fmt::Display for SpendView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (x{:.1})", self.as_str(), self.factor())
    }
}

impl FromStr for SpendView {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tighter" | "tight" => Ok(SpendView::Tighter),
            "as-is" | "asis" | "normal" => Ok(SpendView::AsIs),
            "looser" | "wide" => Ok(SpendView::Looser),
            other => Err(format!("unknown view `{other}`")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_picks_bound_or_midpoint() {
        let range = NumericRange::new(6_000.0, 10_000.0);
        assert_eq!(resolve(&range, Tightness::Tight), 6_000.0);
        assert_eq!(resolve(&range, Tightness::Neutral), 8_000.0);
        assert_eq!(resolve(&range, Tightness::Loose), 10_000.0);
    }

    #[test]
    fn resolve_is_monotonic_in_stance() {
        let ranges = [
            NumericRange::new(0.0, 1.0),
            NumericRange::new(15_000.0, 25_000.0),
            NumericRange::new(-40.0, 12.5),
            NumericRange::exact(3.0),
        ];
        for range in ranges {
            let tight = resolve(&range, Tightness::Tight);
            let neutral = resolve(&range, Tightness::Neutral);
            let loose = resolve(&range, Tightness::Loose);
            assert!(tight <= neutral && neutral <= loose, "{range:?}");
        }
    }

    #[test]
    fn legacy_ok_spelling_reads_as_neutral() {
        let stance: Tightness = serde_json::from_str("\"ok\"").unwrap();
        assert_eq!(stance, Tightness::Neutral);
        assert_eq!(serde_json::to_string(&stance).unwrap(), "\"neutral\"");
        assert_eq!("generous".parse::<Tightness>(), Ok(Tightness::Loose));
        assert!("sideways".parse::<Tightness>().is_err());
    }

    #[test]
    fn view_factors() {
        assert_eq!(SpendView::Tighter.factor(), 0.8);
        assert_eq!(SpendView::default().factor(), 1.0);
        assert_eq!("wide".parse::<SpendView>(), Ok(SpendView::Looser));
        assert_eq!(serde_json::to_string(&SpendView::AsIs).unwrap(), "\"as-is\"");
    }
}
