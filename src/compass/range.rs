use serde::{Deserialize, Serialize};

/// A closed interval `[min, max]` expressing honest uncertainty in a self-reported figure.
///
/// Construction always normalizes so that `min <= max`; reversed bounds are swapped,
/// never rejected. Values are not clipped here: bounding happens at the output of each
/// derivation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RangeBounds")]
pub struct NumericRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RangeBounds {
    min: f64,
    max: f64,
}

impl From<RangeBounds> for NumericRange {
    fn from(bounds: RangeBounds) -> Self {
        NumericRange::new(bounds.min, bounds.max)
    }
}

impl NumericRange {
    pub const ZERO: NumericRange = NumericRange { min: 0.0, max: 0.0 };

    pub fn new(a: f64, b: f64) -> Self {
        if b < a {
            Self { min: b, max: a }
        } else {
            Self { min: a, max: b }
        }
    }

    /// Degenerate range holding a single known value.
    pub fn exact(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_exact(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl Default for NumericRange {
    fn default() -> Self {
        Self::ZERO
    }
}
