use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorical reason tag attached to a spend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motive {
    Needs,
    Emotion,
    Social,
    #[default]
    Unknown,
}

impl Motive {
    pub const ALL: [Motive; 4] = [Motive::Needs, Motive::Emotion, Motive::Social, Motive::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Motive::Needs => "needs",
            Motive::Emotion => "emotion",
            Motive::Social => "social",
            Motive::Unknown => "unknown",
        }
    }

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Motive::Needs => "Real need",
            Motive::Emotion => "Emotional comfort",
            Motive::Social => "Social pressure",
            Motive::Unknown => "Not sure",
        }
    }
}

impl fmt::Display for Motive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Motive {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Motive::ALL
            .into_iter()
            .find(|motive| motive.as_str() == value.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("unknown motive `{}`", value.trim()))
    }
}

/// A dated spend event. Immutable once recorded.
///
/// With `is_intercepted` set the purchase was avoided and `amount` is money
/// preserved rather than spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    #[serde(default)]
    pub motive: Motive,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_intercepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    pub fn new(amount: f64, motive: Motive, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            motive,
            timestamp,
            is_intercepted: false,
            note: None,
        }
    }

    /// An avoided purchase.
    pub fn intercepted(amount: f64, motive: Motive, timestamp: DateTime<Utc>) -> Self {
        Self {
            is_intercepted: true,
            ..Self::new(amount, motive, timestamp)
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Amount used by aggregation: non-finite or negative figures count as zero.
    pub fn counted_amount(&self) -> f64 {
        if self.amount.is_finite() && self.amount > 0.0 {
            self.amount
        } else {
            0.0
        }
    }
}
