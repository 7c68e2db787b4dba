use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{range::NumericRange, tightness::Tightness};

const CURRENT_SCHEMA_VERSION: u8 = 1;
pub const DEFAULT_MILESTONE_NAME: &str = "First step";
pub const DEFAULT_MILESTONE_TARGET: f64 = 500.0;

/// A single active savings goal. Exact scalars so that progress is displayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub target_amount: f64,
    pub saved_amount: f64,
}

impl Milestone {
    pub fn new(name: impl Into<String>, target_amount: f64, saved_amount: f64) -> Self {
        Self {
            name: name.into(),
            target_amount,
            saved_amount,
        }
    }
}

impl Default for Milestone {
    fn default() -> Self {
        Self::new(DEFAULT_MILESTONE_NAME, DEFAULT_MILESTONE_TARGET, 0.0)
    }
}

/// The resolved profile every derivation consumes. Defaults are already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub safety_net: NumericRange,
    pub monthly_spend: NumericRange,
    pub milestone: Milestone,
    pub tightness: Tightness,
    pub dream_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(safety_net: NumericRange, monthly_spend: NumericRange) -> Self {
        let now = Utc::now();
        Self {
            safety_net,
            monthly_spend,
            milestone: Milestone::default(),
            tightness: Tightness::default(),
            dream_text: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_milestone(mut self, milestone: Milestone) -> Self {
        self.milestone = milestone;
        self
    }

    pub fn with_tightness(mut self, tightness: Tightness) -> Self {
        self.tightness = tightness;
        self
    }

    pub fn with_dream(mut self, dream: impl Into<String>) -> Self {
        self.dream_text = Some(dream.into());
        self
    }

    pub fn to_stored(&self) -> StoredProfile {
        StoredProfile {
            safety_net: Some(self.safety_net),
            monthly_spend: Some(self.monthly_spend),
            dream_text: self.dream_text.clone(),
            milestone_name: Some(self.milestone.name.clone()),
            milestone_amount: Some(self.milestone.target_amount),
            milestone_saved: Some(self.milestone.saved_amount),
            tightness: Some(self.tightness),
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }
}

/// The persisted shape of a profile. Every field is optional so partially filled or
/// older snapshots still load; [`StoredProfile::resolve`] applies the defaults once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_net: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dream_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone_saved: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tightness: Option<Tightness>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default = "StoredProfile::schema_version_default")]
    pub schema_version: u8,
}

impl StoredProfile {
    /// Produces the resolved profile, or `None` when either core range is missing.
    ///
    /// Defaults: milestone "First step" with target 500 and nothing saved, neutral
    /// tightness, timestamps of "now" when absent.
    pub fn resolve(self) -> Option<UserProfile> {
        let safety_net = self.safety_net.filter(NumericRange::is_finite)?;
        let monthly_spend = self.monthly_spend.filter(NumericRange::is_finite)?;
        let now = Utc::now();
        let created_at = self.created_at.unwrap_or(now);
        let milestone = Milestone {
            name: self
                .milestone_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MILESTONE_NAME.to_string()),
            target_amount: self.milestone_amount.unwrap_or(DEFAULT_MILESTONE_TARGET),
            saved_amount: self.milestone_saved.unwrap_or(0.0),
        };
        Some(UserProfile {
            safety_net,
            monthly_spend,
            milestone,
            tightness: self.tightness.unwrap_or_default(),
            dream_text: self.dream_text,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
        })
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl From<&UserProfile> for StoredProfile {
    fn from(profile: &UserProfile) -> Self {
        profile.to_stored()
    }
}
