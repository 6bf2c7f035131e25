//! Engine policy configuration.
//!
//! All scoring weights and thresholds live here as TOML-overridable
//! tables. The `Default` impls encode the canonical policy; every
//! documented score guarantee holds under the defaults. A deployment can
//! override individual keys:
//!
//! ```toml
//! [distribution]
//! min_readiness = 50.0
//!
//! [rag]
//! readiness = 0.6
//! availability = 0.25
//! growth = 0.15
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Weights combining the three RAG sub-scores into the overall score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagWeights {
    /// Weight of the readiness sub-score (default 0.5)
    #[serde(default = "default_readiness_weight")]
    pub readiness: f64,
    /// Weight of the availability sub-score (default 0.3)
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
    /// Weight of the growth sub-score (default 0.2)
    #[serde(default = "default_growth_weight")]
    pub growth: f64,
}

impl Default for RagWeights {
    fn default() -> Self {
        Self {
            readiness: default_readiness_weight(),
            availability: default_availability_weight(),
            growth: default_growth_weight(),
        }
    }
}

/// Thresholds and capacity assumptions for task distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionTuning {
    /// Minimum readiness sub-score a candidate needs to qualify
    #[serde(default = "default_min_readiness")]
    pub min_readiness: f64,
    /// Weekly hours treated as 100% workload
    #[serde(default = "default_weekly_capacity_hours")]
    pub weekly_capacity_hours: f64,
    /// Productive hours per day assumed for completion estimates
    #[serde(default = "default_effective_hours_per_day")]
    pub effective_hours_per_day: f64,
    /// Nominal hours per day assumed for deadline feasibility
    #[serde(default = "default_deadline_hours_per_day")]
    pub deadline_hours_per_day: f64,
}

impl Default for DistributionTuning {
    fn default() -> Self {
        Self {
            min_readiness: default_min_readiness(),
            weekly_capacity_hours: default_weekly_capacity_hours(),
            effective_hours_per_day: default_effective_hours_per_day(),
            deadline_hours_per_day: default_deadline_hours_per_day(),
        }
    }
}

/// Weights and risk thresholds for the influencer composite score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionWeights {
    /// Points per 100% of predicted ROI (default 50)
    #[serde(default = "default_roi_scale")]
    pub roi_scale: f64,
    /// Cap on the ROI component (default 40)
    #[serde(default = "default_roi_cap")]
    pub roi_cap: f64,
    /// Weight of prediction confidence (default 20)
    #[serde(default = "default_confidence_weight")]
    pub confidence_weight: f64,
    /// Weight of the content/audience quality factor (default 15)
    #[serde(default = "default_quality_weight")]
    pub quality_weight: f64,
    /// Weight of the audience interest match (default 15)
    #[serde(default = "default_audience_weight")]
    pub audience_weight: f64,
    /// Weight of influencer reliability (default 10)
    #[serde(default = "default_reliability_weight")]
    pub reliability_weight: f64,
    /// Additive risk score strictly below this is low risk (default 30)
    #[serde(default = "default_low_risk_max")]
    pub low_risk_max: f64,
    /// Additive risk score strictly below this is medium risk (default 60)
    #[serde(default = "default_medium_risk_max")]
    pub medium_risk_max: f64,
}

impl Default for PredictionWeights {
    fn default() -> Self {
        Self {
            roi_scale: default_roi_scale(),
            roi_cap: default_roi_cap(),
            confidence_weight: default_confidence_weight(),
            quality_weight: default_quality_weight(),
            audience_weight: default_audience_weight(),
            reliability_weight: default_reliability_weight(),
            low_risk_max: default_low_risk_max(),
            medium_risk_max: default_medium_risk_max(),
        }
    }
}

/// Complete engine policy: every tunable constant in one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnginePolicy {
    #[serde(default)]
    pub rag: RagWeights,
    #[serde(default)]
    pub distribution: DistributionTuning,
    #[serde(default)]
    pub prediction: PredictionWeights,
}

impl EnginePolicy {
    /// Parse a policy from TOML. Missing keys fall back to defaults.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the policy to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

fn default_readiness_weight() -> f64 {
    0.5
}

fn default_availability_weight() -> f64 {
    0.3
}

fn default_growth_weight() -> f64 {
    0.2
}

fn default_min_readiness() -> f64 {
    40.0
}

fn default_weekly_capacity_hours() -> f64 {
    40.0
}

fn default_effective_hours_per_day() -> f64 {
    6.0
}

fn default_deadline_hours_per_day() -> f64 {
    8.0
}

fn default_roi_scale() -> f64 {
    50.0
}

fn default_roi_cap() -> f64 {
    40.0
}

fn default_confidence_weight() -> f64 {
    20.0
}

fn default_quality_weight() -> f64 {
    15.0
}

fn default_audience_weight() -> f64 {
    15.0
}

fn default_reliability_weight() -> f64 {
    10.0
}

fn default_low_risk_max() -> f64 {
    30.0
}

fn default_medium_risk_max() -> f64 {
    60.0
}
