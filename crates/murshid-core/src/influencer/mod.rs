//! Influencer performance prediction engine.
//!
//! Scores an influencer profile against a campaign budget, type, and
//! target interest set: predicts reach, engagement, conversions, revenue,
//! cost, and ROI, then classifies risk and produces a recommendation tier.
//! Rankings across influencers order by score, then ROI, then confidence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::PredictionWeights;
use crate::error::{EngineError, Result};

/// Social platform an influencer publishes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Youtube,
    Tiktok,
    Snapchat,
    Multi,
}

/// Campaign content format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CampaignType {
    SponsoredPost,
    Story,
    Video,
    Live,
    Collaboration,
}

impl CampaignType {
    /// Formats that drive action convert better; stories convert worse.
    fn conversion_multiplier(self) -> f64 {
        match self {
            CampaignType::Video => 1.5,
            CampaignType::Story => 0.8,
            CampaignType::Live => 2.0,
            _ => 1.0,
        }
    }

    /// Production-heavy formats cost more to commission.
    fn cost_multiplier(self) -> f64 {
        match self {
            CampaignType::Video => 1.5,
            CampaignType::Live => 2.0,
            _ => 1.0,
        }
    }
}

/// Aggregate engagement counters for an influencer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementStats {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    /// Engagement rate in percent
    pub engagement_rate: f64,
}

/// One past campaign's measured outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignPerformance {
    pub campaign_id: String,
    pub date: DateTime<Utc>,
    pub campaign_type: CampaignType,
    pub reach: u64,
    pub engagement: u64,
    pub conversions: u64,
    pub revenue: f64,
    pub cost: f64,
    /// Realized ROI in percent
    pub roi: f64,
}

/// Audience composition data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceData {
    /// Percentage breakdowns keyed by bucket name
    pub age_groups: HashMap<String, f64>,
    pub gender: HashMap<String, f64>,
    pub locations: HashMap<String, f64>,
    pub interests: Vec<String>,
    /// Share of real followers (0-100)
    pub authenticity: f64,
    pub active_followers: u64,
}

/// Influencer profile snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerData {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub category: String,
    pub followers: u64,
    pub engagement: EngagementStats,
    pub historical_performance: Vec<CampaignPerformance>,
    pub audience: AudienceData,
    /// Content quality score (0-100)
    pub content_quality: f64,
    /// Reliability score (0-100)
    pub reliability: f64,
    pub last_updated: DateTime<Utc>,
}

impl InfluencerData {
    pub fn validate(&self) -> Result<()> {
        if self.engagement.engagement_rate < 0.0 {
            return Err(EngineError::invalid(
                "engagement_rate",
                "must be non-negative",
            ));
        }
        let percents = [
            ("content_quality", self.content_quality),
            ("reliability", self.reliability),
            ("audience.authenticity", self.audience.authenticity),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::invalid(field, "must be within 0-100"));
            }
        }
        Ok(())
    }
}

/// Collaboration risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignRisk {
    Low,
    Medium,
    High,
}

/// Recommendation tier for a collaboration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recommendation {
    HighlyRecommended,
    Recommended,
    ConsiderAlternatives,
    NotRecommended,
}

/// Traffic-light color for the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Yellow,
    Red,
}

/// Prediction for one influencer/campaign pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub influencer_id: String,
    pub influencer_name: String,
    pub predicted_reach: u64,
    pub predicted_engagement: u64,
    pub predicted_conversions: u64,
    pub predicted_revenue: f64,
    pub estimated_cost: f64,
    /// Predicted ROI in percent; negative for poor fits
    pub predicted_roi: f64,
    /// Confidence in the prediction (0-100)
    pub confidence: f64,
    pub risk_level: CampaignRisk,
    pub risk_factors: Vec<String>,
    pub recommendation: Recommendation,
    /// Composite suitability score (0-100)
    pub score: f64,
    pub color: ScoreColor,
    pub reasoning: Vec<String>,
}

/// Mean outcome over an influencer's campaign history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAverages {
    pub roi: f64,
    pub engagement: f64,
    pub conversions: f64,
}

/// Mean ROI/engagement/conversions over a campaign history; zeroes when
/// there is no history.
pub fn average_performance(history: &[CampaignPerformance]) -> PerformanceAverages {
    if history.is_empty() {
        return PerformanceAverages::default();
    }

    let n = history.len() as f64;
    PerformanceAverages {
        roi: history.iter().map(|p| p.roi).sum::<f64>() / n,
        engagement: history.iter().map(|p| p.engagement as f64).sum::<f64>() / n,
        conversions: history.iter().map(|p| p.conversions as f64).sum::<f64>() / n,
    }
}

/// Influencer prediction engine.
#[derive(Debug, Clone, Default)]
pub struct InfluencerPredictor {
    weights: PredictionWeights,
}

impl InfluencerPredictor {
    /// Create a predictor with the default scoring weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a predictor with custom weights.
    pub fn with_weights(weights: PredictionWeights) -> Self {
        Self { weights }
    }

    /// Predict how an influencer would perform for a campaign.
    pub fn predict_performance(
        &self,
        influencer: &InfluencerData,
        budget: f64,
        campaign_type: CampaignType,
        target_interests: &[String],
    ) -> Result<PredictionResult> {
        influencer.validate()?;

        let quality_factor = quality_factor(influencer);
        let audience_factor = audience_match(&influencer.audience, target_interests);
        let reliability_factor = influencer.reliability / 100.0;

        let engagement_rate = influencer.engagement.engagement_rate;
        let base_reach = influencer.followers as f64 * engagement_rate / 100.0;
        let reach = base_reach * quality_factor * audience_factor;
        let predicted_reach = reach.round() as u64;

        let engagement = predicted_reach as f64 * engagement_rate / 100.0;
        let predicted_engagement = engagement.round() as u64;

        let conversion_rate = conversion_rate(influencer, campaign_type);
        let predicted_conversions = (predicted_reach as f64 * conversion_rate).round() as u64;

        // Average order value assumed proportional to campaign budget.
        let avg_order_value = budget * 0.1;
        let predicted_revenue = predicted_conversions as f64 * avg_order_value;

        let estimated_cost = estimated_cost(influencer, campaign_type);

        let predicted_roi = if estimated_cost > 0.0 {
            (predicted_revenue - estimated_cost) / estimated_cost * 100.0
        } else {
            0.0
        };

        let confidence = confidence(influencer);

        let (risk_level, risk_factors) = self.assess_risk(influencer, predicted_roi);

        let score = self.composite_score(
            predicted_roi,
            confidence,
            quality_factor,
            audience_factor,
            reliability_factor,
        );

        let recommendation = recommendation(score, risk_level);

        let color = if score >= 70.0 {
            ScoreColor::Green
        } else if score >= 40.0 {
            ScoreColor::Yellow
        } else {
            ScoreColor::Red
        };

        let reasoning = reasoning(score, predicted_roi, confidence, quality_factor, audience_factor);

        Ok(PredictionResult {
            influencer_id: influencer.id.clone(),
            influencer_name: influencer.name.clone(),
            predicted_reach,
            predicted_engagement,
            predicted_conversions,
            predicted_revenue,
            estimated_cost,
            predicted_roi,
            confidence,
            risk_level,
            risk_factors,
            recommendation,
            score,
            color,
            reasoning,
        })
    }

    /// Additive risk assessment; the thresholds live in the policy.
    fn assess_risk(
        &self,
        influencer: &InfluencerData,
        predicted_roi: f64,
    ) -> (CampaignRisk, Vec<String>) {
        let mut risk_factors = Vec::new();
        let mut risk_score = 0.0;

        if influencer.reliability < 60.0 {
            risk_factors.push("Low influencer reliability".to_string());
            risk_score += 30.0;
        }
        if influencer.audience.authenticity < 70.0 {
            risk_factors.push("High share of fake followers".to_string());
            risk_score += 25.0;
        }
        if predicted_roi < 0.0 {
            risk_factors.push("Negative predicted return on investment".to_string());
            risk_score += 40.0;
        }
        if influencer.historical_performance.len() < 3 {
            risk_factors.push("Limited historical performance data".to_string());
            risk_score += 15.0;
        }
        if influencer.engagement.engagement_rate < 2.0 {
            risk_factors.push("Low engagement rate".to_string());
            risk_score += 20.0;
        }

        let risk_level = if risk_score < self.weights.low_risk_max {
            CampaignRisk::Low
        } else if risk_score < self.weights.medium_risk_max {
            CampaignRisk::Medium
        } else {
            CampaignRisk::High
        };

        (risk_level, risk_factors)
    }

    fn composite_score(
        &self,
        roi: f64,
        confidence: f64,
        quality: f64,
        audience: f64,
        reliability: f64,
    ) -> f64 {
        let w = &self.weights;

        let roi_score = if roi > 0.0 {
            (roi / 100.0 * w.roi_scale).min(w.roi_cap)
        } else {
            0.0
        };

        roi_score
            + confidence / 100.0 * w.confidence_weight
            + quality * w.quality_weight
            + audience * w.audience_weight
            + reliability * w.reliability_weight
    }
}

/// Content quality, follower authenticity, and engagement blended into a
/// 0-1 factor.
fn quality_factor(influencer: &InfluencerData) -> f64 {
    let content = influencer.content_quality / 100.0;
    let authenticity = influencer.audience.authenticity / 100.0;
    let engagement = (influencer.engagement.engagement_rate / 10.0).min(1.0);

    content * 0.4 + authenticity * 0.4 + engagement * 0.2
}

/// Interest overlap between the audience and the campaign targets, as a
/// 0.5-1.0 factor. An empty target set means no constraint.
fn audience_match(audience: &AudienceData, target_interests: &[String]) -> f64 {
    if target_interests.is_empty() {
        return 1.0;
    }

    let matching = audience
        .interests
        .iter()
        .filter(|interest| {
            target_interests.iter().any(|target| {
                let interest = interest.to_lowercase();
                let target = target.to_lowercase();
                interest.contains(&target) || target.contains(&interest)
            })
        })
        .count();

    let match_score = matching as f64 / target_interests.len().max(1) as f64;
    match_score.max(0.5)
}

/// Expected conversion rate: a 2% base shifted by campaign format,
/// reliability, and content quality, capped at 10%.
fn conversion_rate(influencer: &InfluencerData, campaign_type: CampaignType) -> f64 {
    let mut rate = 0.02 * campaign_type.conversion_multiplier();

    rate += influencer.reliability / 100.0 * 0.01;
    rate += influencer.content_quality / 100.0 * 0.015;

    rate.min(0.1)
}

/// Collaboration fee: a follower-tier base, scaled by engagement rate and
/// campaign format.
fn estimated_cost(influencer: &InfluencerData, campaign_type: CampaignType) -> f64 {
    let base = match influencer.followers {
        0..=9_999 => 500.0,
        10_000..=49_999 => 2_000.0,
        50_000..=99_999 => 5_000.0,
        100_000..=499_999 => 15_000.0,
        500_000..=999_999 => 30_000.0,
        _ => 50_000.0,
    };

    let engagement_multiplier = (influencer.engagement.engagement_rate / 5.0).max(1.0);

    base * engagement_multiplier * campaign_type.cost_multiplier()
}

/// Prediction confidence: history depth plus reliability and authenticity.
fn confidence(influencer: &InfluencerData) -> f64 {
    let mut confidence = 50.0;

    let history = influencer.historical_performance.len();
    if history > 10 {
        confidence += 30.0;
    } else if history > 5 {
        confidence += 20.0;
    } else if history > 0 {
        confidence += 10.0;
    }

    confidence += influencer.reliability / 100.0 * 10.0;
    confidence += influencer.audience.authenticity / 100.0 * 10.0;

    confidence.min(100.0)
}

/// Recommendation ladder. High risk always vetoes the collaboration,
/// regardless of the composite score.
fn recommendation(score: f64, risk_level: CampaignRisk) -> Recommendation {
    if risk_level == CampaignRisk::High {
        return Recommendation::NotRecommended;
    }
    if score >= 80.0 && risk_level == CampaignRisk::Low {
        Recommendation::HighlyRecommended
    } else if score >= 60.0 {
        Recommendation::Recommended
    } else if score >= 40.0 {
        Recommendation::ConsiderAlternatives
    } else {
        Recommendation::NotRecommended
    }
}

fn reasoning(score: f64, roi: f64, confidence: f64, quality: f64, audience: f64) -> Vec<String> {
    let mut reasons = Vec::new();

    if roi > 100.0 {
        reasons.push(format!("Excellent predicted ROI: {roi:.0}%"));
    } else if roi > 50.0 {
        reasons.push(format!("Good predicted ROI: {roi:.0}%"));
    } else if roi < 0.0 {
        reasons.push(format!("Negative predicted ROI: {roi:.0}%"));
    }

    if confidence > 80.0 {
        reasons.push("High confidence in the predictions".to_string());
    } else if confidence < 50.0 {
        reasons.push("Low confidence: limited data".to_string());
    }

    if quality > 0.8 {
        reasons.push("High content quality".to_string());
    } else if quality < 0.5 {
        reasons.push("Content quality needs improvement".to_string());
    }

    if audience > 0.8 {
        reasons.push("Excellent match with the target audience".to_string());
    } else if audience < 0.6 {
        reasons.push("Limited match with the target audience".to_string());
    }

    if score >= 80.0 {
        reasons.push("Excellent candidate for the campaign".to_string());
    } else if score < 40.0 {
        reasons.push("Better alternatives should be considered".to_string());
    }

    reasons
}

/// Rank predictions best-first: by score, then predicted ROI, then
/// confidence. Stable for full ties.
pub fn rank_influencers(mut predictions: Vec<PredictionResult>) -> Vec<PredictionResult> {
    predictions.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                b.predicted_roi
                    .partial_cmp(&a.predicted_roi)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .then_with(|| {
                b.confidence
                    .partial_cmp(&a.confidence)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
    predictions
}
