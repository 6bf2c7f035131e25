//! Short-horizon burnout trend prediction.
//!
//! A linear projection over the trailing week of assessments. Kept strictly
//! deterministic: the projection depends only on the supplied history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RISK_THRESHOLD;

/// Days the projection looks ahead.
pub const FORECAST_HORIZON_DAYS: f64 = 7.0;

/// Trailing window of trend points used for the projection.
const TREND_WINDOW: usize = 7;

/// One historical burnout evaluation. Points must be supplied in
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub burnout_score: f64,
    pub fatigue_level: f64,
    pub stress_level: f64,
}

/// Projection of an employee's burnout score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnoutPrediction {
    /// Projected score after [`FORECAST_HORIZON_DAYS`]. Deliberately not
    /// clamped; values above 100 signal how far past the scale the trend
    /// points.
    pub predicted_burnout: f64,
    /// Whole days until the score crosses the high-risk threshold (80).
    /// `None` when the trend is flat or falling, i.e. risk is never
    /// approached on this trajectory.
    pub time_to_risk: Option<u32>,
    /// Confidence in the projection (0-1), driven by how much of the
    /// trailing window is populated.
    pub confidence: f64,
    /// Preventive actions when the projection is concerning.
    pub preventive_actions: Vec<String>,
}

/// Project the burnout score seven days ahead from its recent trend.
///
/// The per-step increase is the mean of consecutive differences over the
/// last [`TREND_WINDOW`] points. Fewer than two points means no trend:
/// the score is projected unchanged.
pub fn predict_future_burnout(current_score: f64, trend: &[TrendPoint]) -> BurnoutPrediction {
    if trend.len() < 2 {
        return BurnoutPrediction {
            predicted_burnout: current_score,
            time_to_risk: None,
            confidence: 0.5,
            preventive_actions: Vec::new(),
        };
    }

    let recent = &trend[trend.len().saturating_sub(TREND_WINDOW)..];
    let avg_increase = recent
        .windows(2)
        .map(|pair| pair[1].burnout_score - pair[0].burnout_score)
        .sum::<f64>()
        / (recent.len() - 1) as f64;

    let predicted_burnout = current_score + avg_increase * FORECAST_HORIZON_DAYS;

    let time_to_risk = if avg_increase > 0.0 {
        let days = ((RISK_THRESHOLD - current_score) / avg_increase).ceil();
        Some(days.max(0.0) as u32)
    } else {
        None
    };

    let confidence = if recent.len() >= 5 { 0.8 } else { 0.6 };

    let mut preventive_actions = Vec::new();
    if predicted_burnout > 70.0 {
        preventive_actions.push("Reduce weekly working hours".to_string());
        preventive_actions.push("Schedule leave soon".to_string());
        preventive_actions.push("Delegate some tasks".to_string());
    }

    BurnoutPrediction {
        predicted_burnout,
        time_to_risk,
        confidence,
        preventive_actions,
    }
}
