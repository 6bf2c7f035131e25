//! Burnout and fatigue scoring engine.
//!
//! Computes a 0-100 burnout score from a snapshot of an employee's recent
//! work, detects co-occurring burnout symptoms, classifies the risk level,
//! and (via [`trend`]) projects the score forward from historical data.
//!
//! All functions here are pure: identical inputs always produce identical
//! outputs. The only timestamp that appears in results is supplied by the
//! caller through [`BurnoutAnalyzer`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub mod trend;

pub use trend::{predict_future_burnout, BurnoutPrediction, TrendPoint};

/// Burnout score at or above this value counts as high risk.
pub const RISK_THRESHOLD: f64 = 80.0;

/// Snapshot of one employee's work over the evaluation period (a week).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkSnapshot {
    /// Hours worked in the period
    pub work_hours: f64,
    /// Tasks completed in the period.
    ///
    /// Accepted for signature compatibility with the legacy console; the
    /// current scoring formula does not weigh it.
    pub tasks_completed: u32,
    /// Tasks past their deadline
    pub tasks_overdue: u32,
    /// Error rate (count per period, or a ratio scaled by the caller)
    pub error_rate: f64,
    /// Focus score (0-100)
    pub focus_score: f64,
    /// Rest days taken in the period
    pub rest_days: f64,
}

impl WorkSnapshot {
    /// Check the snapshot for values the scoring formula cannot interpret.
    pub fn validate(&self) -> Result<()> {
        if self.work_hours < 0.0 {
            return Err(EngineError::invalid("work_hours", "must be non-negative"));
        }
        if self.error_rate < 0.0 {
            return Err(EngineError::invalid("error_rate", "must be non-negative"));
        }
        if !(0.0..=100.0).contains(&self.focus_score) {
            return Err(EngineError::invalid("focus_score", "must be within 0-100"));
        }
        if self.rest_days < 0.0 {
            return Err(EngineError::invalid("rest_days", "must be non-negative"));
        }
        Ok(())
    }
}

/// Calculate the burnout score (0-100) for a work snapshot.
///
/// Additive composite of independent risk contributions, clamped to
/// [0, 100]:
/// - hours beyond 50 per week, doubled
/// - 5 points per overdue task
/// - 10 points per error-rate unit
/// - half a point per missing focus point
/// - a flat 20 points when the employee took no rest day
pub fn burnout_score(snapshot: &WorkSnapshot) -> Result<f64> {
    snapshot.validate()?;

    let mut score = 0.0;

    score += (snapshot.work_hours - 50.0).max(0.0) * 2.0;
    score += snapshot.tasks_overdue as f64 * 5.0;
    score += snapshot.error_rate * 10.0;
    score += ((100.0 - snapshot.focus_score) * 0.5).max(0.0);
    if snapshot.rest_days < 1.0 {
        score += 20.0;
    }

    Ok(score.clamp(0.0, 100.0))
}

/// Calculate the fatigue level.
///
/// Unlike [`burnout_score`] the result is deliberately not capped: a long
/// enough unbroken stretch of work pushes the indicator past 100.
pub fn fatigue_level(
    consecutive_work_days: u32,
    avg_work_hours_per_day: f64,
    sleep_quality: f64,
) -> f64 {
    let mut fatigue = 0.0;

    fatigue += consecutive_work_days as f64 * 5.0;
    fatigue += (avg_work_hours_per_day - 10.0).max(0.0) * 8.0;
    fatigue += ((100.0 - sleep_quality) * 0.3).max(0.0);

    fatigue
}

/// Kind of burnout symptom, following the Maslach dimensions plus two
/// observable signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomKind {
    Exhaustion,
    Cynicism,
    Inefficacy,
    Detachment,
    Physical,
}

/// Severity of a detected symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// A detected burnout symptom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub kind: SymptomKind,
    pub severity: Severity,
    pub description: String,
    pub detected: DateTime<Utc>,
}

impl Symptom {
    fn new(
        kind: SymptomKind,
        severity: Severity,
        description: &str,
        detected: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            severity,
            description: description.to_string(),
            detected,
        }
    }
}

/// Detect burnout symptoms from behavioral signals.
///
/// Each rule is evaluated independently, so several symptoms can co-occur.
/// `error_rate` only participates in the physical-symptom rule; it is
/// otherwise kept for signature compatibility with the legacy console.
pub fn detect_symptoms(
    burnout_score: f64,
    productivity_change: f64,
    engagement_score: f64,
    error_rate: f64,
    detected_at: DateTime<Utc>,
) -> Vec<Symptom> {
    let mut symptoms = Vec::new();

    if burnout_score > 60.0 {
        let severity = if burnout_score > 80.0 {
            Severity::Severe
        } else {
            Severity::Moderate
        };
        symptoms.push(Symptom::new(
            SymptomKind::Exhaustion,
            severity,
            "Marked exhaustion and loss of energy",
            detected_at,
        ));
    }

    if engagement_score < 40.0 {
        let severity = if engagement_score < 20.0 {
            Severity::Severe
        } else {
            Severity::Moderate
        };
        symptoms.push(Symptom::new(
            SymptomKind::Cynicism,
            severity,
            "Falling enthusiasm and emotional distance from work",
            detected_at,
        ));
    }

    if productivity_change < -30.0 {
        let severity = if productivity_change < -50.0 {
            Severity::Severe
        } else {
            Severity::Moderate
        };
        symptoms.push(Symptom::new(
            SymptomKind::Inefficacy,
            severity,
            "Sharp productivity drop and reduced sense of accomplishment",
            detected_at,
        ));
    }

    if engagement_score < 30.0 && burnout_score > 50.0 {
        symptoms.push(Symptom::new(
            SymptomKind::Detachment,
            Severity::Moderate,
            "Withdrawal from the team and avoidance of tasks",
            detected_at,
        ));
    }

    if error_rate > 20.0 && burnout_score > 70.0 {
        symptoms.push(Symptom::new(
            SymptomKind::Physical,
            Severity::Severe,
            "Physical signs: rising error counts, slowed responses",
            detected_at,
        ));
    }

    symptoms
}

/// Risk classification for a burnout score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Classify a burnout score into a risk level.
///
/// Boundaries are inclusive on the upper side: exactly 80 is already
/// critical, exactly 60 is already high.
pub fn risk_level(burnout_score: f64) -> RiskLevel {
    if burnout_score >= 80.0 {
        RiskLevel::Critical
    } else if burnout_score >= 60.0 {
        RiskLevel::High
    } else if burnout_score >= 40.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Work data required for a full burnout assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Weekly work snapshot
    pub snapshot: WorkSnapshot,
    /// Days worked without a break
    pub consecutive_work_days: u32,
    /// Average hours worked per day
    pub avg_hours_per_day: f64,
    /// Productivity change versus the previous period (negative = drop)
    pub productivity_change: f64,
    /// Engagement score (0-100)
    pub engagement_score: f64,
}

/// Full burnout assessment for one employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnoutAssessment {
    pub employee_id: String,
    pub employee_name: String,
    /// Burnout score (0-100)
    pub burnout_score: f64,
    /// Fatigue level (unbounded)
    pub fatigue_level: f64,
    /// Stress level (0-100)
    pub stress_level: f64,
    /// Workload index (0-100)
    pub workload_index: f64,
    /// Remaining capacity to recover (0-100)
    pub recovery_score: f64,
    pub risk_level: RiskLevel,
    pub symptoms: Vec<Symptom>,
    pub weekly_trend: Vec<TrendPoint>,
    pub recommendations: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

/// Analyzer producing full burnout assessments.
///
/// Carries the evaluation timestamp so that assessments are reproducible;
/// [`BurnoutAnalyzer::new`] pins it to the current wall clock once.
#[derive(Debug, Clone)]
pub struct BurnoutAnalyzer {
    current_time: DateTime<Utc>,
}

impl Default for BurnoutAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl BurnoutAnalyzer {
    /// Create an analyzer stamped with the current time.
    pub fn new() -> Self {
        Self {
            current_time: Utc::now(),
        }
    }

    /// Create an analyzer with an explicit evaluation time.
    pub fn at(current_time: DateTime<Utc>) -> Self {
        Self { current_time }
    }

    /// Run a full assessment: score, fatigue, derived indices, symptoms,
    /// risk level, and recommendations.
    ///
    /// When `historical_trend` is absent the weekly trend starts with a
    /// single point derived from this assessment.
    pub fn assess(
        &self,
        employee_id: &str,
        employee_name: &str,
        input: &AnalysisInput,
        historical_trend: Option<Vec<TrendPoint>>,
    ) -> Result<BurnoutAssessment> {
        let snapshot = &input.snapshot;
        let score = burnout_score(snapshot)?;

        // Focus doubles as the sleep-quality proxy: chronic late work
        // shows up as degraded focus before it is reported anywhere else.
        let fatigue = fatigue_level(
            input.consecutive_work_days,
            input.avg_hours_per_day,
            snapshot.focus_score,
        );

        let stress_level =
            (snapshot.tasks_overdue as f64 * 5.0 + snapshot.error_rate * 3.0).min(100.0);

        let workload_index =
            (snapshot.work_hours / 40.0 * 50.0 + snapshot.tasks_overdue as f64 * 2.0).min(100.0);

        let recovery_score = (100.0
            - ((100.0 - snapshot.focus_score) + input.consecutive_work_days as f64 * 5.0))
            .max(0.0);

        let symptoms = detect_symptoms(
            score,
            input.productivity_change,
            input.engagement_score,
            snapshot.error_rate,
            self.current_time,
        );

        let risk = risk_level(score);

        let weekly_trend = historical_trend.unwrap_or_else(|| {
            vec![TrendPoint {
                date: self.current_time,
                burnout_score: score,
                fatigue_level: fatigue,
                stress_level,
            }]
        });

        let mut assessment = BurnoutAssessment {
            employee_id: employee_id.to_string(),
            employee_name: employee_name.to_string(),
            burnout_score: score,
            fatigue_level: fatigue,
            stress_level,
            workload_index,
            recovery_score,
            risk_level: risk,
            symptoms,
            weekly_trend,
            recommendations: Vec::new(),
            last_updated: self.current_time,
        };
        assessment.recommendations = recommendations_for(&assessment);

        Ok(assessment)
    }
}

/// Rule-based recommendations for an assessment.
fn recommendations_for(assessment: &BurnoutAssessment) -> Vec<String> {
    let mut recs = Vec::new();

    if assessment.risk_level == RiskLevel::Critical {
        recs.push("Critical: immediate leave of at least 3-5 days".to_string());
        recs.push("Consultation with a physician or counselor is necessary".to_string());
        recs.push("Reduce workload by at least 50%".to_string());
    }

    if assessment.risk_level == RiskLevel::High {
        recs.push("Urgent rest needed: 2-3 days off".to_string());
        recs.push("Redistribute some tasks to colleagues".to_string());
        recs.push("Relaxation and stress-relief activities".to_string());
    }

    if assessment.fatigue_level > 70.0 {
        recs.push("Improve sleep quality: avoid late-night work".to_string());
        recs.push("Flexible working hours during recovery".to_string());
    }

    if assessment.workload_index > 80.0 {
        recs.push("Workload is far too high: relieve immediately".to_string());
        recs.push("Bring in an assistant or redistribute tasks".to_string());
    }

    for symptom in &assessment.symptoms {
        match (symptom.kind, symptom.severity) {
            (SymptomKind::Exhaustion, Severity::Severe) => {
                recs.push("Frequent breaks (15 minutes every two hours)".to_string());
            }
            (SymptomKind::Cynicism, _) => {
                recs.push("Motivation sessions and a review of personal goals".to_string());
            }
            (SymptomKind::Inefficacy, _) => {
                recs.push("Set small achievable goals to rebuild confidence".to_string());
            }
            _ => {}
        }
    }

    if recs.is_empty() {
        recs.push("Healthy level: keep maintaining the balance".to_string());
    }

    recs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(
        work_hours: f64,
        tasks_completed: u32,
        tasks_overdue: u32,
        error_rate: f64,
        focus_score: f64,
        rest_days: f64,
    ) -> WorkSnapshot {
        WorkSnapshot {
            work_hours,
            tasks_completed,
            tasks_overdue,
            error_rate,
            focus_score,
            rest_days,
        }
    }

    #[test]
    fn overworked_employee_hits_the_cap() {
        // 20 (overwork) + 25 (overdue) + 30 (errors) + 25 (focus) + 20 (no
        // rest) = 120, clamped to 100.
        let score = burnout_score(&snapshot(60.0, 10, 5, 3.0, 50.0, 0.0)).unwrap();
        assert_eq!(score, 100.0);
    }

    #[test]
    fn balanced_employee_scores_low() {
        // Only the focus term contributes: (100 - 90) * 0.5 = 5.
        // tasks_completed is 10 here but must not move the score.
        let score = burnout_score(&snapshot(40.0, 10, 0, 0.0, 90.0, 2.0)).unwrap();
        assert_eq!(score, 5.0);
    }

    #[test]
    fn tasks_completed_does_not_affect_score() {
        let low = burnout_score(&snapshot(40.0, 0, 0, 0.0, 90.0, 2.0)).unwrap();
        let high = burnout_score(&snapshot(40.0, 200, 0, 0.0, 90.0, 2.0)).unwrap();
        assert_eq!(low, high);
    }

    #[test]
    fn negative_inputs_are_rejected() {
        assert!(burnout_score(&snapshot(-1.0, 0, 0, 0.0, 90.0, 2.0)).is_err());
        assert!(burnout_score(&snapshot(40.0, 0, 0, -0.5, 90.0, 2.0)).is_err());
        assert!(burnout_score(&snapshot(40.0, 0, 0, 0.0, 120.0, 2.0)).is_err());
        assert!(burnout_score(&snapshot(40.0, 0, 0, 0.0, 90.0, -2.0)).is_err());
    }

    #[test]
    fn fatigue_level_is_additive() {
        // 5 days * 5 + (12 - 10) * 8 + (100 - 80) * 0.3 = 25 + 16 + 6.
        assert_eq!(fatigue_level(5, 12.0, 80.0), 47.0);
    }

    #[test]
    fn fatigue_level_is_not_capped() {
        // 30 days straight at 16 hours with no sleep quality left.
        let fatigue = fatigue_level(30, 16.0, 0.0);
        assert!(fatigue > 100.0, "expected uncapped fatigue, got {fatigue}");
    }

    #[test]
    fn severe_exhaustion_detected_above_80() {
        let symptoms = detect_symptoms(85.0, 0.0, 80.0, 0.0, Utc::now());
        assert!(symptoms
            .iter()
            .any(|s| s.kind == SymptomKind::Exhaustion && s.severity == Severity::Severe));
    }

    #[test]
    fn cynicism_detected_on_low_engagement() {
        let symptoms = detect_symptoms(50.0, 0.0, 30.0, 0.0, Utc::now());
        assert!(symptoms.iter().any(|s| s.kind == SymptomKind::Cynicism));
        // Engagement of 30 is not yet detachment territory.
        assert!(!symptoms.iter().any(|s| s.kind == SymptomKind::Detachment));
    }

    #[test]
    fn inefficacy_detected_on_productivity_drop() {
        let symptoms = detect_symptoms(50.0, -40.0, 80.0, 0.0, Utc::now());
        assert!(symptoms.iter().any(|s| s.kind == SymptomKind::Inefficacy));
    }

    #[test]
    fn symptoms_can_co_occur() {
        let symptoms = detect_symptoms(85.0, -60.0, 10.0, 25.0, Utc::now());
        let kinds: Vec<_> = symptoms.iter().map(|s| s.kind).collect();
        assert!(kinds.contains(&SymptomKind::Exhaustion));
        assert!(kinds.contains(&SymptomKind::Cynicism));
        assert!(kinds.contains(&SymptomKind::Inefficacy));
        assert!(kinds.contains(&SymptomKind::Detachment));
        assert!(kinds.contains(&SymptomKind::Physical));
    }

    #[test]
    fn risk_level_ladder() {
        assert_eq!(risk_level(80.0), RiskLevel::Critical);
        assert_eq!(risk_level(90.0), RiskLevel::Critical);
        assert_eq!(risk_level(79.0), RiskLevel::High);
        assert_eq!(risk_level(60.0), RiskLevel::High);
        assert_eq!(risk_level(59.0), RiskLevel::Medium);
        assert_eq!(risk_level(40.0), RiskLevel::Medium);
        assert_eq!(risk_level(39.0), RiskLevel::Low);
        assert_eq!(risk_level(0.0), RiskLevel::Low);
    }

    #[test]
    fn full_assessment_derives_indices_and_recommendations() {
        let analyzer = BurnoutAnalyzer::at(Utc::now());
        let input = AnalysisInput {
            snapshot: snapshot(70.0, 8, 6, 4.0, 40.0, 0.0),
            consecutive_work_days: 12,
            avg_hours_per_day: 11.0,
            productivity_change: -35.0,
            engagement_score: 25.0,
        };

        let assessment = analyzer
            .assess("e-9", "Overloaded employee", &input, None)
            .unwrap();

        assert_eq!(assessment.risk_level, RiskLevel::Critical);
        assert_eq!(
            assessment.stress_level,
            (6.0 * 5.0 + 4.0 * 3.0f64).min(100.0)
        );
        assert_eq!(assessment.workload_index, (70.0 / 40.0 * 50.0 + 12.0f64).min(100.0));
        assert_eq!(assessment.recovery_score, 0.0);
        assert!(!assessment.symptoms.is_empty());
        assert!(!assessment.recommendations.is_empty());
        assert_eq!(assessment.weekly_trend.len(), 1);
    }

    #[test]
    fn healthy_assessment_gets_the_all_clear() {
        let analyzer = BurnoutAnalyzer::at(Utc::now());
        let input = AnalysisInput {
            snapshot: snapshot(38.0, 12, 0, 0.0, 95.0, 2.0),
            consecutive_work_days: 4,
            avg_hours_per_day: 7.5,
            productivity_change: 5.0,
            engagement_score: 85.0,
        };

        let assessment = analyzer.assess("e-1", "Balanced employee", &input, None).unwrap();
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert_eq!(assessment.recommendations.len(), 1);
        assert!(assessment.recommendations[0].contains("Healthy"));
    }

    #[test]
    fn assessment_serialization() {
        let analyzer = BurnoutAnalyzer::at(Utc::now());
        let input = AnalysisInput {
            snapshot: snapshot(45.0, 10, 1, 0.5, 80.0, 1.0),
            consecutive_work_days: 5,
            avg_hours_per_day: 9.0,
            productivity_change: 0.0,
            engagement_score: 70.0,
        };

        let assessment = analyzer.assess("e-2", "Roundtrip", &input, None).unwrap();
        let json = serde_json::to_string(&assessment).unwrap();
        let decoded: BurnoutAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.burnout_score, assessment.burnout_score);
        assert_eq!(decoded.risk_level, assessment.risk_level);
    }
}
