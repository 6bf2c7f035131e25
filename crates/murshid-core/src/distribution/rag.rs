//! RAG (red/amber/green) suitability scoring.
//!
//! Scores one employee against one task along three axes:
//! - readiness: skill coverage and proficiency, tempered by performance
//!   and task difficulty
//! - availability: workload headroom minus burnout/stress penalties,
//!   adjusted for deadline pressure
//! - growth: how much the assignment develops the employee
//!
//! The overall score is the weighted sum of the three, clamped to [0, 100],
//! and maps to a traffic-light color for the assignment UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DistributionTuning, RagWeights};

use super::{Difficulty, EmployeeProfile, TaskToDistribute};

/// Overall score at or above this is green.
pub const GREEN_THRESHOLD: f64 = 70.0;

/// Overall score at or above this (but below green) is amber.
pub const AMBER_THRESHOLD: f64 = 40.0;

/// Traffic-light classification of an overall RAG score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RagColor {
    Red,
    Amber,
    Green,
}

impl RagColor {
    fn for_score(overall: f64) -> Self {
        if overall >= GREEN_THRESHOLD {
            RagColor::Green
        } else if overall >= AMBER_THRESHOLD {
            RagColor::Amber
        } else {
            RagColor::Red
        }
    }
}

/// Suitability score of one employee for one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagScore {
    pub employee_id: String,
    pub employee_name: String,
    /// Skill/experience readiness (0-100)
    pub readiness: f64,
    /// Workload/time availability (0-100)
    pub availability: f64,
    /// Growth opportunity (0-100)
    pub growth: f64,
    /// Weighted overall score (0-100)
    pub overall: f64,
    pub color: RagColor,
}

/// Case-insensitive bidirectional substring match between skill names,
/// so "React" matches "React Native" and vice versa.
fn skill_matches(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

fn has_skill(employee: &EmployeeProfile, required: &str) -> bool {
    employee
        .skills
        .iter()
        .any(|s| skill_matches(&s.skill, required))
}

/// Score one employee against one task.
pub fn rag_score(
    employee: &EmployeeProfile,
    task: &TaskToDistribute,
    weights: &RagWeights,
    tuning: &DistributionTuning,
    now: DateTime<Utc>,
) -> RagScore {
    let readiness = readiness_score(employee, task);
    let availability = availability_score(employee, task, tuning, now);
    let growth = growth_score(employee, task);

    let overall = (readiness * weights.readiness
        + availability * weights.availability
        + growth * weights.growth)
        .clamp(0.0, 100.0);

    RagScore {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        readiness,
        availability,
        growth,
        overall,
        color: RagColor::for_score(overall),
    }
}

/// Readiness: 60 points for skill coverage, 40 for proficiency in the
/// matched skills, then scaled by overall performance and a difficulty
/// factor that handicaps harder tasks.
fn readiness_score(employee: &EmployeeProfile, task: &TaskToDistribute) -> f64 {
    let required = &task.required_skills;
    let mut score;

    if required.is_empty() {
        // No specific requirement: neutral baseline.
        score = 50.0;
    } else {
        let matched: Vec<&String> = required
            .iter()
            .filter(|req| has_skill(employee, req))
            .collect();

        let match_rate = matched.len() as f64 / required.len() as f64;
        score = match_rate * 60.0;

        let proficiency_share = 40.0 / required.len() as f64;
        for req in &matched {
            if let Some(skill) = employee
                .skills
                .iter()
                .find(|s| skill_matches(&s.skill, req))
            {
                score += skill.level / 100.0 * proficiency_share;
            }
        }
    }

    score *= employee.performance_score / 100.0;
    score *= task.difficulty.readiness_factor();

    score.min(100.0)
}

/// Availability: start from full headroom, subtract workload, burnout and
/// stress penalties, scale by declared availability, then adjust for how
/// much slack the deadline leaves.
fn availability_score(
    employee: &EmployeeProfile,
    task: &TaskToDistribute,
    tuning: &DistributionTuning,
    now: DateTime<Utc>,
) -> f64 {
    let mut score = 100.0;

    score -= employee.current_workload * 0.6;
    score -= employee.burnout_score / 100.0 * 20.0;
    score -= employee.stress_level / 100.0 * 15.0;

    score *= employee.availability / 100.0;

    let days_until_deadline =
        task.deadline.signed_duration_since(now).num_seconds() as f64 / 86_400.0;
    let required_days = task.estimated_hours / tuning.deadline_hours_per_day;

    if days_until_deadline < required_days {
        // Deadline cannot be met at nominal pace.
        score *= 0.5;
    } else if days_until_deadline > required_days * 2.0 {
        score *= 1.1;
    }

    score.clamp(0.0, 100.0)
}

/// Growth: starts neutral and rewards new skills, preference matches, a
/// well-calibrated challenge, and a recent success streak.
fn growth_score(employee: &EmployeeProfile, task: &TaskToDistribute) -> f64 {
    let mut score: f64 = 50.0;

    let teaches_new_skill = task
        .required_skills
        .iter()
        .any(|req| !has_skill(employee, req));
    if teaches_new_skill {
        score += 30.0;
    }

    let matches_preferences = task
        .tags
        .iter()
        .any(|tag| employee.preferred_task_types.contains(tag));
    if matches_preferences {
        score += 20.0;
    }

    match task.difficulty {
        Difficulty::Medium => score += 10.0,
        Difficulty::Hard if employee.performance_score > 70.0 => score += 15.0,
        _ => {}
    }

    if employee.recent_successes > employee.recent_failures {
        score += 10.0;
    }

    score.min(100.0)
}

impl Difficulty {
    /// Handicap applied to readiness: easy tasks flatter a candidate,
    /// expert tasks demand margin.
    fn readiness_factor(self) -> f64 {
        match self {
            Difficulty::Easy => 1.2,
            Difficulty::Medium => 1.0,
            Difficulty::Hard => 0.8,
            Difficulty::Expert => 0.6,
        }
    }
}
