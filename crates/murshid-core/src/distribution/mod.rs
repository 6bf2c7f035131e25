//! Smart task distribution engine.
//!
//! Matches tasks to employees using [`rag`] scoring, picks the best
//! qualified candidate, and explains the decision (reasoning lines,
//! alternatives, completion estimate, risk factors, recommendations).
//! Batch distribution simulates workload growth inside the call so later
//! tasks see the headroom earlier assignments consumed; the caller's
//! candidate list is never mutated.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DistributionTuning, RagWeights};
use crate::error::{DistributionError, EngineError, Result};

pub mod rag;

pub use rag::{rag_score, RagColor, RagScore};

/// Task priority as entered on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Task difficulty as entered on the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// One skill an employee holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillLevel {
    pub skill: String,
    /// Proficiency (0-100)
    pub level: f64,
    pub last_used: DateTime<Utc>,
    pub certifications: Vec<String>,
}

/// Daily working-hours window (hours 0-23).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: u8,
    pub end: u8,
}

/// Employee snapshot used for assignment decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub id: String,
    pub name: String,
    pub position: String,
    pub skills: Vec<SkillLevel>,
    /// Percent of capacity already committed (0-100)
    pub current_workload: f64,
    /// Declared availability (0-100)
    pub availability: f64,
    /// Overall performance score (0-100)
    pub performance_score: f64,
    /// Latest burnout score (0-100)
    pub burnout_score: f64,
    /// Latest stress level (0-100)
    pub stress_level: f64,
    pub recent_successes: u32,
    pub recent_failures: u32,
    /// Task tags the employee prefers to work on
    pub preferred_task_types: Vec<String>,
    pub working_hours: WorkingHours,
    pub timezone: String,
}

impl EmployeeProfile {
    /// Reject profiles whose percent fields are out of range.
    pub fn validate(&self) -> Result<()> {
        let percents = [
            ("current_workload", self.current_workload),
            ("availability", self.availability),
            ("performance_score", self.performance_score),
            ("burnout_score", self.burnout_score),
            ("stress_level", self.stress_level),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::invalid(field, "must be within 0-100"));
            }
        }
        for skill in &self.skills {
            if !(0.0..=100.0).contains(&skill.level) {
                return Err(EngineError::invalid(
                    "skills.level",
                    format!("proficiency for '{}' must be within 0-100", skill.skill),
                ));
            }
        }
        Ok(())
    }
}

/// A task waiting to be assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskToDistribute {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub estimated_hours: f64,
    pub difficulty: Difficulty,
    pub required_skills: Vec<String>,
    pub deadline: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl TaskToDistribute {
    pub fn validate(&self) -> Result<()> {
        if self.estimated_hours < 0.0 {
            return Err(EngineError::invalid(
                "estimated_hours",
                "must be non-negative",
            ));
        }
        Ok(())
    }
}

/// A ranked alternative to the selected assignee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub employee_id: String,
    pub employee_name: String,
    pub score: f64,
    pub reason: String,
}

/// Outcome of assigning one task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub task_id: String,
    pub task_title: String,
    pub selected_employee: EmployeeProfile,
    /// Overall RAG score of the selected employee (0-100)
    pub score: f64,
    pub rag: RagScore,
    pub reasoning: Vec<String>,
    pub alternatives: Vec<Alternative>,
    pub estimated_completion: DateTime<Utc>,
    /// Estimated probability the assignment succeeds (0-100)
    pub success_probability: f64,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Distribution engine configuration.
#[derive(Debug, Clone)]
pub struct DistributionConfig {
    pub weights: RagWeights,
    pub tuning: DistributionTuning,
    /// Reference time for deadline math and completion estimates
    pub current_time: DateTime<Utc>,
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            weights: RagWeights::default(),
            tuning: DistributionTuning::default(),
            current_time: Utc::now(),
        }
    }
}

/// Task distribution engine.
pub struct DistributionEngine {
    config: DistributionConfig,
}

impl Default for DistributionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionEngine {
    /// Create an engine with the default policy, stamped with the current
    /// time.
    pub fn new() -> Self {
        Self {
            config: DistributionConfig::default(),
        }
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(config: DistributionConfig) -> Self {
        Self { config }
    }

    /// Score one candidate against one task.
    pub fn rag_score(&self, employee: &EmployeeProfile, task: &TaskToDistribute) -> RagScore {
        rag_score(
            employee,
            task,
            &self.config.weights,
            &self.config.tuning,
            self.config.current_time,
        )
    }

    /// Assign a task to the best qualified candidate.
    ///
    /// Candidates qualify when their readiness sub-score reaches the
    /// configured minimum. Among qualified candidates the highest overall
    /// score wins; on a tie the first-seen candidate is kept.
    pub fn assign_task(
        &self,
        task: &TaskToDistribute,
        candidates: &[EmployeeProfile],
    ) -> Result<Assignment> {
        task.validate()?;
        for candidate in candidates {
            candidate.validate()?;
        }

        let scores: Vec<RagScore> = candidates
            .iter()
            .map(|employee| self.rag_score(employee, task))
            .collect();

        let mut qualified: Vec<usize> = (0..candidates.len())
            .filter(|&i| scores[i].readiness >= self.config.tuning.min_readiness)
            .collect();

        if qualified.is_empty() {
            return Err(DistributionError::NoQualifiedCandidates.into());
        }

        // Stable descending sort keeps first-seen order among equals.
        qualified.sort_by(|&a, &b| {
            scores[b]
                .overall
                .partial_cmp(&scores[a].overall)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let best = qualified[0];
        let employee = &candidates[best];
        let rag = scores[best].clone();

        let reasoning = self.reasoning(employee, &rag);
        let alternatives = qualified[1..]
            .iter()
            .take(3)
            .map(|&i| Alternative {
                employee_id: candidates[i].id.clone(),
                employee_name: candidates[i].name.clone(),
                score: scores[i].overall,
                reason: alternative_reason(&scores[i]),
            })
            .collect();

        let estimated_completion = self.estimate_completion(employee, task);
        let success_probability = self.success_probability(employee, task, &rag);
        let risk_factors = self.risk_factors(employee, task);
        let recommendations = self.recommendations(employee, task, &risk_factors);

        Ok(Assignment {
            task_id: task.id.clone(),
            task_title: task.title.clone(),
            selected_employee: employee.clone(),
            score: rag.overall,
            rag,
            reasoning,
            alternatives,
            estimated_completion,
            success_probability,
            risk_factors,
            recommendations,
        })
    }

    /// Assign a batch of tasks in the given order.
    ///
    /// Each assignment bumps the winner's simulated workload by the task's
    /// share of the weekly capacity, so later tasks in the batch see the
    /// reduced headroom. Operates on a call-local copy of the candidates.
    pub fn assign_tasks(
        &self,
        tasks: &[TaskToDistribute],
        candidates: &[EmployeeProfile],
    ) -> Result<Vec<Assignment>> {
        let mut pool: Vec<EmployeeProfile> = candidates.to_vec();
        let mut assignments = Vec::with_capacity(tasks.len());

        for task in tasks {
            let assignment = self.assign_task(task, &pool)?;

            if let Some(winner) = pool
                .iter_mut()
                .find(|e| e.id == assignment.selected_employee.id)
            {
                let delta = task.estimated_hours / self.config.tuning.weekly_capacity_hours * 100.0;
                winner.current_workload = (winner.current_workload + delta).min(100.0);
            }

            assignments.push(assignment);
        }

        Ok(assignments)
    }

    fn reasoning(&self, employee: &EmployeeProfile, rag: &RagScore) -> Vec<String> {
        let mut reasons = Vec::new();

        reasons.push(format!("{} selected for the task", employee.name));
        reasons.push(format!("Overall score: {:.0}/100", rag.overall));

        if rag.readiness >= 80.0 {
            reasons.push(format!(
                "Excellent readiness ({:.0}%): holds the required skills",
                rag.readiness
            ));
        } else if rag.readiness >= 60.0 {
            reasons.push(format!(
                "Good readiness ({:.0}%): qualified for the task",
                rag.readiness
            ));
        } else {
            reasons.push(format!(
                "Moderate readiness ({:.0}%): may need support",
                rag.readiness
            ));
        }

        if rag.availability >= 70.0 {
            reasons.push(format!(
                "Available with enough time ({:.0}%)",
                rag.availability
            ));
        } else if rag.availability >= 40.0 {
            reasons.push(format!(
                "Partially available ({:.0}%): priorities may need adjusting",
                rag.availability
            ));
        } else {
            reasons.push(format!(
                "High workload ({:.0}%): needs follow-up",
                rag.availability
            ));
        }

        if rag.growth >= 70.0 {
            reasons.push(format!("Excellent growth opportunity ({:.0}%)", rag.growth));
        } else if rag.growth >= 50.0 {
            reasons.push(format!("Good learning opportunity ({:.0}%)", rag.growth));
        }

        if employee.burnout_score > 70.0 {
            reasons.push("Warning: elevated burnout indicators".to_string());
        }
        if employee.stress_level > 70.0 {
            reasons.push("Warning: high stress level".to_string());
        }
        if employee.recent_successes > 5 {
            reasons.push(format!(
                "Strong track record: {} recent successes",
                employee.recent_successes
            ));
        }

        reasons
    }

    /// Completion estimate: nominal hours stretched by performance and
    /// current workload, at the configured effective pace.
    fn estimate_completion(
        &self,
        employee: &EmployeeProfile,
        task: &TaskToDistribute,
    ) -> DateTime<Utc> {
        let performance_factor = employee.performance_score.max(1.0) / 100.0;
        let workload_factor = 1.0 + employee.current_workload / 100.0;
        let effective_hours = task.estimated_hours / performance_factor * workload_factor;

        let days = (effective_hours / self.config.tuning.effective_hours_per_day).ceil() as i64;
        self.config.current_time + Duration::days(days)
    }

    fn success_probability(
        &self,
        employee: &EmployeeProfile,
        task: &TaskToDistribute,
        rag: &RagScore,
    ) -> f64 {
        let mut probability = rag.overall;

        if employee.recent_successes > employee.recent_failures {
            probability += 10.0;
        }
        if employee.burnout_score > 70.0 {
            probability -= 15.0;
        }
        if task.priority == Priority::Urgent && employee.current_workload > 70.0 {
            probability -= 10.0;
        }

        probability.clamp(0.0, 100.0)
    }

    fn risk_factors(&self, employee: &EmployeeProfile, task: &TaskToDistribute) -> Vec<String> {
        let mut risks = Vec::new();

        if employee.burnout_score > 70.0 {
            risks.push("Burnout risk: needs close follow-up".to_string());
        }
        if employee.current_workload > 80.0 {
            risks.push("Very high workload: delivery may slip".to_string());
        }

        let days_until_deadline = task
            .deadline
            .signed_duration_since(self.config.current_time)
            .num_seconds() as f64
            / 86_400.0;
        let required_days = task.estimated_hours / self.config.tuning.effective_hours_per_day;
        if days_until_deadline < required_days * 1.2 {
            risks.push("Tight schedule: deadline is close".to_string());
        }

        if task.difficulty == Difficulty::Expert && employee.performance_score < 80.0 {
            risks.push("Complex task: extra support may be needed".to_string());
        }
        if employee.recent_failures > 2 {
            risks.push("Recent failures: needs support and follow-up".to_string());
        }

        risks
    }

    fn recommendations(
        &self,
        employee: &EmployeeProfile,
        task: &TaskToDistribute,
        risks: &[String],
    ) -> Vec<String> {
        let mut recs = Vec::new();

        if !risks.is_empty() {
            recs.push("Daily progress follow-up".to_string());
        }
        if employee.burnout_score > 60.0 {
            recs.push("Provide extra breaks".to_string());
            recs.push("Support session with the supervisor".to_string());
        }
        if matches!(task.difficulty, Difficulty::Hard | Difficulty::Expert) {
            recs.push("Assign a mentor for assistance".to_string());
            recs.push("Provide additional learning resources".to_string());
        }
        if employee.current_workload > 70.0 {
            recs.push("Reorder current priorities".to_string());
        }
        if task.priority == Priority::Urgent {
            recs.push("Reserve focused, interruption-free time".to_string());
        }

        if recs.is_empty() {
            recs.push("Task fits well: no further recommendations".to_string());
        }

        recs
    }
}

fn alternative_reason(score: &RagScore) -> String {
    if score.overall >= 70.0 {
        format!("Also an excellent option ({:.0} points)", score.overall)
    } else if score.overall >= 50.0 {
        format!("Good fallback option ({:.0} points)", score.overall)
    } else {
        format!("Reserve option ({:.0} points)", score.overall)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Candidate matching the console's reference fixture: low workload,
    /// high performance, one strong skill.
    pub fn employee_with_skill(id: &str, skill: &str, level: f64) -> EmployeeProfile {
        EmployeeProfile {
            id: id.to_string(),
            name: format!("Employee {id}"),
            position: "Developer".to_string(),
            skills: vec![SkillLevel {
                skill: skill.to_string(),
                level,
                last_used: Utc::now(),
                certifications: Vec::new(),
            }],
            current_workload: 20.0,
            availability: 100.0,
            performance_score: 90.0,
            burnout_score: 10.0,
            stress_level: 10.0,
            recent_successes: 5,
            recent_failures: 0,
            preferred_task_types: vec!["frontend".to_string()],
            working_hours: WorkingHours { start: 9, end: 17 },
            timezone: "UTC".to_string(),
        }
    }

    pub fn task_requiring(
        id: &str,
        skills: &[&str],
        deadline: DateTime<Utc>,
    ) -> TaskToDistribute {
        TaskToDistribute {
            id: id.to_string(),
            title: format!("Task {id}"),
            description: "Fixture task".to_string(),
            category: "dev".to_string(),
            priority: Priority::Medium,
            estimated_hours: 8.0,
            difficulty: Difficulty::Medium,
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            deadline,
            tags: vec!["frontend".to_string()],
        }
    }
}
