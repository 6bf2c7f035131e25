//! Property tests for the scoring engines: bounds and monotonicity that
//! must hold for every well-formed input, not just the fixtures.

use chrono::{Duration, Utc};
use murshid_core::burnout::{burnout_score, risk_level, RiskLevel, WorkSnapshot};
use murshid_core::config::{DistributionTuning, RagWeights};
use murshid_core::distribution::rag::rag_score;
use murshid_core::distribution::{
    Difficulty, EmployeeProfile, Priority, SkillLevel, TaskToDistribute, WorkingHours,
};
use proptest::prelude::*;

fn snapshot(
    work_hours: f64,
    tasks_overdue: u32,
    error_rate: f64,
    focus_score: f64,
    rest_days: f64,
) -> WorkSnapshot {
    WorkSnapshot {
        work_hours,
        tasks_completed: 0,
        tasks_overdue,
        error_rate,
        focus_score,
        rest_days,
    }
}

proptest! {
    #[test]
    fn burnout_score_stays_within_bounds(
        work_hours in 0.0f64..200.0,
        tasks_overdue in 0u32..50,
        error_rate in 0.0f64..30.0,
        focus_score in 0.0f64..=100.0,
        rest_days in 0.0f64..7.0,
    ) {
        let score = burnout_score(&snapshot(
            work_hours, tasks_overdue, error_rate, focus_score, rest_days,
        )).unwrap();
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn burnout_score_is_monotone_in_work_hours(
        work_hours in 50.0f64..150.0,
        extra in 0.0f64..50.0,
        focus_score in 0.0f64..=100.0,
    ) {
        let base = burnout_score(&snapshot(work_hours, 0, 0.0, focus_score, 2.0)).unwrap();
        let more = burnout_score(&snapshot(work_hours + extra, 0, 0.0, focus_score, 2.0)).unwrap();
        prop_assert!(more >= base);
    }

    #[test]
    fn burnout_score_is_monotone_in_overdue_and_errors(
        tasks_overdue in 0u32..20,
        error_rate in 0.0f64..10.0,
        bump in 0.0f64..10.0,
    ) {
        let base = burnout_score(&snapshot(40.0, tasks_overdue, error_rate, 80.0, 2.0)).unwrap();
        let more_overdue =
            burnout_score(&snapshot(40.0, tasks_overdue + 3, error_rate, 80.0, 2.0)).unwrap();
        let more_errors =
            burnout_score(&snapshot(40.0, tasks_overdue, error_rate + bump, 80.0, 2.0)).unwrap();
        prop_assert!(more_overdue >= base);
        prop_assert!(more_errors >= base);
    }

    #[test]
    fn burnout_score_never_rises_with_focus(
        focus_score in 0.0f64..90.0,
        gain in 0.0f64..10.0,
    ) {
        let base = burnout_score(&snapshot(40.0, 2, 1.0, focus_score, 2.0)).unwrap();
        let sharper = burnout_score(&snapshot(40.0, 2, 1.0, focus_score + gain, 2.0)).unwrap();
        prop_assert!(sharper <= base);
    }

    #[test]
    fn risk_level_matches_the_ladder(score in 0.0f64..=100.0) {
        let level = risk_level(score);
        let expected = if score >= 80.0 {
            RiskLevel::Critical
        } else if score >= 60.0 {
            RiskLevel::High
        } else if score >= 40.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        prop_assert_eq!(level, expected);
    }

    #[test]
    fn rag_overall_stays_within_bounds(
        level in 0.0f64..=100.0,
        workload in 0.0f64..=100.0,
        performance in 0.0f64..=100.0,
        burnout in 0.0f64..=100.0,
        days_out in 0i64..60,
    ) {
        let now = Utc::now();
        let employee = EmployeeProfile {
            id: "e".to_string(),
            name: "E".to_string(),
            position: "Dev".to_string(),
            skills: vec![SkillLevel {
                skill: "React".to_string(),
                level,
                last_used: now,
                certifications: Vec::new(),
            }],
            current_workload: workload,
            availability: 100.0,
            performance_score: performance,
            burnout_score: burnout,
            stress_level: 10.0,
            recent_successes: 1,
            recent_failures: 0,
            preferred_task_types: vec!["frontend".to_string()],
            working_hours: WorkingHours { start: 9, end: 17 },
            timezone: "UTC".to_string(),
        };
        let task = TaskToDistribute {
            id: "t".to_string(),
            title: "T".to_string(),
            description: String::new(),
            category: "dev".to_string(),
            priority: Priority::Medium,
            estimated_hours: 8.0,
            difficulty: Difficulty::Medium,
            required_skills: vec!["React".to_string()],
            deadline: now + Duration::days(days_out),
            tags: vec!["frontend".to_string()],
        };

        let score = rag_score(
            &employee,
            &task,
            &RagWeights::default(),
            &DistributionTuning::default(),
            now,
        );
        prop_assert!((0.0..=100.0).contains(&score.overall));
        prop_assert!((0.0..=100.0).contains(&score.readiness));
        prop_assert!((0.0..=100.0).contains(&score.availability));
        prop_assert!((0.0..=100.0).contains(&score.growth));
    }
}
