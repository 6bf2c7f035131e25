//! # Murshid Core Library
//!
//! Decision engines for the Murshid management console: pure, deterministic
//! scoring computations that the UI layers call with plain data snapshots.
//! The engines perform no I/O and hold no shared state, so they can be
//! invoked concurrently without coordination.
//!
//! ## Architecture
//!
//! - **Burnout engine**: 0-100 burnout scoring, fatigue level, symptom
//!   detection, risk classification, and linear trend projection
//! - **Distribution engine**: RAG (red/amber/green) scoring of employees
//!   against tasks, single and batch assignment with simulated workload
//! - **Influencer engine**: campaign performance prediction, ROI and risk
//!   assessment, recommendation tiers, and ranking
//! - **Policy**: every scoring weight and threshold in one TOML-overridable
//!   document
//!
//! ## Key Components
//!
//! - [`BurnoutAnalyzer`]: full burnout assessments
//! - [`DistributionEngine`]: task-to-employee assignment
//! - [`InfluencerPredictor`]: influencer/campaign predictions
//! - [`EnginePolicy`]: tunable scoring policy

pub mod burnout;
pub mod config;
pub mod distribution;
pub mod error;
pub mod influencer;

pub use burnout::{
    burnout_score, detect_symptoms, fatigue_level, predict_future_burnout, risk_level,
    AnalysisInput, BurnoutAnalyzer, BurnoutAssessment, BurnoutPrediction, RiskLevel, Severity,
    Symptom, SymptomKind, TrendPoint, WorkSnapshot,
};
pub use config::{DistributionTuning, EnginePolicy, PredictionWeights, RagWeights};
pub use distribution::{
    Assignment, Difficulty, DistributionConfig, DistributionEngine, EmployeeProfile, Priority,
    RagColor, RagScore, SkillLevel, TaskToDistribute, WorkingHours,
};
pub use error::{DistributionError, EngineError, Result};
pub use influencer::{
    rank_influencers, CampaignRisk, CampaignType, InfluencerData, InfluencerPredictor, Platform,
    PredictionResult, Recommendation,
};
