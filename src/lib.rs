//! Scholarship matching and financial decision engine.
//!
//! Two independent calculators consumed together: a multi-factor applicant
//! [`ScoringEngine`] and a [`FinancialDecisionEngine`] (budget impact, ROI,
//! greedy portfolio selection), plus a [`DecisionService`] facade combining
//! both. The library is pure and synchronous: every operation is a
//! deterministic function of its inputs and the engine's immutable
//! configuration. Persistence, transport, and rendering belong to callers.

pub mod domain;
pub mod error;
pub mod finance;
pub mod numeric;
pub mod report;
pub mod scoring;

pub use domain::{
    Activity, ActivityKind, ApplicantProfile, Competitiveness, Demographics, EducationLevel, Essay,
    FinancialProfile, Opportunity, Requirement, RequirementKind, RequirementValue,
};
pub use error::EngineError;
pub use finance::{
    ApplicationEffort, BudgetImpact, EffortComplexity, FinancialDecisionEngine,
    OptimizedPortfolio, RiskBucket, RiskDistribution, RiskLevel, RoiAnalysis,
};
pub use report::{DecisionReport, DecisionService, OpportunityReport};
pub use scoring::{ScoreBreakdown, ScoreWeights, ScoringEngine, WeightOverrides};
