//! Convenience facade running both engines for one applicant against a
//! catalog of opportunities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ApplicantProfile, Opportunity};
use crate::error::EngineError;
use crate::finance::{
    ApplicationEffort, BudgetImpact, FinancialDecisionEngine, OptimizedPortfolio, RoiAnalysis,
};
use crate::scoring::{ScoreBreakdown, ScoringEngine, WeightOverrides};

/// Per-opportunity detail in a [`DecisionReport`], in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityReport {
    pub opportunity_name: String,
    /// Match strength 0..=100 against this opportunity's requirements.
    pub match_score: f64,
    pub effort: ApplicationEffort,
    pub roi: RoiAnalysis,
    pub budget: BudgetImpact,
}

/// Combined output of both engines for one (applicant, catalog) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionReport {
    pub score: ScoreBreakdown,
    pub opportunities: Vec<OpportunityReport>,
    pub portfolio: OptimizedPortfolio,
}

/// Service composing the scoring and financial engines, mirroring how a
/// caller consumes them together. Both engines stay independent; neither
/// calls the other.
pub struct DecisionService {
    scoring: ScoringEngine,
    finance: FinancialDecisionEngine,
}

impl DecisionService {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            scoring: ScoringEngine::new(),
            finance: FinancialDecisionEngine::new(as_of),
        }
    }

    pub fn with_weights(as_of: NaiveDate, overrides: WeightOverrides) -> Result<Self, EngineError> {
        Ok(Self {
            scoring: ScoringEngine::with_overrides(overrides)?,
            finance: FinancialDecisionEngine::new(as_of),
        })
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn finance(&self) -> &FinancialDecisionEngine {
        &self.finance
    }

    pub fn report(
        &self,
        profile: &ApplicantProfile,
        opportunities: &[Opportunity],
    ) -> DecisionReport {
        let score = self.scoring.calculate_score(profile);

        let per_opportunity = opportunities
            .iter()
            .map(|opportunity| {
                let match_score = self.scoring.scholarship_match(profile, opportunity);
                let (effort, roi) = self.finance.analyze(opportunity);
                let budget = self
                    .finance
                    .calculate_budget_impact(opportunity, &profile.financial);
                OpportunityReport {
                    opportunity_name: opportunity.name.clone(),
                    match_score,
                    effort,
                    roi,
                    budget,
                }
            })
            .collect();

        let portfolio = self.finance.optimize_portfolio(opportunities, profile);

        tracing::info!(
            total_score = score.total_score,
            considered = opportunities.len(),
            selected = portfolio.selected_opportunities.len(),
            "decision report assembled"
        );

        DecisionReport {
            score,
            opportunities: per_opportunity,
            portfolio,
        }
    }
}
