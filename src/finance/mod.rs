//! Financial decision support: budget impact, effort and risk adjusted
//! return estimates, and greedy portfolio selection across opportunities.

mod budget;
mod effort;
mod portfolio;
mod roi;

pub use budget::BudgetImpact;
pub use effort::{ApplicationEffort, EffortComplexity};
pub use portfolio::{OptimizedPortfolio, RiskBucket, RiskDistribution, MAX_SELECTED};
pub use roi::{RiskLevel, RoiAnalysis};

#[cfg(test)]
mod tests;

use chrono::NaiveDate;

use crate::domain::{ApplicantProfile, FinancialProfile, Opportunity};

/// Annual rate assumed lost by not investing the award elsewhere.
pub(crate) const OPPORTUNITY_COST_RATE: f64 = 0.15;
/// Assumed value of one hour of applicant time.
pub(crate) const HOURLY_TIME_VALUE: f64 = 25.0;
/// Policy ceiling on estimated win probability, not a statistical bound.
pub(crate) const WIN_PROBABILITY_CAP: f64 = 50.0;
/// Debt reduction is valued as a level annuity over this horizon.
pub(crate) const DEBT_HORIZON_YEARS: u32 = 10;
pub(crate) const DEBT_DISCOUNT_RATE: f64 = 0.06;

/// Stateless calculator over funding opportunities. The as-of date is fixed
/// at construction so every derived figure is a pure function of its inputs;
/// the engine never reads the wall clock.
pub struct FinancialDecisionEngine {
    as_of: NaiveDate,
}

impl FinancialDecisionEngine {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// What accepting this award would do to the applicant's finances.
    pub fn calculate_budget_impact(
        &self,
        opportunity: &Opportunity,
        financial: &FinancialProfile,
    ) -> BudgetImpact {
        budget::calculate_budget_impact(opportunity, financial)
    }

    /// Deterministic effort estimate for applying to this opportunity.
    pub fn estimate_application_effort(&self, opportunity: &Opportunity) -> ApplicationEffort {
        effort::estimate_application_effort(opportunity, self.as_of)
    }

    /// Return estimate for a given effort profile.
    pub fn calculate_roi(&self, opportunity: &Opportunity, effort: &ApplicationEffort) -> RoiAnalysis {
        roi::calculate_roi(opportunity, effort)
    }

    /// Effort estimation and ROI in one step.
    pub fn analyze(&self, opportunity: &Opportunity) -> (ApplicationEffort, RoiAnalysis) {
        let effort = self.estimate_application_effort(opportunity);
        let analysis = roi::calculate_roi(opportunity, &effort);
        (effort, analysis)
    }

    /// Greedy, budget-constrained application slate. See
    /// [`OptimizedPortfolio`]; the heuristic is intentionally not an exact
    /// optimizer and its output is a compatibility contract.
    pub fn optimize_portfolio(
        &self,
        opportunities: &[Opportunity],
        profile: &ApplicantProfile,
    ) -> OptimizedPortfolio {
        portfolio::optimize_portfolio(opportunities, profile, self.as_of)
    }
}
