use serde::{Deserialize, Serialize};

use crate::domain::{FinancialProfile, Opportunity};
use crate::numeric::{annuity_present_value, format_percent, round2};

use super::{DEBT_DISCOUNT_RATE, DEBT_HORIZON_YEARS, OPPORTUNITY_COST_RATE};

/// Tax treatment applied to the award: the portion above the exemption is
/// assumed taxable at a flat rate.
const TAX_EXEMPT_THRESHOLD: f64 = 20_000.0;
const TAX_RATE: f64 = 0.22;

/// Assumed annual salary benefit a completed degree unlocks, used for the
/// payback estimate.
const ASSUMED_ANNUAL_BENEFIT: f64 = 5_000.0;

pub(crate) const EXCELLENT_BENEFIT_NOTE: &str =
    "Excellent net benefit: most of this award translates directly into reduced costs.";
pub(crate) const SOLID_BENEFIT_NOTE: &str =
    "Solid net benefit after taxes; prioritize this award in your applications.";
pub(crate) const MODEST_BENEFIT_NOTE: &str =
    "Modest net benefit; weigh the application effort against smaller awards first.";
pub(crate) const RENEWABLE_NOTE: &str =
    "This award is renewable; factor multi-year value into your decision.";
pub(crate) const LOW_INCOME_NOTE: &str =
    "With a family income under $30,000 you likely qualify for additional need-based aid.";
pub(crate) const HIGH_NEED_NOTE: &str =
    "Unmet need exceeds half of family income; pursue multiple awards in parallel.";

/// What accepting one award does to the applicant's finances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetImpact {
    pub net_benefit: f64,
    pub debt_reduction_present_value: f64,
    pub opportunity_cost: f64,
    /// `f64::INFINITY` when no salary benefit is assumed.
    pub payback_period_years: f64,
    pub recommendations: Vec<String>,
}

pub(crate) fn calculate_budget_impact(
    opportunity: &Opportunity,
    financial: &FinancialProfile,
) -> BudgetImpact {
    let amount = opportunity.amount;

    let taxable = (amount - TAX_EXEMPT_THRESHOLD).max(0.0);
    let after_tax = amount - taxable * TAX_RATE;

    // scale by how much of the award addresses documented need
    let need_ratio = if amount > 0.0 {
        (financial.financial_need / amount).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let need_factor = 0.5 + 0.5 * need_ratio;
    let net_benefit = round2(after_tax * need_factor);

    let debt_reduced = amount.min(financial.financial_need).max(0.0);
    let debt_reduction_present_value = round2(annuity_present_value(
        debt_reduced / f64::from(DEBT_HORIZON_YEARS),
        DEBT_DISCOUNT_RATE,
        DEBT_HORIZON_YEARS,
    ));

    let opportunity_cost = round2(amount * OPPORTUNITY_COST_RATE);

    let annual_benefit = (amount / 4.0).min(ASSUMED_ANNUAL_BENEFIT);
    let payback_period_years = if annual_benefit > 0.0 {
        round2(amount / annual_benefit)
    } else {
        f64::INFINITY
    };

    let mut recommendations = Vec::new();
    let benefit_ratio = if amount > 0.0 { net_benefit / amount } else { 0.0 };
    if benefit_ratio >= 0.8 {
        recommendations.push(EXCELLENT_BENEFIT_NOTE.to_string());
    } else if benefit_ratio >= 0.6 {
        recommendations.push(SOLID_BENEFIT_NOTE.to_string());
    } else {
        recommendations.push(MODEST_BENEFIT_NOTE.to_string());
    }
    if opportunity.renewable {
        recommendations.push(RENEWABLE_NOTE.to_string());
    }
    if financial.family_income < 30_000.0 {
        recommendations.push(LOW_INCOME_NOTE.to_string());
    }
    if financial.financial_need > financial.family_income * 0.5 {
        recommendations.push(HIGH_NEED_NOTE.to_string());
    }
    tracing::debug!(
        award = opportunity.name.as_str(),
        net_benefit,
        benefit_ratio = format_percent(benefit_ratio).as_str(),
        "budget impact computed"
    );

    BudgetImpact {
        net_benefit,
        debt_reduction_present_value,
        opportunity_cost,
        payback_period_years,
        recommendations,
    }
}
