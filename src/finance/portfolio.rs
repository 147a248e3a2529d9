use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ActivityKind, ApplicantProfile, Opportunity};
use crate::numeric::{round1, round2};

use super::budget::calculate_budget_impact;
use super::effort::estimate_application_effort;
use super::roi::{calculate_roi, RiskLevel};

/// Hard cap on how many applications one portfolio recommends.
pub const MAX_SELECTED: usize = 10;

/// Bucket allotments out of the notional [`MAX_SELECTED`] slots:
/// safe 40%, moderate 40%, reach 20%.
const SAFE_SLOTS: usize = 4;
const MODERATE_SLOTS: usize = 4;
const REACH_SLOTS: usize = 2;

/// Categorical grouping used to diversify the selected portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBucket {
    Safe,
    Moderate,
    Reach,
}

impl RiskBucket {
    fn from_risk(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::Low => RiskBucket::Safe,
            RiskLevel::Medium => RiskBucket::Moderate,
            RiskLevel::High => RiskBucket::Reach,
        }
    }

    fn composite_points(self) -> f64 {
        match self {
            RiskBucket::Safe => 100.0,
            RiskBucket::Moderate => 70.0,
            RiskBucket::Reach => 40.0,
        }
    }

    fn allotment(self) -> usize {
        match self {
            RiskBucket::Safe => SAFE_SLOTS,
            RiskBucket::Moderate => MODERATE_SLOTS,
            RiskBucket::Reach => REACH_SLOTS,
        }
    }
}

/// Share of the selected set in each risk bucket, as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RiskDistribution {
    pub safe_pct: f64,
    pub moderate_pct: f64,
    pub reach_pct: f64,
}

/// The recommended application slate and its aggregate economics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizedPortfolio {
    pub selected_opportunities: Vec<Opportunity>,
    pub total_potential_award: f64,
    pub total_estimated_effort_hours: f64,
    pub portfolio_roi: f64,
    pub risk_distribution: RiskDistribution,
}

struct Candidate {
    index: usize,
    score: f64,
    hours: f64,
    roi: f64,
    bucket: RiskBucket,
}

/// Greedy, budget-constrained selection over scored candidates.
///
/// Deliberately NOT a knapsack solver: candidates are taken in composite
/// score order (ties keep input order) while the hour budget and bucket
/// allotments hold out. The selection it produces is a compatibility
/// contract; replacing it with an exact optimizer would change outputs.
pub(crate) struct GreedyBudgetConstrainedSelector {
    max_effort_hours: f64,
}

impl GreedyBudgetConstrainedSelector {
    /// Hour budget from the applicant's circumstances: 80 hours less half
    /// of weekly work commitments, scaled down for below-par GPAs,
    /// never under 20.
    pub(crate) fn for_profile(profile: &ApplicantProfile) -> Self {
        let work_hours: f64 = profile
            .activities
            .iter()
            .filter(|activity| activity.kind == ActivityKind::Work)
            .map(|activity| activity.hours_per_week)
            .sum();

        let mut budget = 80.0 - 0.5 * work_hours;
        if profile.gpa < 3.0 {
            budget *= 0.7;
        } else if profile.gpa < 3.5 {
            budget *= 0.85;
        }

        Self {
            max_effort_hours: budget.max(20.0),
        }
    }

    pub(crate) fn max_effort_hours(&self) -> f64 {
        self.max_effort_hours
    }

    fn select(&self, mut candidates: Vec<Candidate>) -> Vec<Candidate> {
        // stable sort keeps input order on equal scores
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected = Vec::new();
        let mut hours_used = 0.0;
        let mut bucket_counts = [0usize; 3];

        for candidate in candidates {
            if selected.len() >= MAX_SELECTED {
                break;
            }
            if hours_used + candidate.hours > self.max_effort_hours {
                continue;
            }
            let bucket_slot = candidate.bucket as usize;
            if bucket_counts[bucket_slot] >= candidate.bucket.allotment() {
                continue;
            }
            hours_used += candidate.hours;
            bucket_counts[bucket_slot] += 1;
            selected.push(candidate);
        }
        selected
    }
}

pub(crate) fn optimize_portfolio(
    opportunities: &[Opportunity],
    profile: &ApplicantProfile,
    as_of: NaiveDate,
) -> OptimizedPortfolio {
    let selector = GreedyBudgetConstrainedSelector::for_profile(profile);

    let candidates = opportunities
        .iter()
        .enumerate()
        .map(|(index, opportunity)| {
            let effort = estimate_application_effort(opportunity, as_of);
            let roi = calculate_roi(opportunity, &effort);
            let budget = calculate_budget_impact(opportunity, &profile.financial);
            let bucket = RiskBucket::from_risk(roi.risk_level);

            let normalized_roi = roi.roi.clamp(0.0, 200.0) / 2.0;
            let normalized_benefit = if opportunity.amount > 0.0 {
                (budget.net_benefit / opportunity.amount * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };
            let score = 0.30 * normalized_roi
                + 0.30 * roi.win_probability
                + 0.25 * normalized_benefit
                + 0.15 * bucket.composite_points();

            Candidate {
                index,
                score,
                hours: effort.estimated_hours,
                roi: roi.roi,
                bucket,
            }
        })
        .collect();

    let selected = selector.select(candidates);
    tracing::debug!(
        considered = opportunities.len(),
        selected = selected.len(),
        max_effort_hours = selector.max_effort_hours(),
        "portfolio selection complete"
    );

    let total_potential_award = round2(
        selected
            .iter()
            .map(|candidate| opportunities[candidate.index].amount)
            .sum(),
    );
    let total_estimated_effort_hours =
        round2(selected.iter().map(|candidate| candidate.hours).sum());
    let portfolio_roi = if selected.is_empty() {
        0.0
    } else {
        round2(selected.iter().map(|candidate| candidate.roi).sum::<f64>() / selected.len() as f64)
    };

    let risk_distribution = distribution(&selected);

    OptimizedPortfolio {
        selected_opportunities: selected
            .iter()
            .map(|candidate| opportunities[candidate.index].clone())
            .collect(),
        total_potential_award,
        total_estimated_effort_hours,
        portfolio_roi,
        risk_distribution,
    }
}

fn distribution(selected: &[Candidate]) -> RiskDistribution {
    if selected.is_empty() {
        return RiskDistribution::default();
    }
    let total = selected.len() as f64;
    let share = |bucket: RiskBucket| {
        let count = selected
            .iter()
            .filter(|candidate| candidate.bucket == bucket)
            .count() as f64;
        round1(count / total * 100.0)
    };
    RiskDistribution {
        safe_pct: share(RiskBucket::Safe),
        moderate_pct: share(RiskBucket::Moderate),
        reach_pct: share(RiskBucket::Reach),
    }
}
