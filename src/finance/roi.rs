use serde::{Deserialize, Serialize};

use crate::domain::{Competitiveness, Opportunity};
use crate::numeric::round2;

use super::effort::{ApplicationEffort, EffortComplexity};
use super::{HOURLY_TIME_VALUE, WIN_PROBABILITY_CAP};

/// Per-stress-point cost of a compressed timeline.
const STRESS_COST_PER_POINT: f64 = 50.0;

/// Effort and risk adjusted return estimate for one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiAnalysis {
    /// Percent return on the estimated application cost.
    pub roi: f64,
    /// Heuristic success likelihood, capped at the policy ceiling of 50.
    pub win_probability: f64,
    pub expected_value: f64,
    pub risk_level: RiskLevel,
    pub time_to_complete_hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

fn complexity_cost_multiplier(complexity: EffortComplexity) -> f64 {
    match complexity {
        EffortComplexity::Low => 1.0,
        EffortComplexity::Medium => 1.5,
        EffortComplexity::High => 2.5,
    }
}

fn base_win_rate(competitiveness: Competitiveness) -> f64 {
    match competitiveness {
        Competitiveness::Low => 25.0,
        Competitiveness::Medium => 10.0,
        Competitiveness::High => 3.0,
    }
}

fn effort_win_multiplier(complexity: EffortComplexity) -> f64 {
    match complexity {
        EffortComplexity::Low => 0.7,
        EffortComplexity::Medium => 1.0,
        EffortComplexity::High => 1.5,
    }
}

/// Discounts the nominal amount by how volatile awards of this tier are.
pub(crate) fn risk_adjustment(competitiveness: Competitiveness) -> f64 {
    match competitiveness {
        Competitiveness::Low => 0.9,
        Competitiveness::Medium => 0.7,
        Competitiveness::High => 0.4,
    }
}

pub(crate) fn calculate_roi(opportunity: &Opportunity, effort: &ApplicationEffort) -> RoiAnalysis {
    let stress = f64::from(effort.deadline_stress_level);

    let application_cost = effort.estimated_hours
        * HOURLY_TIME_VALUE
        * complexity_cost_multiplier(effort.complexity)
        + stress * STRESS_COST_PER_POINT;

    let stress_penalty = (1.0 - stress * 0.1).max(0.5);
    let win_probability = (base_win_rate(opportunity.competitiveness)
        * effort_win_multiplier(effort.complexity)
        * stress_penalty)
        .min(WIN_PROBABILITY_CAP);

    let expected_value =
        win_probability * (opportunity.amount * risk_adjustment(opportunity.competitiveness))
            / 100.0;

    let roi = if application_cost > 0.0 {
        round2((expected_value - application_cost) / application_cost * 100.0)
    } else {
        0.0
    };

    RoiAnalysis {
        roi,
        win_probability: round2(win_probability),
        expected_value: round2(expected_value),
        risk_level: risk_level(opportunity, effort),
        time_to_complete_hours: effort.estimated_hours,
    }
}

/// Integer risk ladder; the cut points (>=6 high, >=3 medium) are fixed
/// business rules.
fn risk_level(opportunity: &Opportunity, effort: &ApplicationEffort) -> RiskLevel {
    let mut score = match opportunity.competitiveness {
        Competitiveness::Low => 1,
        Competitiveness::Medium => 2,
        Competitiveness::High => 4,
    };
    score += match effort.complexity {
        EffortComplexity::Low => 0,
        EffortComplexity::Medium => 1,
        EffortComplexity::High => 2,
    };
    score += if effort.deadline_stress_level >= 7 {
        2
    } else if effort.deadline_stress_level >= 4 {
        1
    } else {
        0
    };
    score += if opportunity.amount > 50_000.0 {
        2
    } else if opportunity.amount > 20_000.0 {
        1
    } else {
        0
    };

    if score >= 6 {
        RiskLevel::High
    } else if score >= 3 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
