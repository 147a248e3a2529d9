//! Multi-factor applicant scoring: six weighted components, a percentile
//! ladder, rule-generated advice, and per-opportunity match adjustment.

mod advice;
mod components;
mod keywords;
mod percentile;
mod weights;

pub use keywords::{
    ESSAY_KEYWORD_GROUPS, FEMALE_GENDER_MARKERS, HIGH_DEMAND_MAJORS, LONG_DURATION_MARKERS,
    MODERATE_DEMAND_MAJORS, UNDERREPRESENTED_ETHNICITIES,
};
pub use weights::{ScoreWeights, WeightOverrides, DEFAULT_WEIGHTS, WEIGHT_SUM_TOLERANCE};

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::domain::{ApplicantProfile, Opportunity, RequirementKind};
use crate::error::EngineError;
use crate::numeric::round2;

/// Stateless scorer applying an immutable weight configuration to applicant
/// profiles. Reconfiguration means constructing a new engine; an instance is
/// safe to share across threads.
pub struct ScoringEngine {
    weights: ScoreWeights,
}

impl ScoringEngine {
    /// Engine with the default component weights.
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Engine with a partial weight override merged over the defaults.
    /// Fails when the merged weights do not sum to 1.0.
    pub fn with_overrides(overrides: WeightOverrides) -> Result<Self, EngineError> {
        let weights = overrides.merge_over_defaults().validate()?;
        Ok(Self { weights })
    }

    /// New engine from this one with different overrides; the receiver is
    /// untouched so in-flight calculations never observe a weight change.
    pub fn with_weights(&self, overrides: WeightOverrides) -> Result<Self, EngineError> {
        Self::with_overrides(overrides)
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Scores a profile into its weighted breakdown, percentile, and advice.
    pub fn calculate_score(&self, profile: &ApplicantProfile) -> ScoreBreakdown {
        let raw = components::score_profile(profile);
        let weights = &self.weights;

        let mut breakdown = ScoreBreakdown {
            gpa: round2(raw.gpa * weights.gpa),
            education: round2(raw.education * weights.education),
            demographics: round2(raw.demographics * weights.demographics),
            financial: round2(raw.financial * weights.financial),
            activities: round2(raw.activities * weights.activities),
            essays: round2(raw.essays * weights.essays),
            total_score: 0.0,
            percentile: 0.0,
            recommendations: Vec::new(),
        };
        breakdown.total_score = round2(
            raw.gpa * weights.gpa
                + raw.education * weights.education
                + raw.demographics * weights.demographics
                + raw.financial * weights.financial
                + raw.activities * weights.activities
                + raw.essays * weights.essays,
        );
        breakdown.percentile = percentile::percentile_for(breakdown.total_score);
        breakdown.recommendations = advice::recommendations_for(&breakdown);
        breakdown
    }

    /// Match strength (0..=100) of a profile against one opportunity: the
    /// total score adjusted multiplicatively per requirement.
    pub fn scholarship_match(&self, profile: &ApplicantProfile, opportunity: &Opportunity) -> f64 {
        let mut score = self.calculate_score(profile).total_score;

        for requirement in &opportunity.requirements {
            match requirement.kind {
                RequirementKind::Gpa => {
                    if let Some(minimum) = requirement.value.as_number() {
                        score *= if profile.gpa >= minimum { 1.10 } else { 0.80 };
                    }
                }
                RequirementKind::Major => {
                    if let Some(wanted) = requirement.value.as_text() {
                        if profile.major.to_lowercase().contains(&wanted.to_lowercase()) {
                            score *= 1.15;
                        }
                    }
                }
                RequirementKind::Demographic => {
                    // Flat boost whenever a demographic requirement exists;
                    // the stated value is deliberately not checked against
                    // the profile. Downstream consumers depend on this
                    // number, so the rule must stay as-is.
                    score *= 1.05;
                }
                RequirementKind::Financial => {
                    if let Some(threshold) = requirement.value.as_number() {
                        if profile.financial.expected_family_contribution <= threshold {
                            score *= 1.10;
                        }
                    }
                }
                RequirementKind::Essay | RequirementKind::Recommendation => {}
            }
        }

        round2(score.min(100.0))
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Weighted component scores plus the derived totals and advice. Each
/// component field is the raw 0..=100 value already multiplied by its
/// configured weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub gpa: f64,
    pub education: f64,
    pub demographics: f64,
    pub financial: f64,
    pub activities: f64,
    pub essays: f64,
    pub total_score: f64,
    pub percentile: f64,
    pub recommendations: Vec<String>,
}
