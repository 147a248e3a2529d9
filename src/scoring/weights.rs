use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Tolerance on the unit-sum invariant; overrides are user supplied and
/// rarely land on exact binary fractions.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Default importance of each scoring component.
pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    gpa: 0.25,
    education: 0.20,
    demographics: 0.15,
    financial: 0.15,
    activities: 0.15,
    essays: 0.10,
};

/// Importance assigned to each of the six scoring components. Must sum to
/// 1.0; a validated set is immutable for the lifetime of its engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub gpa: f64,
    pub education: f64,
    pub demographics: f64,
    pub financial: f64,
    pub activities: f64,
    pub essays: f64,
}

impl ScoreWeights {
    pub fn sum(&self) -> f64 {
        self.gpa + self.education + self.demographics + self.financial + self.activities
            + self.essays
    }

    pub(crate) fn validate(self) -> Result<Self, EngineError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::Configuration { sum });
        }
        Ok(self)
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Partial override merged over [`DEFAULT_WEIGHTS`]; unspecified components
/// keep their default importance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct WeightOverrides {
    pub gpa: Option<f64>,
    pub education: Option<f64>,
    pub demographics: Option<f64>,
    pub financial: Option<f64>,
    pub activities: Option<f64>,
    pub essays: Option<f64>,
}

impl WeightOverrides {
    pub(crate) fn merge_over_defaults(self) -> ScoreWeights {
        let base = DEFAULT_WEIGHTS;
        ScoreWeights {
            gpa: self.gpa.unwrap_or(base.gpa),
            education: self.education.unwrap_or(base.education),
            demographics: self.demographics.unwrap_or(base.demographics),
            financial: self.financial.unwrap_or(base.financial),
            activities: self.activities.unwrap_or(base.activities),
            essays: self.essays.unwrap_or(base.essays),
        }
    }
}
