use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Snapshot of one applicant as collected by intake; the engine never
/// validates these fields, it scores whatever the caller assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub gpa: f64,
    pub education_level: EducationLevel,
    pub major: String,
    pub demographics: Demographics,
    pub financial: FinancialProfile,
    pub activities: Vec<Activity>,
    pub essays: Vec<Essay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    HighSchool,
    Associate,
    Bachelors,
    Masters,
    Doctoral,
    Other,
}

/// Self-reported demographic markers consumed only by the demographics
/// component and demographic-targeted awards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Demographics {
    pub ethnicity: String,
    pub gender: String,
    pub first_generation: bool,
    pub disability: bool,
    pub veteran: bool,
}

/// Declared household finances, in the same currency units as award amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FinancialProfile {
    pub family_income: f64,
    pub dependents: u32,
    pub assets: f64,
    pub expected_family_contribution: f64,
    pub financial_need: f64,
}

/// One extracurricular commitment with free-text duration as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    pub hours_per_week: f64,
    pub duration: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Leadership,
    Volunteer,
    Work,
    Academic,
    Sports,
    Arts,
}

/// Submitted essay; `quality_score` is an optional upstream reviewer grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Essay {
    pub word_count: u32,
    pub quality_score: Option<f64>,
    pub content: String,
}

/// One funding opportunity as advertised, with its eligibility requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub name: String,
    pub amount: f64,
    pub deadline: NaiveDate,
    pub competitiveness: Competitiveness,
    pub renewable: bool,
    pub requirements: Vec<Requirement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Competitiveness {
    Low,
    Medium,
    High,
}

impl Competitiveness {
    pub const fn label(self) -> &'static str {
        match self {
            Competitiveness::Low => "low",
            Competitiveness::Medium => "medium",
            Competitiveness::High => "high",
        }
    }
}

/// A single eligibility requirement attached to an opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub value: RequirementValue,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequirementKind {
    Gpa,
    Major,
    Demographic,
    Financial,
    Essay,
    Recommendation,
}

/// Structured requirement value so matching can consume typed data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequirementValue {
    Number(f64),
    Text(String),
}

impl RequirementValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RequirementValue::Number(value) => Some(*value),
            RequirementValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RequirementValue::Text(value) => Some(value),
            RequirementValue::Number(_) => None,
        }
    }
}
