use chrono::NaiveDate;

use crate::domain::{
    Activity, ActivityKind, ApplicantProfile, Competitiveness, Demographics, EducationLevel,
    FinancialProfile, Opportunity, Requirement, RequirementKind, RequirementValue,
};

/// Fixed evaluation date so every derived figure is reproducible.
pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date")
}

/// A deadline comfortably past every stress band.
pub(super) fn distant_deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date")
}

pub(super) fn opportunity(name: &str, amount: f64, competitiveness: Competitiveness) -> Opportunity {
    Opportunity {
        name: name.to_string(),
        amount,
        deadline: distant_deadline(),
        competitiveness,
        renewable: false,
        requirements: Vec::new(),
    }
}

pub(super) fn essay_requirement() -> Requirement {
    Requirement {
        kind: RequirementKind::Essay,
        value: RequirementValue::Number(500.0),
        required: true,
    }
}

pub(super) fn requirement(kind: RequirementKind) -> Requirement {
    Requirement {
        kind,
        value: RequirementValue::Number(1.0),
        required: true,
    }
}

pub(super) fn applicant(gpa: f64, weekly_work_hours: f64) -> ApplicantProfile {
    let activities = if weekly_work_hours > 0.0 {
        vec![Activity {
            kind: ActivityKind::Work,
            hours_per_week: weekly_work_hours,
            duration: "2 years".to_string(),
            achievements: Vec::new(),
        }]
    } else {
        Vec::new()
    };

    ApplicantProfile {
        gpa,
        education_level: EducationLevel::Bachelors,
        major: "Biology".to_string(),
        demographics: Demographics::default(),
        financial: FinancialProfile {
            family_income: 40_000.0,
            dependents: 1,
            assets: 2_000.0,
            expected_family_contribution: 3_000.0,
            financial_need: 20_000.0,
        },
        activities,
        essays: Vec::new(),
    }
}
