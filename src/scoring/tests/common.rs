use chrono::NaiveDate;

use crate::domain::{
    Activity, ActivityKind, ApplicantProfile, Competitiveness, Demographics, EducationLevel,
    Essay, FinancialProfile, Opportunity, Requirement, RequirementKind, RequirementValue,
};

/// Modest applicant: every component lands below its advice threshold.
pub(super) fn modest_profile() -> ApplicantProfile {
    ApplicantProfile {
        gpa: 2.9,
        education_level: EducationLevel::HighSchool,
        major: "History".to_string(),
        demographics: Demographics::default(),
        financial: FinancialProfile {
            family_income: 85_000.0,
            dependents: 0,
            assets: 50_000.0,
            expected_family_contribution: 20_000.0,
            financial_need: 5_000.0,
        },
        activities: Vec::new(),
        essays: Vec::new(),
    }
}

/// Strong applicant: 3.95 GPA, first-generation doctoral student in a
/// high-demand major with three activities and one well-sized essay.
pub(super) fn strong_profile() -> ApplicantProfile {
    ApplicantProfile {
        gpa: 3.95,
        education_level: EducationLevel::Doctoral,
        major: "Computer Science".to_string(),
        demographics: Demographics {
            first_generation: true,
            ..Demographics::default()
        },
        financial: FinancialProfile {
            family_income: 28_000.0,
            dependents: 2,
            assets: 1_000.0,
            expected_family_contribution: 1_000.0,
            financial_need: 20_000.0,
        },
        activities: vec![
            activity(ActivityKind::Leadership, 5.0, "2 years", &["Club president"]),
            activity(ActivityKind::Volunteer, 4.0, "3 semesters", &[]),
            activity(ActivityKind::Academic, 6.0, "1 year", &["Dean's list"]),
        ],
        essays: vec![Essay {
            word_count: 567,
            quality_score: Some(85.0),
            content: "My goal is to give back to my community through service and \
                      leadership. I overcame the challenge of being the first in my \
                      family to attend college, and I want my work to make a lasting \
                      impact and a real difference for the students who come after me."
                .to_string(),
        }],
    }
}

pub(super) fn activity(
    kind: ActivityKind,
    hours_per_week: f64,
    duration: &str,
    achievements: &[&str],
) -> Activity {
    Activity {
        kind,
        hours_per_week,
        duration: duration.to_string(),
        achievements: achievements.iter().map(|entry| entry.to_string()).collect(),
    }
}

pub(super) fn opportunity_with_requirements(requirements: Vec<Requirement>) -> Opportunity {
    Opportunity {
        name: "STEM Merit Award".to_string(),
        amount: 10_000.0,
        deadline: NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date"),
        competitiveness: Competitiveness::Medium,
        renewable: false,
        requirements,
    }
}

pub(super) fn requirement(kind: RequirementKind, value: RequirementValue) -> Requirement {
    Requirement {
        kind,
        value,
        required: true,
    }
}
