use crate::domain::{ActivityKind, ApplicantProfile, EducationLevel};
use crate::numeric::clamp_score;

use super::keywords::{
    contains_any, ESSAY_KEYWORD_GROUPS, FEMALE_GENDER_MARKERS, HIGH_DEMAND_MAJORS,
    LONG_DURATION_MARKERS, MODERATE_DEMAND_MAJORS, UNDERREPRESENTED_ETHNICITIES,
};

/// Raw (unweighted) value of each component, already clamped to 0..=100.
pub(crate) struct RawComponents {
    pub gpa: f64,
    pub education: f64,
    pub demographics: f64,
    pub financial: f64,
    pub activities: f64,
    pub essays: f64,
}

pub(crate) fn score_profile(profile: &ApplicantProfile) -> RawComponents {
    RawComponents {
        gpa: gpa_component(profile.gpa),
        education: education_component(profile),
        demographics: demographics_component(profile),
        financial: financial_component(profile),
        activities: activities_component(profile),
        essays: essays_component(profile),
    }
}

/// Descending GPA band table. Both top bands saturate at 100 so any GPA of
/// 3.8 or better earns the full component.
const GPA_BANDS: &[(f64, f64)] = &[
    (4.0, 100.0),
    (3.8, 100.0),
    (3.5, 90.0),
    (3.2, 82.0),
    (3.0, 75.0),
    (2.8, 68.0),
    (2.5, 58.0),
    (2.0, 45.0),
];

pub(crate) fn gpa_component(gpa: f64) -> f64 {
    for (floor, score) in GPA_BANDS {
        if gpa >= *floor {
            return *score;
        }
    }
    // below the last breakpoint, fall off linearly toward zero
    clamp_score(gpa / 2.0 * 45.0)
}

fn education_level_points(level: EducationLevel) -> f64 {
    match level {
        EducationLevel::Doctoral => 40.0,
        EducationLevel::Masters => 35.0,
        EducationLevel::Bachelors => 30.0,
        EducationLevel::Associate => 25.0,
        EducationLevel::HighSchool => 20.0,
        EducationLevel::Other => 15.0,
    }
}

fn major_demand_points(major: &str) -> f64 {
    if contains_any(major, HIGH_DEMAND_MAJORS) {
        35.0
    } else if contains_any(major, MODERATE_DEMAND_MAJORS) {
        25.0
    } else {
        15.0
    }
}

fn gpa_tier_points(gpa: f64) -> f64 {
    if gpa >= 3.8 {
        25.0
    } else if gpa >= 3.5 {
        20.0
    } else if gpa >= 3.2 {
        15.0
    } else if gpa >= 3.0 {
        10.0
    } else if gpa >= 2.5 {
        5.0
    } else {
        0.0
    }
}

pub(crate) fn education_component(profile: &ApplicantProfile) -> f64 {
    let total = education_level_points(profile.education_level)
        + major_demand_points(&profile.major)
        + gpa_tier_points(profile.gpa);
    clamp_score(total)
}

pub(crate) fn demographics_component(profile: &ApplicantProfile) -> f64 {
    let demographics = &profile.demographics;
    let mut score = 50.0;
    if demographics.first_generation {
        score += 20.0;
    }
    if demographics.disability {
        score += 15.0;
    }
    if demographics.veteran {
        score += 20.0;
    }
    if contains_any(&demographics.ethnicity, UNDERREPRESENTED_ETHNICITIES) {
        score += 15.0;
    }
    if contains_any(&demographics.gender, FEMALE_GENDER_MARKERS) {
        score += 10.0;
    }
    clamp_score(score)
}

pub(crate) fn financial_component(profile: &ApplicantProfile) -> f64 {
    let financial = &profile.financial;
    let income = financial.family_income;

    // zero or negative income reads as maximal need
    let efc_ratio = if income > 0.0 {
        financial.expected_family_contribution / income
    } else {
        0.0
    };
    let efc_points = if efc_ratio <= 0.05 {
        40.0
    } else if efc_ratio <= 0.10 {
        30.0
    } else if efc_ratio <= 0.20 {
        20.0
    } else {
        10.0
    };

    let income_points = if income < 30_000.0 {
        35.0
    } else if income < 50_000.0 {
        25.0
    } else if income < 75_000.0 {
        15.0
    } else if income < 100_000.0 {
        10.0
    } else {
        5.0
    };

    let dependent_points = (f64::from(financial.dependents) * 3.0).min(15.0);

    let asset_penalty = if income > 0.0 && financial.assets > income * 0.5 {
        10.0
    } else if income > 0.0 && financial.assets > income * 0.25 {
        5.0
    } else {
        0.0
    };

    clamp_score(efc_points + income_points + dependent_points - asset_penalty)
}

fn activity_base(kind: ActivityKind, hours_per_week: f64) -> f64 {
    let (multiplier, cap) = match kind {
        ActivityKind::Leadership => (3.0, 30.0),
        ActivityKind::Volunteer => (2.5, 25.0),
        ActivityKind::Academic => (2.5, 25.0),
        ActivityKind::Work => (2.0, 20.0),
        ActivityKind::Sports => (1.5, 15.0),
        ActivityKind::Arts => (1.5, 15.0),
    };
    (hours_per_week * multiplier).min(cap)
}

pub(crate) fn activities_component(profile: &ApplicantProfile) -> f64 {
    if profile.activities.is_empty() {
        return 20.0;
    }

    let mut score = 0.0;
    let mut kinds = std::collections::HashSet::new();
    let mut leadership_count = 0usize;

    for activity in &profile.activities {
        score += activity_base(activity.kind, activity.hours_per_week);
        score += activity.achievements.len() as f64 * 2.0;
        if contains_any(&activity.duration, LONG_DURATION_MARKERS) {
            score += 3.0;
        }
        kinds.insert(activity.kind);
        if activity.kind == ActivityKind::Leadership {
            leadership_count += 1;
        }
    }

    score += match kinds.len() {
        0 | 1 => 0.0,
        2 => 5.0,
        3 => 10.0,
        _ => 15.0,
    };
    score += match leadership_count {
        0 => 0.0,
        1 => 10.0,
        _ => 20.0,
    };

    clamp_score(score)
}

fn word_count_points(word_count: u32) -> f64 {
    match word_count {
        500..=650 => 20.0,
        350..=499 | 651..=800 => 10.0,
        200..=349 | 801..=1000 => 0.0,
        _ => -10.0,
    }
}

fn essay_score(essay: &crate::domain::Essay) -> f64 {
    let mut score = 50.0;
    score += word_count_points(essay.word_count);
    if let Some(quality) = essay.quality_score {
        score += quality * 0.3;
    }
    for group in ESSAY_KEYWORD_GROUPS {
        if contains_any(&essay.content, group) {
            score += 5.0;
        }
    }
    // penalize placeholder-length submissions
    if essay.content.len() < 100 {
        score -= 15.0;
    } else if essay.content.len() < 250 {
        score -= 5.0;
    }
    score
}

pub(crate) fn essays_component(profile: &ApplicantProfile) -> f64 {
    if profile.essays.is_empty() {
        return 30.0;
    }

    let mean = profile.essays.iter().map(essay_score).sum::<f64>() / profile.essays.len() as f64;
    let boosted = match profile.essays.len() {
        1 => mean,
        2 => mean * 1.05,
        _ => mean * 1.10,
    };
    clamp_score(boosted)
}
