use super::common::*;
use crate::domain::{RequirementKind, RequirementValue};
use crate::scoring::ScoringEngine;

#[test]
fn no_requirements_leaves_the_total_untouched() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(Vec::new());
    assert_eq!(
        engine.scholarship_match(&strong_profile(), &opportunity),
        88.6
    );
}

#[test]
fn met_gpa_requirement_boosts_by_ten_percent() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![requirement(
        RequirementKind::Gpa,
        RequirementValue::Number(3.5),
    )]);
    assert_eq!(
        engine.scholarship_match(&strong_profile(), &opportunity),
        97.46
    );
}

#[test]
fn unmet_gpa_requirement_cuts_twenty_percent() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![requirement(
        RequirementKind::Gpa,
        RequirementValue::Number(3.99),
    )]);
    assert_eq!(
        engine.scholarship_match(&strong_profile(), &opportunity),
        70.88
    );
}

#[test]
fn matching_major_boosts_by_fifteen_percent() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![requirement(
        RequirementKind::Major,
        RequirementValue::Text("history".to_string()),
    )]);
    assert_eq!(engine.scholarship_match(&modest_profile(), &opportunity), 46.0);
}

#[test]
fn mismatched_major_requirement_changes_nothing() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![requirement(
        RequirementKind::Major,
        RequirementValue::Text("nursing".to_string()),
    )]);
    assert_eq!(engine.scholarship_match(&modest_profile(), &opportunity), 40.0);
}

#[test]
fn demographic_requirement_boosts_without_checking_the_value() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![requirement(
        RequirementKind::Demographic,
        RequirementValue::Text("left-handed cellists".to_string()),
    )]);
    // flat 1.05 regardless of whether the profile matches
    assert_eq!(engine.scholarship_match(&modest_profile(), &opportunity), 42.0);
}

#[test]
fn financial_requirement_checks_the_efc_threshold() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![requirement(
        RequirementKind::Financial,
        RequirementValue::Number(5_000.0),
    )]);

    assert_eq!(
        engine.scholarship_match(&strong_profile(), &opportunity),
        97.46
    );
    // modest profile's EFC of 20k misses the threshold: no adjustment
    assert_eq!(engine.scholarship_match(&modest_profile(), &opportunity), 40.0);
}

#[test]
fn essay_and_recommendation_requirements_do_not_adjust() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![
        requirement(RequirementKind::Essay, RequirementValue::Number(500.0)),
        requirement(
            RequirementKind::Recommendation,
            RequirementValue::Number(2.0),
        ),
    ]);
    assert_eq!(engine.scholarship_match(&modest_profile(), &opportunity), 40.0);
}

#[test]
fn stacked_boosts_cap_at_100() {
    let engine = ScoringEngine::new();
    let opportunity = opportunity_with_requirements(vec![
        requirement(RequirementKind::Gpa, RequirementValue::Number(3.5)),
        requirement(
            RequirementKind::Major,
            RequirementValue::Text("computer".to_string()),
        ),
        requirement(RequirementKind::Financial, RequirementValue::Number(5_000.0)),
    ]);
    assert_eq!(
        engine.scholarship_match(&strong_profile(), &opportunity),
        100.0
    );
}
