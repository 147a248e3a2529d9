use super::common::*;
use crate::scoring::advice::{GENERIC_DEADLINE_TIP, GENERIC_TAILORING_TIP, GPA_ADVICE};
use crate::scoring::{ScoringEngine, WeightOverrides};

#[test]
fn strong_profile_scores_in_the_high_eighties() {
    let engine = ScoringEngine::new();
    let breakdown = engine.calculate_score(&strong_profile());

    assert_eq!(breakdown.gpa, 25.0);
    assert_eq!(breakdown.education, 20.0);
    assert_eq!(breakdown.demographics, 10.5);
    assert_eq!(breakdown.financial, 12.15);
    assert_eq!(breakdown.activities, 10.95);
    assert_eq!(breakdown.essays, 10.0);
    assert_eq!(breakdown.total_score, 88.6);
    assert_eq!(breakdown.percentile, 90.0);
}

#[test]
fn modest_profile_collects_advice_for_every_component() {
    let engine = ScoringEngine::new();
    let breakdown = engine.calculate_score(&modest_profile());

    assert_eq!(breakdown.total_score, 40.0);
    assert_eq!(breakdown.percentile, 45.0);
    // six component nudges plus the two generic tips
    assert_eq!(breakdown.recommendations.len(), 8);
    assert_eq!(breakdown.recommendations[0], GPA_ADVICE);
    assert!(breakdown
        .recommendations
        .contains(&GENERIC_TAILORING_TIP.to_string()));
    assert!(breakdown
        .recommendations
        .contains(&GENERIC_DEADLINE_TIP.to_string()));
}

#[test]
fn strong_profile_keeps_only_generic_tips() {
    let engine = ScoringEngine::new();
    let breakdown = engine.calculate_score(&strong_profile());
    assert_eq!(
        breakdown.recommendations,
        vec![
            GENERIC_TAILORING_TIP.to_string(),
            GENERIC_DEADLINE_TIP.to_string()
        ]
    );
}

#[test]
fn totals_stay_within_bounds() {
    let engine = ScoringEngine::new();
    for profile in [modest_profile(), strong_profile()] {
        let breakdown = engine.calculate_score(&profile);
        assert!((0.0..=100.0).contains(&breakdown.total_score));
        assert!((0.0..=100.0).contains(&breakdown.percentile));
    }
}

#[test]
fn raising_gpa_never_lowers_the_total() {
    let engine = ScoringEngine::new();
    let mut previous = f64::MIN;
    let mut gpa = 2.5;
    while gpa <= 4.0 {
        let mut profile = modest_profile();
        profile.gpa = gpa;
        let total = engine.calculate_score(&profile).total_score;
        assert!(total >= previous, "total dipped at gpa {gpa}");
        previous = total;
        gpa += 0.05;
    }
}

#[test]
fn scoring_is_deterministic() {
    let engine = ScoringEngine::new();
    let profile = strong_profile();
    assert_eq!(
        engine.calculate_score(&profile),
        engine.calculate_score(&profile)
    );
}

#[test]
fn partial_override_breaking_the_sum_fails_construction() {
    let result = ScoringEngine::with_overrides(WeightOverrides {
        gpa: Some(0.5),
        education: Some(0.5),
        ..WeightOverrides::default()
    });
    assert!(result.is_err());
}

#[test]
fn explicit_zero_weights_summing_to_one_are_accepted() {
    let engine = ScoringEngine::with_overrides(WeightOverrides {
        gpa: Some(0.5),
        education: Some(0.5),
        demographics: Some(0.0),
        financial: Some(0.0),
        activities: Some(0.0),
        essays: Some(0.0),
    })
    .expect("exact unit sum with zero components is valid");

    let breakdown = engine.calculate_score(&strong_profile());
    // only gpa and education carry weight
    assert_eq!(breakdown.total_score, 100.0);
    assert_eq!(breakdown.demographics, 0.0);
}

#[test]
fn with_weights_returns_a_fresh_engine() {
    let engine = ScoringEngine::new();
    let reweighted = engine
        .with_weights(WeightOverrides {
            gpa: Some(0.30),
            essays: Some(0.05),
            ..WeightOverrides::default()
        })
        .expect("valid override");

    assert_eq!(engine.weights().gpa, 0.25);
    assert_eq!(reweighted.weights().gpa, 0.30);
}

#[test]
fn breakdown_serializes_round_trip() {
    let breakdown = ScoringEngine::new().calculate_score(&strong_profile());
    let json = serde_json::to_string(&breakdown).expect("serialize");
    let back: crate::scoring::ScoreBreakdown = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, breakdown);
}
