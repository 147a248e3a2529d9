//! Rule-generated advice strings. The exact wording is part of the output
//! contract; downstream consumers render these verbatim.

use super::ScoreBreakdown;

pub(crate) const GPA_ADVICE: &str =
    "Focus on raising your GPA; academic performance carries the largest weight in most awards.";
pub(crate) const EDUCATION_ADVICE: &str =
    "Highlight coursework and credentials aligned with high-demand fields of study.";
pub(crate) const DEMOGRAPHICS_ADVICE: &str =
    "Search for scholarships targeted at your specific background and circumstances.";
pub(crate) const FINANCIAL_ADVICE: &str =
    "Complete the FAFSA and document financial need to qualify for need-based awards.";
pub(crate) const ACTIVITIES_ADVICE: &str =
    "Deepen involvement in fewer activities; sustained leadership outweighs breadth.";
pub(crate) const ESSAYS_ADVICE: &str =
    "Revise essays toward 500-650 words with concrete goals, challenges, and community impact.";
pub(crate) const GENERIC_TAILORING_TIP: &str =
    "Tailor every application to the sponsor's mission instead of reusing one essay.";
pub(crate) const GENERIC_DEADLINE_TIP: &str =
    "Apply early and track deadlines; late applications are rarely considered.";

/// Thresholds are on the weighted component values as reported in the
/// breakdown, not on the raw 0..=100 scores.
pub(crate) fn recommendations_for(breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut advice = Vec::new();
    if breakdown.gpa < 20.0 {
        advice.push(GPA_ADVICE.to_string());
    }
    if breakdown.education < 12.0 {
        advice.push(EDUCATION_ADVICE.to_string());
    }
    if breakdown.demographics < 9.0 {
        advice.push(DEMOGRAPHICS_ADVICE.to_string());
    }
    if breakdown.financial < 9.0 {
        advice.push(FINANCIAL_ADVICE.to_string());
    }
    if breakdown.activities < 9.0 {
        advice.push(ACTIVITIES_ADVICE.to_string());
    }
    if breakdown.essays < 6.0 {
        advice.push(ESSAYS_ADVICE.to_string());
    }
    advice.push(GENERIC_TAILORING_TIP.to_string());
    advice.push(GENERIC_DEADLINE_TIP.to_string());
    advice
}
