use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Competitiveness, Opportunity, RequirementKind};

/// Deterministic estimate of what applying to one opportunity costs the
/// applicant, derived from the opportunity and the engine's as-of date only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationEffort {
    pub estimated_hours: f64,
    pub complexity: EffortComplexity,
    /// 0..=10; higher means a closer deadline.
    pub deadline_stress_level: u8,
    pub required_documents: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffortComplexity {
    Low,
    Medium,
    High,
}

pub(crate) fn estimate_application_effort(
    opportunity: &Opportunity,
    as_of: NaiveDate,
) -> ApplicationEffort {
    let mut hours = 5.0;

    hours += if opportunity.amount >= 50_000.0 {
        15.0
    } else if opportunity.amount >= 20_000.0 {
        10.0
    } else if opportunity.amount >= 5_000.0 {
        5.0
    } else {
        0.0
    };

    hours += match opportunity.competitiveness {
        Competitiveness::High => 10.0,
        Competitiveness::Medium => 5.0,
        Competitiveness::Low => 0.0,
    };

    hours += opportunity.requirements.len() as f64 * 2.0;

    let needs_essay = opportunity
        .requirements
        .iter()
        .any(|requirement| requirement.kind == RequirementKind::Essay);
    if needs_essay {
        hours += 8.0;
    }

    let mut complexity = if hours >= 25.0 {
        EffortComplexity::High
    } else if hours >= 12.0 {
        EffortComplexity::Medium
    } else {
        EffortComplexity::Low
    };
    if needs_essay && complexity < EffortComplexity::Medium {
        complexity = EffortComplexity::Medium;
    }

    ApplicationEffort {
        estimated_hours: hours,
        complexity,
        deadline_stress_level: deadline_stress(opportunity.deadline, as_of),
        required_documents: required_documents(opportunity),
    }
}

/// Past-due deadlines fall into the tightest band; filtering expired
/// opportunities out is the caller's concern.
fn deadline_stress(deadline: NaiveDate, as_of: NaiveDate) -> u8 {
    let days_left = (deadline - as_of).num_days();
    if days_left <= 7 {
        9
    } else if days_left <= 14 {
        6
    } else if days_left <= 30 {
        4
    } else {
        2
    }
}

fn required_documents(opportunity: &Opportunity) -> Vec<String> {
    let mut documents = vec!["Application form".to_string()];
    for requirement in &opportunity.requirements {
        let document = match requirement.kind {
            RequirementKind::Gpa => "Official transcript",
            RequirementKind::Major => "Proof of enrollment in major",
            RequirementKind::Demographic => "Eligibility documentation",
            RequirementKind::Financial => "Financial aid documentation (FAFSA/EFC)",
            RequirementKind::Essay => "Personal essay",
            RequirementKind::Recommendation => "Letters of recommendation",
        };
        if !documents.iter().any(|existing| existing == document) {
            documents.push(document.to_string());
        }
    }
    documents
}
