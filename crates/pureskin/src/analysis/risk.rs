use serde::{Deserialize, Serialize};

use super::answers::{AnswerSet, AnswerTag, LESION_CHANGE_QUESTION, SYMPTOM_QUESTION};

/// Coarse triage tier derived from answers alone, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    Warning,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Warning => "warning",
        }
    }
}

/// Top-down precedence over the lesion-change and symptom answers; the
/// first matching rule wins, so a warning condition dominates caution.
pub fn classify_risk(answers: &AnswerSet) -> RiskLevel {
    let lesion = answers.get(LESION_CHANGE_QUESTION);
    let symptom = answers.get(SYMPTOM_QUESTION);

    if lesion == Some(AnswerTag::HighRisk) || symptom == Some(AnswerTag::Inflammation) {
        return RiskLevel::Warning;
    }

    if lesion == Some(AnswerTag::MediumRisk) || symptom == Some(AnswerTag::Sensitive) {
        return RiskLevel::Caution;
    }

    RiskLevel::Safe
}
