use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisResult, AnswerSet, CaptureSet, RiskLevel};

use super::flow::AssessmentStep;

/// Identifier wrapper for assessment sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Repository record: everything one wizard walk-through has collected,
/// plus the analysis outcome once the session reaches the result step.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub step: AssessmentStep,
    pub answers: AnswerSet,
    pub captures: CaptureSet,
    pub started_at: DateTime<Utc>,
    pub result: Option<AnalysisResult>,
}

impl SessionRecord {
    pub fn status_view(&self) -> SessionStatusView {
        SessionStatusView {
            session_id: self.session_id.clone(),
            step: self.step.label(),
            answered_questions: self.answers.len(),
            captured_angles: self.captures.len(),
            risk: self.result.as_ref().map(|result| result.risk),
            index: self.result.as_ref().map(|result| result.index),
        }
    }
}

/// Sanitized representation of a session's exposed progress.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub step: &'static str,
    pub answered_questions: usize,
    pub captured_angles: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u8>,
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Results live only inside the process; nothing survives a restart.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook notified when an analysis lands in the warning tier.
pub trait ReferralPublisher: Send + Sync {
    fn publish(&self, notice: ReferralNotice) -> Result<(), ReferralError>;
}

/// Referral payload so routes/tests can assert the integration boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferralNotice {
    pub template: String,
    pub session_id: SessionId,
    pub risk: RiskLevel,
    pub details: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReferralError {
    #[error("referral transport unavailable: {0}")]
    Transport(String),
}
