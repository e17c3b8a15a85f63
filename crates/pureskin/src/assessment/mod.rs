//! Guided assessment sessions: the wizard flow, the quiz contract, session
//! storage, and the HTTP surface that walks a client from landing screen to
//! analysis result.

pub mod flow;
pub mod questionnaire;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use flow::{AssessmentStep, FlowError, FlowTrigger};
pub use questionnaire::{AnswerOption, QuestionDefinition, Questionnaire, QuestionnaireViolation};
pub use repository::{
    ReferralError, ReferralNotice, ReferralPublisher, RepositoryError, SessionId, SessionRecord,
    SessionRepository, SessionStatusView,
};
pub use router::assessment_router;
pub use service::{AssessmentService, SessionServiceError};
