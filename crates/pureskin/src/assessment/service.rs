use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use crate::analysis::{
    AnalysisEngine, AnalysisResult, AnswerSet, AnswerTag, CaptureAngle, CaptureSet, RiskLevel,
};

use super::flow::{AssessmentStep, FlowError, FlowTrigger};
use super::questionnaire::{Questionnaire, QuestionnaireViolation};
use super::repository::{
    ReferralError, ReferralNotice, ReferralPublisher, RepositoryError, SessionId, SessionRecord,
    SessionRepository,
};

/// Service walking sessions through the wizard and running the engine
/// exactly once per walk-through.
pub struct AssessmentService<R, P> {
    questionnaire: Arc<Questionnaire>,
    repository: Arc<R>,
    referrals: Arc<P>,
    engine: Arc<AnalysisEngine>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("scan-{id:06}"))
}

impl<R, P> AssessmentService<R, P>
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    pub fn new(repository: Arc<R>, referrals: Arc<P>) -> Self {
        Self {
            questionnaire: Arc::new(Questionnaire::standard()),
            repository,
            referrals,
            engine: Arc::new(AnalysisEngine::new()),
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Open a new session. Creation applies the begin trigger, so stored
    /// sessions always sit at the quiz step or later.
    pub fn start(&self) -> Result<SessionRecord, SessionServiceError> {
        let step = AssessmentStep::Landing.advance(FlowTrigger::Begin)?;
        let record = SessionRecord {
            session_id: next_session_id(),
            step,
            answers: AnswerSet::new(),
            captures: CaptureSet::new(),
            started_at: Utc::now(),
            result: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Record one quiz answer. Finishing the last question advances the
    /// session to the capture guide.
    pub fn record_answer(
        &self,
        session_id: &SessionId,
        question: u8,
        tag: AnswerTag,
    ) -> Result<SessionRecord, SessionServiceError> {
        let mut record = self.fetch_session(session_id)?;

        if record.step != AssessmentStep::Quiz {
            return Err(SessionServiceError::StepMismatch {
                step: record.step,
                action: "record an answer",
            });
        }

        self.questionnaire.ensure_offered(question, tag)?;
        record.answers.record(question, tag);

        if self.questionnaire.is_complete(&record.answers) {
            record.step = record.step.advance(FlowTrigger::CompleteQuiz)?;
        }

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Record a capture angle. The first capture acknowledges the guide
    /// screen; later captures accumulate on the camera step.
    pub fn record_capture(
        &self,
        session_id: &SessionId,
        angle: CaptureAngle,
    ) -> Result<SessionRecord, SessionServiceError> {
        let mut record = self.fetch_session(session_id)?;

        if record.step == AssessmentStep::Guide {
            record.step = record.step.advance(FlowTrigger::AcknowledgeGuide)?;
        }

        if record.step != AssessmentStep::Camera {
            return Err(SessionServiceError::StepMismatch {
                step: record.step,
                action: "record a capture",
            });
        }

        record.captures.record(angle);
        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Run the engine over the collected snapshot and land on the result
    /// step. Captures are optional; a guide-step session is walked through
    /// the camera step with whatever it has. Warning-tier outcomes publish
    /// one professional referral notice.
    pub fn analyze(&self, session_id: &SessionId) -> Result<AnalysisResult, SessionServiceError> {
        let mut record = self.fetch_session(session_id)?;

        if record.step == AssessmentStep::Guide {
            record.step = record.step.advance(FlowTrigger::AcknowledgeGuide)?;
        }

        if record.step != AssessmentStep::Camera {
            return Err(SessionServiceError::StepMismatch {
                step: record.step,
                action: "run analysis",
            });
        }

        record.step = record.step.advance(FlowTrigger::FinishCapture)?;
        let result = self.engine.analyze(&record.answers, &record.captures);
        record.step = record.step.advance(FlowTrigger::CompleteAnalysis)?;
        record.result = Some(result.clone());

        self.repository.update(record.clone())?;

        if result.risk == RiskLevel::Warning {
            let mut details = BTreeMap::new();
            details.insert("risk".to_string(), result.risk.label().to_string());
            details.insert("index".to_string(), result.index.to_string());
            self.referrals.publish(ReferralNotice {
                template: "professional_referral".to_string(),
                session_id: record.session_id.clone(),
                risk: result.risk,
                details,
            })?;
        }

        Ok(result)
    }

    /// Start the wizard over: answers, captures, and any result are
    /// dropped; the session id and creation time are kept.
    pub fn reset(&self, session_id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        let mut record = self.fetch_session(session_id)?;

        record.step = record
            .step
            .advance(FlowTrigger::Restart)?
            .advance(FlowTrigger::Begin)?;
        record.answers = AnswerSet::new();
        record.captures = CaptureSet::new();
        record.result = None;

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Fetch a session and current status for API responses.
    pub fn get(&self, session_id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        self.fetch_session(session_id)
    }

    fn fetch_session(&self, session_id: &SessionId) -> Result<SessionRecord, SessionServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireViolation),
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Referral(#[from] ReferralError),
    #[error("cannot {action} while the session is at step {step:?}")]
    StepMismatch {
        step: AssessmentStep,
        action: &'static str,
    },
}
