use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::analysis::{AnswerTag, CaptureAngle};
use crate::assessment::repository::{
    ReferralError, ReferralNotice, ReferralPublisher, RepositoryError, SessionId, SessionRecord,
    SessionRepository,
};
use crate::assessment::{assessment_router, AssessmentService, SessionServiceError};

pub(super) fn calm_answers() -> Vec<(u8, AnswerTag)> {
    vec![
        (1, AnswerTag::LowRisk),
        (2, AnswerTag::Clean),
        (3, AnswerTag::Combination),
    ]
}

pub(super) fn warning_answers() -> Vec<(u8, AnswerTag)> {
    vec![
        (1, AnswerTag::HighRisk),
        (2, AnswerTag::Inflammation),
        (3, AnswerTag::Dry),
    ]
}

pub(super) fn complete_quiz(
    service: &AssessmentService<MemoryRepository, MemoryReferrals>,
    session_id: &SessionId,
    answers: Vec<(u8, AnswerTag)>,
) -> Result<SessionRecord, SessionServiceError> {
    let mut record = service.get(session_id)?;
    for (question, tag) in answers {
        record = service.record_answer(session_id, question, tag)?;
    }
    Ok(record)
}

pub(super) fn side_profile_captures() -> Vec<CaptureAngle> {
    vec![CaptureAngle::Front, CaptureAngle::Left, CaptureAngle::Right]
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryReferrals>,
    Arc<MemoryRepository>,
    Arc<MemoryReferrals>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let referrals = Arc::new(MemoryReferrals::default());
    let service = AssessmentService::new(repository.clone(), referrals.clone());
    (service, repository, referrals)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryReferrals {
    events: Arc<Mutex<Vec<ReferralNotice>>>,
}

impl MemoryReferrals {
    pub(super) fn events(&self) -> Vec<ReferralNotice> {
        self.events.lock().expect("referral mutex poisoned").clone()
    }
}

impl ReferralPublisher for MemoryReferrals {
    fn publish(&self, notice: ReferralNotice) -> Result<(), ReferralError> {
        self.events
            .lock()
            .expect("referral mutex poisoned")
            .push(notice);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl SessionRepository for ConflictRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository, MemoryReferrals>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
