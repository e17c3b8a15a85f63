use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use pureskin::analysis::{AnswerTag, CaptureAngle, RiskLevel};
use pureskin::assessment::{
    AssessmentService, AssessmentStep, ReferralError, ReferralNotice, ReferralPublisher,
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};

#[derive(Default)]
struct FakeRepository {
    records: Mutex<HashMap<SessionId, SessionRecord>>,
}

impl SessionRepository for FakeRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex");
        if !guard.contains_key(&record.session_id) {
            return Err(RepositoryError::NotFound);
        }
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default)]
struct FakeReferrals {
    notices: Mutex<Vec<ReferralNotice>>,
}

impl FakeReferrals {
    fn notices(&self) -> Vec<ReferralNotice> {
        self.notices.lock().expect("referral mutex").clone()
    }
}

impl ReferralPublisher for FakeReferrals {
    fn publish(&self, notice: ReferralNotice) -> Result<(), ReferralError> {
        self.notices.lock().expect("referral mutex").push(notice);
        Ok(())
    }
}

fn build_service() -> (
    AssessmentService<FakeRepository, FakeReferrals>,
    Arc<FakeReferrals>,
) {
    let repository = Arc::new(FakeRepository::default());
    let referrals = Arc::new(FakeReferrals::default());
    let service = AssessmentService::new(repository, referrals.clone());
    (service, referrals)
}

#[test]
fn full_walkthrough_produces_a_stored_result() {
    let (service, referrals) = build_service();

    let record = service.start().expect("session starts");
    assert_eq!(record.step, AssessmentStep::Quiz);

    service
        .record_answer(&record.session_id, 1, AnswerTag::LowRisk)
        .expect("answer recorded");
    service
        .record_answer(&record.session_id, 2, AnswerTag::Clean)
        .expect("answer recorded");
    let record = service
        .record_answer(&record.session_id, 3, AnswerTag::Combination)
        .expect("answer recorded");
    assert_eq!(record.step, AssessmentStep::Guide);

    service
        .record_capture(&record.session_id, CaptureAngle::Left)
        .expect("capture recorded");
    service
        .record_capture(&record.session_id, CaptureAngle::Right)
        .expect("capture recorded");

    let result = service.analyze(&record.session_id).expect("analysis runs");
    assert_eq!(result.risk, RiskLevel::Safe);
    assert_eq!(result.confidence, 87);

    let stored = service.get(&record.session_id).expect("session fetched");
    assert_eq!(stored.step, AssessmentStep::Result);
    let view = stored.status_view();
    assert_eq!(view.risk, Some(RiskLevel::Safe));
    assert!(view.index.is_some());

    assert!(referrals.notices().is_empty());
}

#[test]
fn warning_walkthrough_notifies_the_referral_channel() {
    let (service, referrals) = build_service();

    let record = service.start().expect("session starts");
    service
        .record_answer(&record.session_id, 1, AnswerTag::HighRisk)
        .expect("answer recorded");
    service
        .record_answer(&record.session_id, 2, AnswerTag::Inflammation)
        .expect("answer recorded");
    service
        .record_answer(&record.session_id, 3, AnswerTag::Dry)
        .expect("answer recorded");

    let result = service.analyze(&record.session_id).expect("analysis runs");
    assert_eq!(result.risk, RiskLevel::Warning);

    let notices = referrals.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].template, "professional_referral");
    assert_eq!(notices[0].session_id, record.session_id);
}

#[test]
fn reset_rearms_the_wizard_for_a_second_walkthrough() {
    let (service, referrals) = build_service();

    let record = service.start().expect("session starts");
    service
        .record_answer(&record.session_id, 1, AnswerTag::HighRisk)
        .expect("answer recorded");
    service
        .record_answer(&record.session_id, 2, AnswerTag::Inflammation)
        .expect("answer recorded");
    service
        .record_answer(&record.session_id, 3, AnswerTag::Dry)
        .expect("answer recorded");
    service.analyze(&record.session_id).expect("analysis runs");

    let reset = service.reset(&record.session_id).expect("session resets");
    assert_eq!(reset.step, AssessmentStep::Quiz);
    assert!(reset.result.is_none());

    service
        .record_answer(&record.session_id, 1, AnswerTag::LowRisk)
        .expect("answer recorded");
    service
        .record_answer(&record.session_id, 2, AnswerTag::Clean)
        .expect("answer recorded");
    service
        .record_answer(&record.session_id, 3, AnswerTag::Oily)
        .expect("answer recorded");

    let second = service.analyze(&record.session_id).expect("analysis runs");
    assert_eq!(second.risk, RiskLevel::Safe);

    // Only the first walkthrough crossed the warning tier.
    assert_eq!(referrals.notices().len(), 1);
}
