use metrics_exporter_prometheus::PrometheusHandle;
use pureskin::analysis::{AnswerTag, CaptureAngle};
use pureskin::assessment::{
    ReferralError, ReferralNotice, ReferralPublisher, RepositoryError, SessionId, SessionRecord,
    SessionRepository,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
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
        if guard.contains_key(&record.session_id) {
            guard.insert(record.session_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Surfaces referral notices in the service logs. A real deployment would
/// hand these to a clinical routing integration instead.
#[derive(Default, Clone)]
pub(crate) struct LoggingReferralPublisher;

impl ReferralPublisher for LoggingReferralPublisher {
    fn publish(&self, notice: ReferralNotice) -> Result<(), ReferralError> {
        info!(
            template = %notice.template,
            session_id = %notice.session_id.0,
            risk = notice.risk.label(),
            "referral notice published"
        );
        Ok(())
    }
}

pub(crate) fn parse_answer_tag(raw: &str) -> Result<AnswerTag, String> {
    AnswerTag::parse(raw.trim()).ok_or_else(|| {
        format!("failed to parse '{raw}' as an answer tag (e.g. high_risk, clean, dry)")
    })
}

pub(crate) fn parse_capture_angle(raw: &str) -> Result<CaptureAngle, String> {
    CaptureAngle::parse(raw.trim()).ok_or_else(|| {
        format!("failed to parse '{raw}' as a capture angle (front, left, right, closeup)")
    })
}
