use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::analysis::{AnswerTag, CaptureAngle};

use super::repository::{ReferralPublisher, RepositoryError, SessionId, SessionRepository};
use super::service::{AssessmentService, SessionServiceError};

/// Router builder exposing the session lifecycle over HTTP.
pub fn assessment_router<R, P>(service: Arc<AssessmentService<R, P>>) -> Router
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    Router::new()
        .route("/api/v1/assessments", post(start_handler::<R, P>))
        .route(
            "/api/v1/assessments/:session_id",
            get(status_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:session_id/answers",
            post(answer_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:session_id/captures",
            post(capture_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:session_id/analysis",
            post(analyze_handler::<R, P>),
        )
        .route(
            "/api/v1/assessments/:session_id/reset",
            post(reset_handler::<R, P>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordAnswerRequest {
    pub(crate) question: u8,
    pub(crate) answer: AnswerTag,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordCaptureRequest {
    pub(crate) angle: CaptureAngle,
}

pub(crate) async fn start_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
) -> Response
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    match service.start() {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<RecordAnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    match service.record_answer(&SessionId(session_id), request.question, request.answer) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn capture_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<RecordCaptureRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    match service.record_capture(&SessionId(session_id), request.angle) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analyze_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    match service.analyze(&SessionId(session_id)) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R, P>(
    State(service): State<Arc<AssessmentService<R, P>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    match service.reset(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: SessionServiceError) -> Response {
    let status = match &error {
        SessionServiceError::Questionnaire(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SessionServiceError::Flow(_) | SessionServiceError::StepMismatch { .. } => {
            StatusCode::CONFLICT
        }
        SessionServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        SessionServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        SessionServiceError::Repository(RepositoryError::Unavailable(_))
        | SessionServiceError::Referral(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
