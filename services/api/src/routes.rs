use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use pureskin::analysis::{
    radar::{self, RadarChart},
    AnalysisEngine, AnswerSet, AnswerTag, CaptureAngle, CaptureSet, MetricDefinition,
    Recommendation, RiskLevel, ScoreVector, LESION_CHANGE_QUESTION, SKIN_TYPE_QUESTION,
    SYMPTOM_QUESTION,
};
use pureskin::assessment::{
    assessment_router, AssessmentService, ReferralPublisher, SessionRepository,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AnalysisReportRequest {
    #[serde(default)]
    pub(crate) lesion_change: Option<AnswerTag>,
    #[serde(default)]
    pub(crate) symptom: Option<AnswerTag>,
    #[serde(default)]
    pub(crate) skin_type: Option<AnswerTag>,
    #[serde(default)]
    pub(crate) captures: Vec<CaptureAngle>,
    #[serde(default)]
    pub(crate) radius: Option<f64>,
    #[serde(default)]
    pub(crate) include_catalog: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct AnalysisReportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) scores: ScoreVector,
    pub(crate) index: u8,
    pub(crate) risk: RiskLevel,
    pub(crate) confidence: u8,
    pub(crate) recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) radar: Option<RadarChart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) catalog: Option<&'static [MetricDefinition]>,
}

pub(crate) fn with_assessment_routes<R, P>(
    service: Arc<AssessmentService<R, P>>,
) -> axum::Router
where
    R: SessionRepository + 'static,
    P: ReferralPublisher + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/analysis/report",
            axum::routing::post(analysis_report_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Stateless one-shot analysis: no session is created and nothing is stored.
pub(crate) async fn analysis_report_endpoint(
    Json(payload): Json<AnalysisReportRequest>,
) -> Json<AnalysisReportResponse> {
    let AnalysisReportRequest {
        lesion_change,
        symptom,
        skin_type,
        captures,
        radius,
        include_catalog,
    } = payload;

    let mut answers = AnswerSet::new();
    if let Some(tag) = lesion_change {
        answers.record(LESION_CHANGE_QUESTION, tag);
    }
    if let Some(tag) = symptom {
        answers.record(SYMPTOM_QUESTION, tag);
    }
    if let Some(tag) = skin_type {
        answers.record(SKIN_TYPE_QUESTION, tag);
    }

    let mut capture_set = CaptureSet::new();
    for angle in captures {
        capture_set.record(angle);
    }

    let engine = AnalysisEngine::new();
    let result = engine.analyze(&answers, &capture_set);
    let radar = radius.map(|radius| radar::chart(&result.scores, radius));
    let catalog = include_catalog.then(|| engine.catalog().entries());

    Json(AnalysisReportResponse {
        generated_at: Utc::now(),
        scores: result.scores,
        index: result.index,
        risk: result.risk,
        confidence: result.confidence,
        recommendations: result.recommendations,
        radar,
        catalog,
    })
}
