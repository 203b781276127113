use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use super::advisor::WeightAdvisor;
use super::catalog::{PlatformEntry, PlatformId, CATALOG};
use super::domain::{Department, FeedbackRecord};
use super::intake::validate_departments;
use super::repository::FeedbackRepository;
use super::roi::compute_all_roi;
use super::service::{AssessmentRequest, AssessmentService, AssessmentServiceError};
use crate::error::AppError;

/// Router builder exposing assessment, ROI, feedback and weight endpoints.
pub fn assessment_router<R, A>(service: Arc<AssessmentService<R, A>>) -> Router
where
    R: FeedbackRepository + 'static,
    A: WeightAdvisor + 'static,
{
    Router::new()
        .route("/api/v1/platforms", get(platforms_handler))
        .route("/api/v1/platforms/:id", get(platform_handler))
        .route("/api/v1/assessments", post(assess_handler::<R, A>))
        .route("/api/v1/roi", post(roi_handler::<R, A>))
        .route("/api/v1/feedback", post(feedback_handler::<R, A>))
        .route("/api/v1/weights", get(weights_handler::<R, A>))
        .route("/api/v1/weights/refresh", post(refresh_handler::<R, A>))
        .with_state(service)
}

pub(crate) async fn platforms_handler() -> Response {
    (StatusCode::OK, Json(CATALOG.to_vec())).into_response()
}

pub(crate) async fn platform_handler(
    Path(id): Path<String>,
) -> Result<Json<PlatformEntry>, AppError> {
    let platform: PlatformId = id.parse()?;
    Ok(Json(platform.entry().clone()))
}

pub(crate) async fn assess_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    Json(request): Json<AssessmentRequest>,
) -> Response
where
    R: FeedbackRepository + 'static,
    A: WeightAdvisor + 'static,
{
    match service.assess(request).await {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn roi_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    Json(departments): Json<Vec<Department>>,
) -> Response
where
    R: FeedbackRepository + 'static,
    A: WeightAdvisor + 'static,
{
    if let Err(violation) = validate_departments(&departments) {
        return error_response(AssessmentServiceError::Validation(violation));
    }

    let results = compute_all_roi(service.engine().tables(), &departments);
    (StatusCode::OK, Json(results)).into_response()
}

pub(crate) async fn feedback_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    Json(record): Json<FeedbackRecord>,
) -> Response
where
    R: FeedbackRepository + 'static,
    A: WeightAdvisor + 'static,
{
    match service.record_feedback(record) {
        Ok(()) => (StatusCode::ACCEPTED, Json(json!({ "status": "recorded" }))).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn weights_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
) -> Response
where
    R: FeedbackRepository + 'static,
    A: WeightAdvisor + 'static,
{
    match service.active_weights() {
        Ok(weights) => (StatusCode::OK, Json(weights)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn refresh_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
) -> Response
where
    R: FeedbackRepository + 'static,
    A: WeightAdvisor + 'static,
{
    match service.refresh_weights().await {
        Ok(adjustment) => (StatusCode::OK, Json(adjustment)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    let status = match &err {
        AssessmentServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
