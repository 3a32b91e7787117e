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

use super::analysis::AnalysisProvider;
use super::domain::CandidateId;
use super::repository::{CandidateFilter, CandidateRepository, RepositoryError};
use super::selection::SelectionError;
use super::service::{CandidateService, CandidateServiceError};

/// Router builder exposing the candidate import, ranking, and selection
/// endpoints.
pub fn candidate_router<R, P>(service: Arc<CandidateService<R, P>>) -> Router
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    Router::new()
        .route("/api/v1/candidates/import", post(import_handler::<R, P>))
        .route("/api/v1/candidates/rank", post(rank_handler::<R, P>))
        .route(
            "/api/v1/candidates/:candidate_id",
            get(candidate_handler::<R, P>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/select",
            post(select_handler::<R, P>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/deselect",
            post(deselect_handler::<R, P>),
        )
        .with_state(service)
}

/// Ranking request body. Filters are conjunctive and optional.
#[derive(Debug, Default, Deserialize)]
pub struct RankRequest {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub include_analysis: bool,
}

pub(crate) async fn import_handler<R, P>(
    State(service): State<Arc<CandidateService<R, P>>>,
    body: String,
) -> Response
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    match service.import(body.as_bytes()) {
        Ok(imported) => {
            let payload = json!({ "imported": imported });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(CandidateServiceError::Import(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(CandidateServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "candidate already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn rank_handler<R, P>(
    State(service): State<Arc<CandidateService<R, P>>>,
    axum::Json(request): axum::Json<RankRequest>,
) -> Response
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    let filter = CandidateFilter {
        skills: request.skills,
        location: request.location,
    };

    match service.rank(&filter, request.include_analysis).await {
        Ok(ranked) => (StatusCode::OK, axum::Json(ranked)).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn candidate_handler<R, P>(
    State(service): State<Arc<CandidateService<R, P>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    let id = CandidateId(candidate_id);
    match service.get(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(CandidateServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn select_handler<R, P>(
    State(service): State<Arc<CandidateService<R, P>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    let id = CandidateId(candidate_id);
    match service.select(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(CandidateServiceError::Selection(SelectionError::CapacityExceeded { capacity })) => {
            let payload = json!({
                "error": format!("selection capacity of {capacity} candidates reached"),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(CandidateServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn deselect_handler<R, P>(
    State(service): State<Arc<CandidateService<R, P>>>,
    Path(candidate_id): Path<String>,
) -> Response
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    let id = CandidateId(candidate_id);
    match service.deselect(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(CandidateServiceError::Repository(RepositoryError::NotFound)) => not_found(&id),
        Err(other) => internal_error(other),
    }
}

fn not_found(id: &CandidateId) -> Response {
    let payload = json!({
        "candidate_id": id.0,
        "error": "candidate not found",
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn internal_error(error: CandidateServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
