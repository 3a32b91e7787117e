use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use talent_ai::workflows::hiring::{
    candidate_router, AnalysisProvider, CandidateRepository, CandidateService,
};

pub(crate) fn with_candidate_routes<R, P>(service: Arc<CandidateService<R, P>>) -> axum::Router
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    candidate_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{ApiAnalysisProvider, InMemoryCandidateRepository};
    use axum::body::Body;
    use axum::http::Request;
    use std::time::Duration;
    use talent_ai::workflows::hiring::ScoringConfig;
    use tower::util::ServiceExt;

    fn demo_service() -> Arc<CandidateService<InMemoryCandidateRepository, ApiAnalysisProvider>> {
        let service = Arc::new(CandidateService::new(
            Arc::new(InMemoryCandidateRepository::default()),
            Arc::new(ApiAnalysisProvider::Disabled),
            ScoringConfig::default(),
            Duration::from_millis(100),
        ));
        service
            .import(crate::demo::SAMPLE_SUBMISSIONS.as_bytes())
            .expect("bundled sample imports");
        service
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn rank_route_serves_the_bundled_sample() {
        let router = with_candidate_routes(demo_service());

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/candidates/rank")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .expect("request builds");

        let response = router.oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("JSON body");
        let rows = body.as_array().expect("ranked array");
        assert!(!rows.is_empty());
        for pair in rows.windows(2) {
            let a = pair[0]["scores"]["total"].as_f64().expect("total");
            let b = pair[1]["scores"]["total"].as_f64().expect("total");
            assert!(a >= b, "rank output must be sorted descending");
        }
    }
}
