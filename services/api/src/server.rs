use crate::cli::ServeArgs;
use crate::infra::{ApiAnalysisProvider, AppState, InMemoryCandidateRepository};
use crate::routes::with_candidate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::fs::File;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talent_ai::config::AppConfig;
use talent_ai::error::AppError;
use talent_ai::telemetry;
use talent_ai::workflows::hiring::{CandidateService, ScoringConfig};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryCandidateRepository::default());
    let analyst = Arc::new(
        ApiAnalysisProvider::from_config(&config.analysis)
            .map_err(|err| AppError::Server(axum::Error::new(err)))?,
    );
    let candidate_service = Arc::new(CandidateService::new(
        repository,
        analyst,
        ScoringConfig::default(),
        config.analysis.timeout,
    ));

    if let Some(path) = args.submissions.take() {
        let file = File::open(&path)?;
        let imported = candidate_service.import(file)?;
        info!(count = imported, path = %path.display(), "seeded candidate pool from file");
    }

    let app = with_candidate_routes(candidate_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "candidate scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
