use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use evmatch::config::AppConfig;
use evmatch::error::AppError;
use evmatch::telemetry;
use evmatch::CatalogProvider;

use crate::cli::ServeArgs;
use crate::infra::{AppState, EngineState};
use crate::routes::with_engine_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let mut catalog = CatalogProvider::builtin();
    if let Some(path) = config.catalog.sync_path.as_deref() {
        let stats = catalog.merge_sync_path(path)?;
        info!(
            path = %path.display(),
            added = stats.added,
            skipped = stats.skipped,
            "applied catalog sync file"
        );
    }
    let engine = Arc::new(EngineState::new(catalog));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_engine_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "vehicle recommendation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
