use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_verification_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use impact_echo::config::AppConfig;
use impact_echo::error::AppError;
use impact_echo::telemetry;
use impact_echo::verification::{LatencySimulator, ThreadRandomness, VerificationService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if args.no_latency {
        config.verification.simulate_latency = false;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let latency = LatencySimulator::from_config(&config.verification);
    let verification_service = Arc::new(VerificationService::new(
        Arc::new(ThreadRandomness),
        latency,
    ));

    let app = with_verification_routes(verification_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        simulate_latency = latency.is_enabled(),
        "donation verification service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
