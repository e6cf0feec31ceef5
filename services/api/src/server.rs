use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::{with_api_routes, ApiContext};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use transparency_ai::config::AppConfig;
use transparency_ai::error::AppError;
use transparency_ai::questions::{GeminiClient, QuestionGenerator};
use transparency_ai::scoring::TransparencyScorer;
use transparency_ai::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    if config.gemini.api_key.is_none() {
        info!("GEMINI_API_KEY not set; follow-up questions use template fallback only");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let provider = Arc::new(GeminiClient::new(&config.gemini));
    let context = ApiContext {
        questions: Arc::new(QuestionGenerator::new(provider)),
        scorer: TransparencyScorer::new(),
    };

    let app = with_api_routes(context)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "product transparency service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
