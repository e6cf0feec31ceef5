use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use transparency_ai::product::{ProductDisclosure, ProductProfile, Question};
use transparency_ai::questions::{CompletionProvider, QuestionGenerator};
use transparency_ai::scoring::{analyze, TransparencyAnalysis, TransparencyScorer};

const SERVICE_NAME: &str = "Product Transparency AI Service";

/// Request handlers' shared dependencies, wired once at startup.
pub(crate) struct ApiContext<P> {
    pub(crate) questions: Arc<QuestionGenerator<P>>,
    pub(crate) scorer: TransparencyScorer,
}

impl<P> Clone for ApiContext<P> {
    fn clone(&self) -> Self {
        Self {
            questions: Arc::clone(&self.questions),
            scorer: self.scorer,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionRequest {
    pub(crate) product_data: ProductProfile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) product_data: ProductDisclosure,
}

#[derive(Debug, Serialize)]
pub(crate) struct TransparencyResponse {
    pub(crate) score: u8,
    pub(crate) recommendations: Vec<String>,
    pub(crate) analysis: TransparencyAnalysis,
}

pub(crate) fn with_api_routes<P>(context: ApiContext<P>) -> Router
where
    P: CompletionProvider + 'static,
{
    Router::new()
        .route("/", get(service_banner_endpoint))
        .route("/health", get(health_endpoint))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/generate-questions", post(generate_questions_endpoint))
        .route("/transparency-score", post(transparency_score_endpoint))
        .with_state(context)
}

pub(crate) async fn service_banner_endpoint<P>(
    State(context): State<ApiContext<P>>,
) -> Json<serde_json::Value>
where
    P: CompletionProvider,
{
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "timestamp": Local::now().to_rfc3339(),
        "gemini_available": context.questions.provider().is_available().await,
    }))
}

pub(crate) async fn health_endpoint<P>(
    State(context): State<ApiContext<P>>,
) -> Json<serde_json::Value>
where
    P: CompletionProvider,
{
    let provider_status = if context.questions.provider().is_available().await {
        "available"
    } else {
        "unavailable"
    };

    Json(json!({
        "status": "healthy",
        "gemini_status": provider_status,
        "timestamp": Local::now().to_rfc3339(),
    }))
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

pub(crate) async fn generate_questions_endpoint<P>(
    State(context): State<ApiContext<P>>,
    Json(payload): Json<QuestionRequest>,
) -> Json<Vec<Question>>
where
    P: CompletionProvider,
{
    let questions = context.questions.generate(&payload.product_data).await;
    Json(questions)
}

pub(crate) async fn transparency_score_endpoint<P>(
    State(context): State<ApiContext<P>>,
    Json(payload): Json<ScoreRequest>,
) -> Json<TransparencyResponse>
where
    P: CompletionProvider,
{
    let ScoreRequest { product_data } = payload;

    let score = context.scorer.score(&product_data);
    let recommendations = context.scorer.recommend(&product_data, score);

    Json(TransparencyResponse {
        score,
        recommendations,
        analysis: analyze(score),
    })
}
