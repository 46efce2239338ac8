//! HTTP routes and handlers

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use feedback_analyzer_core::{AnalysisRequest, SentimentResult};
use feedback_analyzer_scorers::SentimentScorer;
use serde_json::json;
use std::time::Instant;
use tracing::{debug, info};

use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "scorer": state.scorer.variant(),
    }))
}

pub async fn metrics(State(state): State<AppState>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

/// Score submitted feedback.
///
/// Always answers 200: unreadable bodies score as empty text and scorer
/// failures come back as a degraded result.
pub async fn analyze_sentiment(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<SentimentResult> {
    let request = AnalysisRequest::from_body(&body);
    if request.text.is_empty() && !body.is_empty() {
        debug!("Request body had no usable text field, scoring as empty");
    }

    let variant = state.scorer.variant().as_str();
    metrics::counter!("feedback_analyzer_requests_total", "scorer" => variant).increment(1);

    let start = Instant::now();
    let result = state.scorer.analyze(&request.text).await;
    let latency = start.elapsed();

    metrics::histogram!("feedback_analyzer_scoring_latency_us", "scorer" => variant)
        .record(latency.as_micros() as f64);

    info!(
        "Scored {} chars with {} in {}us: {}",
        request.text.chars().count(),
        state.scorer.name(),
        latency.as_micros(),
        result.overall
    );

    Json(result)
}
