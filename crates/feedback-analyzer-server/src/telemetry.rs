//! Logging and metrics initialization

use anyhow::Result;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("feedback_analyzer=debug,tower_http=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("feedback_analyzer=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Install the Prometheus recorder and return the handle for rendering
pub fn init_metrics() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics: {}", e))?;

    metrics::describe_counter!(
        "feedback_analyzer_requests_total",
        "Total number of scoring requests by scorer"
    );
    metrics::describe_counter!(
        "feedback_analyzer_upstream_failures_total",
        "Inference API calls that degraded to the fallback result, by reason"
    );
    metrics::describe_histogram!(
        "feedback_analyzer_scoring_latency_us",
        metrics::Unit::Microseconds,
        "Scoring latency in microseconds by scorer"
    );

    info!("Metrics exporter initialized");
    Ok(handle)
}
