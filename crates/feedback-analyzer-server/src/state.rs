use crate::config::ServerConfig;
use feedback_analyzer_scorers::SharedScorer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,

    /// The deployed scorer
    pub scorer: SharedScorer,

    /// Prometheus handle for `/metrics`; absent when no recorder is
    /// installed
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(
        config: ServerConfig,
        scorer: SharedScorer,
        metrics_handle: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            scorer,
            metrics_handle,
        }
    }
}
