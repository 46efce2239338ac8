//! Hosted sentiment classifier adapter
//!
//! Sends feedback to a binary POSITIVE/NEGATIVE classifier behind an
//! HTTP inference API and turns its confidences into percentages. Any
//! failure along the way degrades to [`SentimentResult::fallback`].

use crate::config::RemoteConfig;
use crate::scorer::{ScorerVariant, SentimentScorer};
use feedback_analyzer_core::{Error, LabelScore, Result, SentimentResult};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

const POSITIVE_LABEL: &str = "POSITIVE";
const NEGATIVE_LABEL: &str = "NEGATIVE";

/// Adapter for a remote binary sentiment classifier
pub struct RemoteClassifier {
    name: String,
    endpoint: reqwest::Url,
    token: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Shapes the inference API is known to answer with
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    /// One list of label scores per input: `[[{label, score}, ...]]`
    Nested(Vec<Vec<LabelScore>>),
    /// Model loading, rate limiting, bad token and the like
    Failure { error: String },
}

impl RemoteClassifier {
    /// Create a new remote classifier.
    ///
    /// `token` is sent as a bearer credential when present.
    pub fn new(config: &RemoteConfig, token: Option<String>) -> Result<Self> {
        Self::with_name("remote", config, token)
    }

    pub fn with_name(
        name: impl Into<String>,
        config: &RemoteConfig,
        token: Option<String>,
    ) -> Result<Self> {
        let raw = config.endpoint();
        let endpoint = reqwest::Url::parse(&raw)
            .map_err(|e| Error::config(format!("Invalid inference URL '{raw}': {e}")))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Inference URL scheme '{}' is not supported",
                endpoint.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::scorer(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            name: name.into(),
            endpoint,
            token: token.filter(|t| !t.trim().is_empty()),
            client,
        })
    }

    /// Inference URL this adapter posts to
    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    /// Whether a bearer credential will be sent
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Call the inference API and return the label scores for `text`
    pub async fn classify(&self, text: &str) -> Result<Vec<LabelScore>> {
        let mut request = self
            .client
            .post(self.endpoint.clone())
            .json(&InferenceRequest { inputs: text });

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        debug!("Raw response from inference API ({}): {}", status, body);

        if !status.is_success() {
            return Err(Error::upstream(format!(
                "inference API returned {status}"
            )));
        }

        parse_response(&body)
    }
}

#[async_trait::async_trait]
impl SentimentScorer for RemoteClassifier {
    async fn analyze(&self, text: &str) -> SentimentResult {
        if text.is_empty() {
            debug!("Empty feedback, skipping inference call");
            return SentimentResult::fallback();
        }

        let start = Instant::now();
        let result = match self.classify(text).await {
            Ok(labels) => normalize(&labels),
            Err(e) => {
                warn!("Error calling inference API: {}", e);
                metrics::counter!(
                    "feedback_analyzer_upstream_failures_total",
                    "reason" => e.kind()
                )
                .increment(1);
                SentimentResult::fallback()
            }
        };
        debug!(
            "Remote scoring finished in {}us",
            start.elapsed().as_micros()
        );

        result
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn variant(&self) -> ScorerVariant {
        ScorerVariant::Remote
    }
}

/// Convert upstream label scores into percentages.
///
/// Missing labels count as 0. The two percentages are independent model
/// confidences and are not rescaled to sum to 100.
pub fn normalize(labels: &[LabelScore]) -> SentimentResult {
    let confidence = |wanted: &str| {
        labels
            .iter()
            .find(|item| item.label == wanted)
            .map(|item| item.score)
            .filter(|score| score.is_finite())
            .unwrap_or(0.0)
    };

    SentimentResult::binary(
        confidence(POSITIVE_LABEL) * 100.0,
        confidence(NEGATIVE_LABEL) * 100.0,
    )
}

/// Extract the first list of label scores from an inference response body
fn parse_response(body: &str) -> Result<Vec<LabelScore>> {
    match serde_json::from_str::<InferenceResponse>(body)? {
        InferenceResponse::Nested(mut lists) => {
            if lists.is_empty() {
                Err(Error::upstream("inference API returned no results"))
            } else {
                Ok(lists.swap_remove(0))
            }
        }
        InferenceResponse::Failure { error } => Err(Error::upstream(error)),
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout
    } else {
        Error::upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_analyzer_core::Overall;

    fn labels(pairs: &[(&str, f64)]) -> Vec<LabelScore> {
        pairs
            .iter()
            .map(|(label, score)| LabelScore::new(*label, *score))
            .collect()
    }

    #[test]
    fn test_normalize_positive() {
        let result = normalize(&labels(&[("POSITIVE", 0.9), ("NEGATIVE", 0.1)]));
        assert!((result.positive - 90.0).abs() < 1e-9);
        assert!((result.negative - 10.0).abs() < 1e-9);
        assert_eq!(result.overall, Overall::Positive);
        assert_eq!(result.neutral, None);
    }

    #[test]
    fn test_normalize_missing_negative() {
        let result = normalize(&labels(&[("POSITIVE", 0.4)]));
        assert_eq!(result.negative, 0.0);
        assert_eq!(result.overall, Overall::Positive);
    }

    #[test]
    fn test_normalize_tie_is_negative() {
        let result = normalize(&labels(&[("NEGATIVE", 0.5), ("POSITIVE", 0.5)]));
        assert_eq!(result.overall, Overall::Negative);
    }

    #[test]
    fn test_normalize_does_not_renormalize() {
        let result = normalize(&labels(&[("POSITIVE", 0.3), ("NEGATIVE", 0.2)]));
        assert!((result.positive - 30.0).abs() < 1e-9);
        assert!((result.negative - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_empty_is_fallback() {
        assert_eq!(normalize(&[]), SentimentResult::fallback());
    }

    #[test]
    fn test_parse_nested() {
        let nested = r#"[[{"label":"NEGATIVE","score":0.2},{"label":"POSITIVE","score":0.8}]]"#;
        assert_eq!(parse_response(nested).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_rejects_flat_list() {
        let flat = r#"[{"label":"POSITIVE","score":0.9},{"label":"NEGATIVE","score":0.1}]"#;
        assert!(parse_response(flat).is_err());
    }

    #[test]
    fn test_parse_failures() {
        assert!(parse_response("[]").is_err());
        assert!(parse_response(r#"{"error":"Model is currently loading"}"#).is_err());
        assert!(parse_response("<html>bad gateway</html>").is_err());
    }

    #[test]
    fn test_rejects_non_http_endpoint() {
        let config = RemoteConfig {
            api_base: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(RemoteClassifier::new(&config, None).is_err());
    }

    #[test]
    fn test_blank_token_is_ignored() {
        let classifier =
            RemoteClassifier::new(&RemoteConfig::default(), Some("  ".to_string())).unwrap();
        assert!(!classifier.has_token());
    }

    #[tokio::test]
    async fn test_empty_text_skips_upstream() {
        let config = RemoteConfig {
            api_base: "http://127.0.0.1:1".to_string(),
            ..Default::default()
        };
        let classifier = RemoteClassifier::new(&config, None).unwrap();
        assert_eq!(classifier.analyze("").await, SentimentResult::fallback());
    }
}
