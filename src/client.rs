//! The `/analyze` HTTP boundary: wire types, outcome classification, and
//! the reqwest-backed client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{IrisError, Result};

/// Body of `POST /analyze`. Exactly one of the two image fields is non-null;
/// both keys are always present on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub question: String,
    pub image_url: Option<String>,
    pub image_data: Option<String>,
}

/// Outcome of a successful analysis call. Ephemeral; each new success
/// replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub model_used: String,
    pub fallback_used: bool,
    pub response_text: String,
}

/// Raw response body. Every field is optional so that classification, not
/// deserialization, decides what a missing field means.
#[derive(Debug, Deserialize)]
struct AnalyzeResponseBody {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    model_used: Option<String>,
    #[serde(default)]
    fallback_used: Option<bool>,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// The analysis endpoint, abstracted so the session can be driven against
/// an in-memory fake in tests.
#[async_trait]
pub trait AnalyzeBackend: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult>;
}

/// Reqwest-backed client for the analysis backend.
pub struct HttpAnalyzeClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAnalyzeClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            http,
            base_url: config.base_url,
        }
    }

    /// Hit the backend's `GET /health` endpoint.
    pub async fn health(&self) -> Result<bool> {
        let response = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(response.status().is_success())
    }
}

#[async_trait]
impl AnalyzeBackend for HttpAnalyzeClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        let endpoint = format!("{}/analyze", self.base_url);
        debug!(endpoint = %endpoint, "dispatching analyze request");
        let response = self.http.post(&endpoint).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        classify_outcome(status, &body)
    }
}

/// Classify an HTTP outcome into a result or a failure, mirroring the
/// response contract: 2xx plus `success: true` is the only success path.
pub fn classify_outcome(status: u16, body: &str) -> Result<AnalysisResult> {
    let ok_status = (200..300).contains(&status);
    let parsed: AnalyzeResponseBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(status, error = %err, "analyze response body did not parse");
            if !ok_status {
                return Err(IrisError::Server {
                    status: Some(status),
                    message: None,
                });
            }
            return Err(IrisError::MalformedResponse(err.to_string()));
        }
    };

    if !ok_status {
        return Err(IrisError::Server {
            status: Some(status),
            message: parsed.error,
        });
    }

    match parsed.success {
        Some(true) => match (parsed.model_used, parsed.response) {
            (Some(model_used), Some(response_text)) => Ok(AnalysisResult {
                model_used,
                fallback_used: parsed.fallback_used.unwrap_or(false),
                response_text,
            }),
            _ => Err(IrisError::MalformedResponse(
                "success response missing model or text".into(),
            )),
        },
        Some(false) => Err(IrisError::Server {
            status: None,
            message: parsed.error,
        }),
        None => Err(IrisError::MalformedResponse(
            "response missing `success` field".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_is_classified() {
        let result = classify_outcome(
            200,
            r#"{"success":true,"model_used":"m1","fallback_used":false,"response":"hi"}"#,
        )
        .unwrap();
        assert_eq!(result.model_used, "m1");
        assert!(!result.fallback_used);
        assert_eq!(result.response_text, "hi");
    }

    #[test]
    fn structured_failure_keeps_server_message() {
        let err = classify_outcome(200, r#"{"success":false,"error":"bad image"}"#).unwrap_err();
        match err {
            IrisError::Server { status, message } => {
                assert_eq!(status, None);
                assert_eq!(message.as_deref(), Some("bad image"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_status_keeps_server_message() {
        let err = classify_outcome(500, r#"{"error":"upstream down"}"#).unwrap_err();
        match err {
            IrisError::Server { status, message } => {
                assert_eq!(status, Some(500));
                assert_eq!(message.as_deref(), Some("upstream down"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_bodies_are_failures_not_panics() {
        assert!(matches!(
            classify_outcome(200, "not json"),
            Err(IrisError::MalformedResponse(_))
        ));
        assert!(matches!(
            classify_outcome(200, r#"{"response":"hi"}"#),
            Err(IrisError::MalformedResponse(_))
        ));
        // Success flag without the payload fields is still malformed.
        assert!(matches!(
            classify_outcome(200, r#"{"success":true}"#),
            Err(IrisError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_json_error_status_is_a_server_failure() {
        assert!(matches!(
            classify_outcome(502, "<html>bad gateway</html>"),
            Err(IrisError::Server {
                status: Some(502),
                message: None,
            })
        ));
    }
}
