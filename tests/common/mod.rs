#![allow(dead_code)]
//! Shared test helpers: mock analyze backend and image probe.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use iris::client::{AnalysisResult, AnalyzeBackend, AnalyzeRequest};
use iris::error::{IrisError, Result};
use iris::probe::ImageProbe;
use url::Url;

/// A mock backend that captures requests and returns queued outcomes.
pub struct MockBackend {
    outcomes: Mutex<Vec<Result<AnalysisResult>>>,
    requests: Mutex<Vec<AnalyzeRequest>>,
    delay: Option<Duration>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Make every call sleep first, so tests can interleave other session
    /// operations with an in-flight request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn queue_success(&self, model: &str, fallback: bool, text: &str) {
        self.outcomes.lock().unwrap().push(Ok(AnalysisResult {
            model_used: model.to_string(),
            fallback_used: fallback,
            response_text: text.to_string(),
        }));
    }

    pub fn queue_failure(&self, message: &str) {
        self.outcomes.lock().unwrap().push(Err(IrisError::Server {
            status: None,
            message: Some(message.to_string()),
        }));
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<AnalyzeRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AnalyzeBackend for MockBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisResult> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            Ok(AnalysisResult {
                model_used: "mock-model".to_string(),
                fallback_used: false,
                response_text: "ok".to_string(),
            })
        } else {
            outcomes.remove(0)
        }
    }
}

/// A probe that accepts or rejects every URL without touching the network.
pub struct MockProbe {
    accept: bool,
}

impl MockProbe {
    pub fn accepting() -> Self {
        Self { accept: true }
    }

    pub fn rejecting() -> Self {
        Self { accept: false }
    }
}

#[async_trait]
impl ImageProbe for MockProbe {
    async fn probe(&self, url: &Url) -> Result<()> {
        if self.accept {
            Ok(())
        } else {
            Err(IrisError::ProbeFailed {
                url: url.to_string(),
                reason: "mock rejection".to_string(),
            })
        }
    }
}

/// Minimal PNG file contents: the 8-byte signature is enough for format
/// sniffing.
pub const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
