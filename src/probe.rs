//! Probe load: out-of-band check that a candidate URL resolves to a
//! decodable image before it is accepted as the active source. A
//! syntactically valid URL is not enough; failing here keeps an
//! unfetchable URL from ever reaching the backend.

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{IrisError, Result};

/// Decides whether a remote URL is accepted as an image source.
#[async_trait]
pub trait ImageProbe: Send + Sync {
    /// Succeeds only if the URL resolves to bytes recognizable as an image.
    async fn probe(&self, url: &Url) -> Result<()>;
}

/// Fetches the candidate and sniffs the bytes with `image::guess_format`.
pub struct HttpImageProbe {
    http: reqwest::Client,
}

impl HttpImageProbe {
    pub fn new(config: &ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { http }
    }
}

#[async_trait]
impl ImageProbe for HttpImageProbe {
    async fn probe(&self, url: &Url) -> Result<()> {
        let fail = |reason: String| IrisError::ProbeFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| fail(err.to_string()))?;
        if !response.status().is_success() {
            return Err(fail(format!("status {}", response.status())));
        }
        let bytes = response.bytes().await.map_err(|err| fail(err.to_string()))?;
        match image::guess_format(&bytes) {
            Ok(format) => {
                debug!(url = %url, ?format, "probe load succeeded");
                Ok(())
            }
            Err(err) => Err(fail(err.to_string())),
        }
    }
}
