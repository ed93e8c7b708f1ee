//! The image-input state machine and analysis request lifecycle.
//!
//! `AnalysisSession` owns the mutually-exclusive image source, the question
//! text, and the single in-flight request. Every mutation recomputes submit
//! eligibility; failures are routed to the error surface rather than
//! returned, mirroring how the page treats them.

use std::sync::{Arc, Mutex};

use tracing::debug;
use url::Url;

use crate::client::{AnalysisResult, AnalyzeBackend, AnalyzeRequest, HttpAnalyzeClient};
use crate::config::ClientConfig;
use crate::error::{IrisError, Result};
use crate::notice::ErrorSurface;
use crate::probe::{HttpImageProbe, ImageProbe};
use crate::render::RenderedAnswer;
use crate::source::{self, ImageSource, PickedFile, MAX_FILE_BYTES};
use crate::validate;

/// Lifecycle of the analysis request. At most one request is in flight;
/// `InFlight` rejects re-entrant submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// Preset questions offered as one-click tiles; applied verbatim.
pub const QUICK_QUESTIONS: &[&str] = &[
    "What do you see in this image?",
    "Describe this image in detail.",
    "What colors are dominant in this image?",
    "Is there any text in this image?",
    "What objects can you identify?",
    "What is the overall mood of this image?",
];

/// Preset sample images; loading one is a URL load of its address.
pub const SAMPLE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=800",
    "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=800",
    "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=800",
];

/// Keyboard accelerators the session responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Modifier+Enter: submit, if submission is currently enabled.
    SubmitAccelerator,
    /// Escape: clear the current image, if one is set.
    ClearImage,
}

#[derive(Debug, Default)]
struct SessionState {
    source: ImageSource,
    question: String,
    /// Mirrors the URL input field; cleared whenever the inline payload
    /// takes the slot, so a stale URL is never shown next to a file.
    url_input: String,
    request: RequestState,
    result: Option<AnalysisResult>,
    rendered: Option<RenderedAnswer>,
    can_submit: bool,
}

impl SessionState {
    fn refresh_eligibility(&mut self) {
        self.can_submit =
            self.request != RequestState::InFlight && validate::can_submit(&self.source, &self.question);
    }
}

/// The page-session controller. Cheap to clone; clones share state, so a
/// clone can clear the image while another clone awaits a submission.
#[derive(Clone)]
pub struct AnalysisSession {
    backend: Arc<dyn AnalyzeBackend>,
    probe: Arc<dyn ImageProbe>,
    state: Arc<Mutex<SessionState>>,
    notice: ErrorSurface,
}

impl AnalysisSession {
    /// Session wired to the real HTTP backend and probe.
    pub fn new(config: ClientConfig) -> Self {
        let probe = HttpImageProbe::new(&config);
        let backend = HttpAnalyzeClient::new(config);
        Self::with_collaborators(Arc::new(backend), Arc::new(probe))
    }

    /// Session with explicit collaborators (tests, embedders).
    pub fn with_collaborators(backend: Arc<dyn AnalyzeBackend>, probe: Arc<dyn ImageProbe>) -> Self {
        Self {
            backend,
            probe,
            state: Arc::new(Mutex::new(SessionState::default())),
            notice: ErrorSurface::new(),
        }
    }

    // --- question ---------------------------------------------------------

    pub fn set_question(&self, text: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.question = text.into();
        state.refresh_eligibility();
    }

    /// Copy a preset question into the question field verbatim.
    pub fn apply_quick_question(&self, index: usize) {
        if let Some(question) = QUICK_QUESTIONS.get(index) {
            self.set_question(*question);
        }
    }

    // --- image source -----------------------------------------------------

    /// Accept a local file as the image source. Oversized or non-image
    /// files are rejected up front; a failed read leaves prior state
    /// unchanged. On success the whole file is carried inline and any
    /// remote URL is dropped.
    pub async fn load_from_file(&self, file: &PickedFile) {
        match self.try_load_from_file(file).await {
            Ok(()) => self.notice.hide(),
            Err(err) => self.reject(err),
        }
        self.state.lock().unwrap().refresh_eligibility();
    }

    async fn try_load_from_file(&self, file: &PickedFile) -> Result<()> {
        if file.size > MAX_FILE_BYTES {
            return Err(IrisError::OversizedFile {
                size: file.size,
                limit: MAX_FILE_BYTES,
            });
        }
        if !file.is_image() {
            return Err(IrisError::UnsupportedMediaType(file.media_type.clone()));
        }
        let data = source::read_as_data_uri(file).await?;
        let mut state = self.state.lock().unwrap();
        state.source = ImageSource::InlinePayload { data };
        state.url_input.clear();
        Ok(())
    }

    /// Accept a remote URL as the image source. The URL must be absolute
    /// http(s) and must pass the probe load before it is committed; any
    /// failure leaves prior state unchanged.
    pub async fn load_from_url(&self, raw: &str) {
        self.state.lock().unwrap().url_input = raw.trim().to_string();
        match self.try_load_from_url(raw).await {
            Ok(()) => self.notice.hide(),
            Err(err) => self.reject(err),
        }
        self.state.lock().unwrap().refresh_eligibility();
    }

    async fn try_load_from_url(&self, raw: &str) -> Result<()> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IrisError::MissingUrl);
        }
        if !validate::is_acceptable_image_url(trimmed) {
            return Err(IrisError::InvalidUrl(trimmed.to_string()));
        }
        let url = Url::parse(trimmed).map_err(|_| IrisError::InvalidUrl(trimmed.to_string()))?;
        self.probe.probe(&url).await?;
        let mut state = self.state.lock().unwrap();
        state.source = ImageSource::RemoteUrl { url };
        Ok(())
    }

    /// Load a preset sample image.
    pub async fn load_sample(&self, index: usize) {
        if let Some(url) = SAMPLE_IMAGES.get(index).copied() {
            self.load_from_url(url).await;
        }
    }

    /// Drop the current image and the pending URL input.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.source = ImageSource::None;
        state.url_input.clear();
        state.refresh_eligibility();
    }

    // --- submission -------------------------------------------------------

    /// Run one analysis attempt. No-op while a request is in flight or
    /// while inputs are invalid. The request body is a snapshot: input
    /// changes made during the await only affect a future submission.
    pub async fn submit(&self) {
        let request = {
            let mut state = self.state.lock().unwrap();
            if state.request == RequestState::InFlight || !state.can_submit {
                return;
            }
            state.request = RequestState::InFlight;
            state.result = None;
            state.rendered = None;
            state.refresh_eligibility();
            let (image_url, image_data) = state.source.request_fields();
            AnalyzeRequest {
                question: state.question.trim().to_string(),
                image_url,
                image_data,
            }
        };
        self.notice.hide();

        debug!(question = %request.question, "submitting analysis request");
        let outcome = self.backend.analyze(&request).await;

        let mut state = self.state.lock().unwrap();
        match outcome {
            Ok(result) => {
                state.rendered = Some(RenderedAnswer::from_result(&result));
                state.result = Some(result);
                state.request = RequestState::Succeeded;
            }
            Err(err) => {
                debug!(error = %err, "analysis attempt failed");
                state.request = RequestState::Failed;
                self.notice.show(err.user_message());
            }
        }
        // Recompute from current inputs, which may have changed while the
        // request was in flight.
        state.refresh_eligibility();
    }

    /// Dispatch a keyboard accelerator.
    pub async fn handle_shortcut(&self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::SubmitAccelerator => self.submit().await,
            Shortcut::ClearImage => {
                let has_image = !self.state.lock().unwrap().source.is_none();
                if has_image {
                    self.clear();
                }
            }
        }
    }

    // --- observers --------------------------------------------------------

    pub fn can_submit(&self) -> bool {
        self.state.lock().unwrap().can_submit
    }

    pub fn request_state(&self) -> RequestState {
        self.state.lock().unwrap().request
    }

    pub fn image_source(&self) -> ImageSource {
        self.state.lock().unwrap().source.clone()
    }

    pub fn question(&self) -> String {
        self.state.lock().unwrap().question.clone()
    }

    pub fn url_input(&self) -> String {
        self.state.lock().unwrap().url_input.clone()
    }

    /// Displayable source for the preview pane, if an image is set.
    pub fn preview(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .source
            .preview()
            .map(str::to_string)
    }

    pub fn result(&self) -> Option<AnalysisResult> {
        self.state.lock().unwrap().result.clone()
    }

    pub fn rendered(&self) -> Option<RenderedAnswer> {
        self.state.lock().unwrap().rendered.clone()
    }

    pub fn error_surface(&self) -> &ErrorSurface {
        &self.notice
    }

    fn reject(&self, err: IrisError) {
        debug!(error = %err, category = ?err.category(), "input rejected");
        self.notice.show(err.user_message());
    }
}
