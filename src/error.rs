//! Error types for iris.

use thiserror::Error;

/// Primary error type for all iris operations.
#[derive(Error, Debug)]
pub enum IrisError {
    #[error("image file too large: {size} bytes (limit {limit})")]
    OversizedFile { size: u64, limit: u64 },

    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("no image URL provided")]
    MissingUrl,

    #[error("not an absolute http/https URL: {0}")]
    InvalidUrl(String),

    #[error("could not load image from {url}: {reason}")]
    ProbeFailed { url: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("server reported failure{}", match status { Some(s) => format!(" (status {s})"), None => String::new() })]
    Server {
        status: Option<u16>,
        message: Option<String>,
    },
}

/// Broad classification driving how a failure is surfaced and recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Detected locally before any network call; state is left unchanged
    /// and corrected user input recovers.
    InputRejection,
    /// No response was received from the endpoint.
    Transport,
    /// The endpoint responded but the attempt failed (structured failure,
    /// error status, or a body that violates the expected shape).
    Server,
}

impl IrisError {
    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::OversizedFile { .. }
            | Self::UnsupportedMediaType(_)
            | Self::MissingUrl
            | Self::InvalidUrl(_)
            | Self::ProbeFailed { .. }
            | Self::Io(_) => ErrorCategory::InputRejection,
            Self::Network(_) => ErrorCategory::Transport,
            Self::MalformedResponse(_) | Self::Server { .. } => ErrorCategory::Server,
        }
    }

    /// The message shown to the user for this failure. Server-supplied
    /// messages win; everything else maps to a fixed string.
    pub fn user_message(&self) -> String {
        match self {
            Self::OversizedFile { .. } => {
                "Image file is too large. Please use an image smaller than 10MB.".into()
            }
            Self::UnsupportedMediaType(_) => "Please provide a valid image file.".into(),
            Self::Io(_) => "Error reading the image file. Please try again.".into(),
            Self::MissingUrl => "Please enter an image URL.".into(),
            Self::InvalidUrl(_) => "Please enter a valid image URL (http/https).".into(),
            Self::ProbeFailed { .. } => {
                "Unable to load image from the provided URL. Please check the URL and try again."
                    .into()
            }
            Self::Network(_) => {
                "Failed to analyze image. Please check your connection and try again.".into()
            }
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            Self::MalformedResponse(_) | Self::Server { message: None, .. } => {
                "An error occurred while analyzing the image.".into()
            }
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, IrisError>;
