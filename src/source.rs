//! The mutually-exclusive image input source.
//!
//! A session holds at most one image at a time: either the whole contents of
//! a local file encoded as a data URI, or a probed remote URL. Setting one
//! representation always clears the other.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use url::Url;

use crate::error::Result;

/// Upload ceiling for local files: 10 MiB. The file is read fully into
/// memory, so this is the single point of backpressure against oversized
/// uploads.
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// The currently selected image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageSource {
    #[default]
    None,
    /// A local file read fully into memory and carried as a
    /// `data:<media-type>;base64,...` URI.
    InlinePayload { data: String },
    /// A fetchable http(s) URL that passed the probe load.
    RemoteUrl { url: Url },
}

impl ImageSource {
    pub fn is_none(&self) -> bool {
        matches!(self, ImageSource::None)
    }

    /// The displayable source string for the preview pane.
    pub fn preview(&self) -> Option<&str> {
        match self {
            ImageSource::None => None,
            ImageSource::InlinePayload { data } => Some(data),
            ImageSource::RemoteUrl { url } => Some(url.as_str()),
        }
    }

    /// Split into the `(image_url, image_data)` wire fields. At most one of
    /// the two is `Some`, mirroring the exclusivity invariant.
    pub fn request_fields(&self) -> (Option<String>, Option<String>) {
        match self {
            ImageSource::None => (None, None),
            ImageSource::RemoteUrl { url } => (Some(url.to_string()), None),
            ImageSource::InlinePayload { data } => (None, Some(data.clone())),
        }
    }
}

/// A local file candidate as delivered by a picker or drop event: the path
/// plus the declared size and media type the acceptance checks run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: PathBuf,
    pub media_type: String,
    pub size: u64,
}

impl PickedFile {
    /// Stat a path and derive the declared media type from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            media_type: media_type_for_path(path).to_string(),
            size: metadata.len(),
        })
    }

    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

/// Declared media type for a path, by extension. Unknown extensions map to
/// `application/octet-stream` and fail the image acceptance check.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Read the whole file into memory and encode it as a data URI.
pub async fn read_as_data_uri(file: &PickedFile) -> Result<String> {
    let bytes = tokio::fs::read(&file.path).await?;
    let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{payload}", file.media_type))
}
