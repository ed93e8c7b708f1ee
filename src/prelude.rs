//! Convenience re-exports for common use.

pub use crate::client::{AnalysisResult, AnalyzeBackend, AnalyzeRequest, HttpAnalyzeClient};
pub use crate::config::ClientConfig;
pub use crate::error::{ErrorCategory, IrisError, Result};
pub use crate::probe::{HttpImageProbe, ImageProbe};
pub use crate::render::{render_markup, RenderedAnswer};
pub use crate::session::{AnalysisSession, RequestState, Shortcut, QUICK_QUESTIONS, SAMPLE_IMAGES};
pub use crate::source::{ImageSource, PickedFile, MAX_FILE_BYTES};
