//! Rendering of answer text: a constrained markdown subset (bold, italic,
//! paragraph and line breaks) restructured into presentational markup.
//! Content is never evaluated, only re-marked.

use std::sync::OnceLock;

use regex::Regex;

use crate::client::AnalysisResult;

fn bold_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"))
}

fn italic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*(.*?)\*").expect("valid regex"))
}

/// Restructure answer text into markup, in fixed order: bold spans, italic
/// spans, paragraph breaks at blank lines, line breaks, then a wrapping
/// paragraph. No nesting, no lists, no links, no escaping of literal
/// asterisks.
pub fn render_markup(text: &str) -> String {
    let step = bold_re().replace_all(text, "<strong>$1</strong>");
    let step = italic_re().replace_all(&step, "<em>$1</em>");
    let step = step.replace("\n\n", "</p><p>");
    let step = step.replace('\n', "<br>");
    format!("<p>{step}</p>")
}

/// A success outcome prepared for the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedAnswer {
    pub markup: String,
    /// Label identifying which model produced the answer.
    pub model_label: String,
    /// Shown when the backend fell back to a secondary (text-only) path.
    pub show_fallback_badge: bool,
}

impl RenderedAnswer {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            markup: render_markup(&result.response_text),
            model_label: format!("Model: {}", result.model_used),
            show_fallback_badge: result.fallback_used,
        }
    }
}
