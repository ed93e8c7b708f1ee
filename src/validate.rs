//! Pure submit-eligibility predicates.

use url::Url;

use crate::source::ImageSource;

/// True iff `candidate` parses as an absolute URL with an http or https
/// scheme. Parse failure is a negative result, not an error.
pub fn is_acceptable_image_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// True iff an image is set and the question is non-empty after trimming.
/// Drives the submit control's enabled/disabled affordance.
pub fn can_submit(source: &ImageSource, question: &str) -> bool {
    !source.is_none() && !question.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_only() {
        assert!(is_acceptable_image_url("https://x/y.png"));
        assert!(is_acceptable_image_url("http://example.com/cat.jpg"));
        assert!(!is_acceptable_image_url("ftp://x/y.png"));
        assert!(!is_acceptable_image_url("data:image/png;base64,AAAA"));
        assert!(!is_acceptable_image_url("not a url"));
        assert!(!is_acceptable_image_url(""));
        assert!(!is_acceptable_image_url("/relative/path.png"));
    }

    #[test]
    fn submit_requires_image_and_question() {
        let none = ImageSource::None;
        let remote = ImageSource::RemoteUrl {
            url: Url::parse("https://example.com/a.png").unwrap(),
        };
        assert!(!can_submit(&none, "what color?"));
        assert!(!can_submit(&remote, "  "));
        assert!(!can_submit(&remote, ""));
        assert!(can_submit(&remote, "what color?"));
        assert!(can_submit(&remote, "  trimmed ok  "));
    }
}
