//! Iris — client controller for a visual question-answering UI.
//!
//! The user supplies an image (upload, URL, or a preset sample) plus a
//! natural-language question; the controller submits both to the backend
//! `/analyze` endpoint and prepares the structured answer for display.
//! The interesting parts are the mutually-exclusive image-source state
//! machine, the single in-flight request lifecycle, and the constrained
//! markdown rendering of the answer text.
//!
//! # Quick Start
//!
//! ```no_run
//! use iris::prelude::*;
//!
//! # async fn example() {
//! let session = AnalysisSession::new(ClientConfig::from_env());
//! session.load_from_url("https://example.com/cat.png").await;
//! session.set_question("What breed is this?");
//! session.submit().await;
//! if let Some(answer) = session.rendered() {
//!     println!("{}", answer.markup);
//! }
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod notice;
pub mod prelude;
pub mod probe;
pub mod render;
pub mod session;
pub mod source;
pub mod validate;
