//! Highlighted edit application and removal for Redline.
//!
//! Accepted suggestions are applied to the raw HTML as literal text
//! replacements wrapped in an inert highlight marker; once the user is done
//! reviewing, the markers are stripped to produce the publishable document.
//! Application is a pure function over the input document; a suggestion
//! whose original fragment never occurs is a silent no-op, never an error.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Infrastructure)** crate:
//! - Depends on: redline-core
//! - Used by: redline (app)

mod html;
mod patcher;

pub use html::{escape_html, extract_text_content, preview_text};
pub use patcher::{apply_suggestion, apply_suggestions, count_annotations, strip_annotations};
