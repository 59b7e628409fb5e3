//! Shared data model for the Redline fact-checking workflow.
//!
//! This is a **Layer 1 (Foundation)** crate:
//! - Depends on: external crates only (serde, uuid)
//! - Used by: redline-suggest, redline-patch, redline (app)

mod suggestion;

pub use suggestion::{Severity, Suggestion, SuggestionType};
