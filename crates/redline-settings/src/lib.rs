//! TOML-based settings for Redline.
//!
//! Credentials and the API base live in `~/.redline/settings.toml`;
//! `WEBFLOW_API_TOKEN` and `WEBFLOW_COLLECTION_ID` environment variables
//! fill in values the file leaves unset. Saves are atomic (temp file +
//! rename) and a commented template is generated on first run.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Infrastructure)** crate:
//! - Depends on: external crates only (serde, toml, tokio, dirs)
//! - Used by: redline (app)

mod loader;
mod schema;

pub use loader::{get_with_env_fallback, settings_path, SettingsError, SettingsManager};
pub use schema::{RedlineSettings, WebflowSettings, DEFAULT_API_BASE};
