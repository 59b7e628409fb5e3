//! Webflow CMS client for fetching and publishing blog posts.
//!
//! Thin wrapper over the Webflow Data API v2: resolve a public blog URL to
//! the CMS item behind it, patch the item's body field, and publish. No
//! retry policy; callers see plain [`WebflowError`]s.
//!
//! # Architecture
//!
//! This is a **Layer 2 (Infrastructure)** crate:
//! - Depends on: external crates only (reqwest, serde, url)
//! - Used by: redline (app)

mod client;
mod error;
mod models;

pub use client::{extract_slug, WebflowClient, DEFAULT_CONTENT_FIELD};
pub use error::{Result, WebflowError};
pub use models::BlogPost;
