//! Settings schema definitions.
//!
//! All structs use `#[serde(default)]` so partial configuration files load;
//! missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.webflow.com/v2";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedlineSettings {
    pub webflow: WebflowSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebflowSettings {
    /// CMS API token; `WEBFLOW_API_TOKEN` fills this when unset.
    pub api_token: String,
    /// Collection holding the blog posts; `WEBFLOW_COLLECTION_ID` fills
    /// this when unset.
    pub collection_id: String,
    /// API root override (e.g. a local proxy during development).
    pub api_base: String,
}

impl Default for WebflowSettings {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            collection_id: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
