//! Settings file loading and atomic persistence.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::schema::RedlineSettings;

const SETTINGS_TEMPLATE: &str = r#"# Redline settings
# Webflow CMS credentials used to fetch and publish blog posts.

[webflow]
api_token = ""
collection_id = ""
# api_base = "https://api.webflow.com/v2"
"#;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("home directory not found")]
    HomeDirNotFound,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("settings serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Webflow credentials not configured; run `redline config`")]
    MissingCredentials,
}

/// Default settings location: `~/.redline/settings.toml`.
pub fn settings_path() -> Result<PathBuf, SettingsError> {
    let home = dirs::home_dir().ok_or(SettingsError::HomeDirNotFound)?;
    Ok(home.join(".redline").join("settings.toml"))
}

/// Value from the settings file, or the first non-empty environment
/// fallback.
pub fn get_with_env_fallback(value: &str, env_vars: &[&str]) -> Option<String> {
    if !value.is_empty() {
        return Some(value.to_string());
    }
    env_vars
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
}

/// Loads, holds, and persists the settings file.
pub struct SettingsManager {
    path: PathBuf,
    settings: RedlineSettings,
}

impl SettingsManager {
    /// Load from the default location, using defaults when the file does
    /// not exist yet.
    pub async fn new() -> Result<Self, SettingsError> {
        Self::from_path(settings_path()?).await
    }

    pub async fn from_path(path: PathBuf) -> Result<Self, SettingsError> {
        let settings = Self::load_from_path(&path).await?;
        Ok(Self { path, settings })
    }

    async fn load_from_path(path: &Path) -> Result<RedlineSettings, SettingsError> {
        if !path.exists() {
            debug!("no settings file at {:?}, using defaults", path);
            return Ok(RedlineSettings::default());
        }
        let contents = tokio::fs::read_to_string(path).await?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn get(&self) -> &RedlineSettings {
        &self.settings
    }

    pub fn get_mut(&mut self) -> &mut RedlineSettings {
        &mut self.settings
    }

    /// Resolved Webflow credentials, environment variables filling unset
    /// values.
    pub fn credentials(&self) -> Result<(String, String), SettingsError> {
        let token = get_with_env_fallback(&self.settings.webflow.api_token, &["WEBFLOW_API_TOKEN"]);
        let collection = get_with_env_fallback(
            &self.settings.webflow.collection_id,
            &["WEBFLOW_COLLECTION_ID"],
        );
        match (token, collection) {
            (Some(token), Some(collection)) => Ok((token, collection)),
            _ => Err(SettingsError::MissingCredentials),
        }
    }

    /// Atomic save: write to a temp file, then rename over the target.
    pub async fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = toml::to_string_pretty(&self.settings)?;
        let tmp = self.path.with_extension("toml.tmp");
        tokio::fs::write(&tmp, contents).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!("saved settings to {:?}", self.path);
        Ok(())
    }

    /// Write a commented template on first run; leaves an existing file
    /// untouched.
    pub async fn ensure_exists(&self) -> Result<(), SettingsError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, SETTINGS_TEMPLATE).await?;

        debug!("wrote settings template to {:?}", self.path);
        Ok(())
    }
}
