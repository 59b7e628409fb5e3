//! Scriptable subcommands around the parse/patch core.

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use redline_core::Suggestion;
use redline_patch::{apply_suggestions, count_annotations, strip_annotations};
use redline_settings::{settings_path, SettingsManager};
use redline_suggest::{parse_suggestions, validate_suggestions};

use crate::args::ConfigAction;

pub fn parse_command(file: Option<&Path>, json: bool) -> Result<()> {
    let raw = read_input(file)?;
    let suggestions = validate_suggestions(parse_suggestions(&raw));
    if suggestions.is_empty() {
        bail!("no valid suggestions found in the response");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "{}. [{}] [{}] {:?} -> {:?}",
            i + 1,
            s.severity.label(),
            s.kind,
            s.original,
            s.suggested
        );
        if !s.reason.is_empty() {
            println!("   reason: {}", s.reason);
        }
    }
    Ok(())
}

pub fn apply_command(content: &Path, suggestions_path: &Path) -> Result<()> {
    let html = std::fs::read_to_string(content)
        .with_context(|| format!("failed to read {}", content.display()))?;
    let raw = std::fs::read_to_string(suggestions_path)
        .with_context(|| format!("failed to read {}", suggestions_path.display()))?;
    let suggestions: Vec<Suggestion> =
        serde_json::from_str(&raw).context("suggestions file is not a JSON list of suggestions")?;

    let annotated = apply_suggestions(&html, &suggestions);
    eprintln!("{} annotation(s) applied", count_annotations(&annotated));
    println!("{}", annotated);
    Ok(())
}

pub fn strip_command(content: &Path) -> Result<()> {
    let html = std::fs::read_to_string(content)
        .with_context(|| format!("failed to read {}", content.display()))?;
    println!("{}", strip_annotations(&html));
    Ok(())
}

pub async fn config_command(action: ConfigAction) -> Result<()> {
    let mut manager = SettingsManager::new().await?;
    match action {
        ConfigAction::SetToken { token } => {
            manager.get_mut().webflow.api_token = token;
            manager.save().await?;
            println!("API token saved.");
        }
        ConfigAction::SetCollection { collection_id } => {
            manager.get_mut().webflow.collection_id = collection_id;
            manager.save().await?;
            println!("Collection id saved.");
        }
        ConfigAction::Show => {
            manager.ensure_exists().await?;
            let settings = manager.get();
            let token = if settings.webflow.api_token.is_empty() {
                "(not set)"
            } else {
                "(set)"
            };
            let collection = if settings.webflow.collection_id.is_empty() {
                "(not set)"
            } else {
                settings.webflow.collection_id.as_str()
            };
            println!("api_token: {}", token);
            println!("collection_id: {}", collection);
            println!("api_base: {}", settings.webflow.api_base);
            println!("settings file: {}", settings_path()?.display());
        }
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
