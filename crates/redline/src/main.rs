//! Redline CLI entry point.

mod args;
mod commands;
mod prompt;
mod wizard;

use anyhow::Result;
use clap::Parser;
use redline_settings::SettingsManager;
use redline_webflow::WebflowClient;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Run {
            blog_url,
            response_file,
            publish,
            yes,
        } => {
            let client = build_client().await?;
            wizard::run(
                client,
                wizard::RunOptions {
                    blog_url,
                    response_file,
                    publish,
                    yes,
                },
            )
            .await
        }
        Command::Parse { file, json } => commands::parse_command(file.as_deref(), json),
        Command::Apply {
            content,
            suggestions,
        } => commands::apply_command(&content, &suggestions),
        Command::Strip { content } => commands::strip_command(&content),
        Command::Config { action } => commands::config_command(action).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn build_client() -> Result<WebflowClient> {
    let manager = SettingsManager::new().await?;
    let (token, collection_id) = manager.credentials()?;
    let base = manager.get().webflow.api_base.clone();
    Ok(WebflowClient::with_base_url(base, token, collection_id)?)
}
