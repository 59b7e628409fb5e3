//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Redline - AI-assisted fact-checking for Webflow blog posts
#[derive(Parser, Debug)]
#[command(name = "redline")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Show verbose output (debug information)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk the full fact-check workflow for one blog post
    Run {
        /// Public URL of the blog post to fact-check
        blog_url: String,

        /// Read the assistant response from a file instead of stdin
        #[arg(long)]
        response_file: Option<PathBuf>,

        /// Publish the item after updating it
        #[arg(long)]
        publish: bool,

        /// Apply every suggestion without prompting for a selection
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Parse an assistant response into structured suggestions
    Parse {
        /// Response file; stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a JSON list of suggestions to an HTML file
    Apply {
        /// HTML content file
        #[arg(long)]
        content: PathBuf,

        /// JSON file with the suggestions to apply
        #[arg(long)]
        suggestions: PathBuf,
    },

    /// Strip highlight annotations, producing publishable HTML
    Strip {
        /// Annotated HTML file
        #[arg(long)]
        content: PathBuf,
    },

    /// Manage Webflow credentials and settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Store the Webflow API token
    SetToken { token: String },

    /// Store the Webflow collection id
    SetCollection { collection_id: String },

    /// Print the current settings (token redacted)
    Show,
}
