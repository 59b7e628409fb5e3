//! Interactive five-step workflow: fetch, analyze, review, edit, publish.

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use redline_core::Suggestion;
use redline_patch::{apply_suggestions, count_annotations, preview_text, strip_annotations};
use redline_suggest::{parse_suggestions, validate_suggestions};
use redline_webflow::{WebflowClient, DEFAULT_CONTENT_FIELD};
use tracing::info;

use crate::prompt::build_analysis_prompt;

pub struct RunOptions {
    pub blog_url: String,
    pub response_file: Option<PathBuf>,
    pub publish: bool,
    pub yes: bool,
}

pub async fn run(client: WebflowClient, opts: RunOptions) -> Result<()> {
    // Step 1: fetch the post.
    let post = client
        .fetch_by_url(&opts.blog_url)
        .await
        .context("failed to fetch blog post")?;
    println!("Fetched {:?} ({} characters)", post.name, post.content.len());
    println!("Preview: {}", preview_text(&post.content, 200));

    // Step 2: hand the prompt to the assistant, read the response back.
    println!("\n--- Analysis prompt (paste into your chat assistant) ---\n");
    println!("{}", build_analysis_prompt(&post.name, &post.content));
    println!("\n--- End of prompt ---\n");

    let raw_response = read_response(&opts.response_file)?;
    let suggestions = validate_suggestions(parse_suggestions(&raw_response));
    if suggestions.is_empty() {
        bail!(
            "no valid suggestions found in the response; make sure the assistant \
             used the requested correction format and try again"
        );
    }

    // Step 3: review and select.
    let selected = if opts.yes {
        suggestions.clone()
    } else {
        select_suggestions(&suggestions)?
    };
    if selected.is_empty() {
        bail!("no suggestions selected");
    }

    // Step 4: apply, leaving room for manual edits in the work file.
    let annotated = apply_suggestions(&post.content, &selected);
    println!(
        "{} highlighted change(s) from {} selected suggestion(s).",
        count_annotations(&annotated),
        selected.len()
    );

    let work_file = PathBuf::from(format!("redline-{}.html", post.slug));
    std::fs::write(&work_file, &annotated)
        .with_context(|| format!("failed to write {}", work_file.display()))?;
    println!("Annotated HTML written to {}", work_file.display());

    if !opts.yes {
        print!("Edit the file if needed, then press Enter to continue... ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }

    let edited = std::fs::read_to_string(&work_file)
        .with_context(|| format!("failed to read {}", work_file.display()))?;
    let final_content = strip_annotations(&edited);

    // Step 5: update, optionally publish.
    client
        .update_item(&post.id, &final_content, DEFAULT_CONTENT_FIELD)
        .await
        .context("failed to update blog post")?;
    info!("updated item {}", post.id);
    println!("Blog post updated.");

    if opts.publish {
        client
            .publish_item(&post.id)
            .await
            .context("failed to publish blog post")?;
        println!("Blog post published.");
    }

    Ok(())
}

fn read_response(file: &Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            println!("Paste the assistant's response, then end input with Ctrl-D:");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn select_suggestions(suggestions: &[Suggestion]) -> Result<Vec<Suggestion>> {
    println!("\n{} suggestion(s):", suggestions.len());
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "  {}. [{}] [{}] {:?} -> {:?}",
            i + 1,
            s.severity.label(),
            s.kind,
            s.original,
            s.suggested
        );
        if !s.reason.is_empty() {
            println!("     reason: {}", s.reason);
        }
    }

    print!("Apply which suggestions? (comma-separated numbers, Enter for all): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let line = line.trim();

    if line.is_empty() || line.eq_ignore_ascii_case("all") {
        return Ok(suggestions.to_vec());
    }

    let mut selected = Vec::new();
    for part in line.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let idx: usize = part
            .parse()
            .with_context(|| format!("invalid selection {:?}", part))?;
        if idx == 0 || idx > suggestions.len() {
            bail!("selection {} out of range (1-{})", idx, suggestions.len());
        }
        selected.push(suggestions[idx - 1].clone());
    }
    Ok(selected)
}
