// src/main.rs
// =============================================================================
// Entry point of the `katana-docs` CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so stdout stays clean for --json)
// 3. Dispatch to the subcommand handler
// 4. Exit with proper code (0 = success, 1 = some pages failed, 2 = error)
// =============================================================================

mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use url::Url;

use cli::{Cli, Commands};
use katana_client::docs::{self, CrawlOptions, CrawlReport};
use katana_client::logging;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = everything fetched and written
//   Ok(1) = finished, but some pages failed to fetch
//   Err   = could not run at all (bad URL, unwritable dir, base page down)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Crawl {
            base_url,
            output_dir,
            max_concurrency,
            json,
        } => handle_crawl(&base_url, &output_dir, max_concurrency, json).await,
        Commands::Index { output_dir } => handle_index(&output_dir),
    }
}

async fn handle_crawl(
    base_url: &str,
    output_dir: &Path,
    max_concurrency: usize,
    json: bool,
) -> Result<i32> {
    let base_url =
        Url::parse(base_url).with_context(|| format!("invalid --base-url '{base_url}'"))?;

    // With --json, stdout carries the report and nothing else
    if !json {
        println!("🔍 Crawling {}", base_url);
    }
    let options = CrawlOptions {
        base_url,
        output_dir: output_dir.to_path_buf(),
        max_concurrency,
    };

    let client = docs::default_client()?;
    let report = docs::crawl_docs(&client, &options)
        .await
        .context("crawl failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report, output_dir);
    }

    Ok(if report.has_failures() { 1 } else { 0 })
}

fn handle_index(output_dir: &Path) -> Result<i32> {
    let entries = docs::rebuild_index(output_dir)
        .with_context(|| format!("could not index {}", output_dir.display()))?;

    println!(
        "📋 Indexed {} page(s) in {}",
        entries.len(),
        output_dir.display()
    );
    Ok(0)
}

fn print_summary(report: &CrawlReport, output_dir: &Path) {
    for failure in &report.failed {
        println!("   ❌ {} ({})", failure.url, failure.error);
    }

    println!();
    println!("📊 Summary:");
    println!("   ✅ Written: {}", report.pages.len());
    println!("   ❌ Failed: {}", report.failed.len());
    println!("   📁 Output: {}", output_dir.display());
}
