// src/cli.rs
// =============================================================================
// Command-line interface for `katana-docs`, built with clap's derive API.
//
//   katana-docs crawl --base-url <URL> --output-dir <DIR> [--max-concurrency N] [--json]
//   katana-docs index --output-dir <DIR>
//
// -v / --verbose is global and can be repeated (-vv, -vvv) for more logging.
// =============================================================================

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use katana_client::docs::DEFAULT_MAX_CONCURRENCY;

pub const DEFAULT_DOCS_URL: &str = "https://developer.katanamrp.com/reference/api-introduction";
pub const DEFAULT_OUTPUT_DIR: &str = "docs/katana-api";

#[derive(Parser, Debug)]
#[command(
    name = "katana-docs",
    version,
    about = "Keep an offline markdown copy of the Katana API reference",
    long_about = "katana-docs crawls the Katana API reference site and writes one markdown \
                  file per page plus an index, so the docs can be searched and diffed locally."
)]
pub struct Cli {
    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl the reference site and write markdown pages plus an index
    ///
    /// Example: katana-docs crawl --output-dir docs/katana-api
    Crawl {
        /// Page whose sidebar lists the docs to fetch
        #[arg(long, default_value = DEFAULT_DOCS_URL)]
        base_url: String,

        /// Directory the markdown files are written to (created if missing)
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,

        /// How many pages may be fetched at the same time
        #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
        max_concurrency: usize,

        /// Print the crawl report as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Rebuild index.json and index.md from pages already on disk
    ///
    /// Example: katana-docs index --output-dir docs/katana-api
    Index {
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output_dir: PathBuf,
    },
}
