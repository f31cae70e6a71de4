// src/docs/mod.rs
// =============================================================================
// Offline copy of the Katana API reference.
//
// Used by the `katana-docs` binary:
//   crawl  -> fetch the reference site, write one markdown file per page
//   index  -> rebuild index.json / index.md from files already on disk
//
// Pipeline: fetch -> sidebar links -> recurse one level -> write -> index
// =============================================================================

mod convert;
mod crawler;
mod index;
mod links;

pub use convert::{convert_page, ConvertedPage};
pub use crawler::{
    crawl_docs, default_client, CrawlOptions, CrawlReport, FailedPage, DEFAULT_MAX_CONCURRENCY,
};
pub use index::{
    first_heading, page_file_contents, parse_front_matter, rebuild_index, slug_for, write_index,
    FrontMatter, IndexEntry, INDEX_JSON, INDEX_MD,
};
pub use links::{extract_sidebar_links, resolve_link, Scope, SIDEBAR_SELECTORS};
