// src/docs/index.rs
// =============================================================================
// Page files and the docs index.
//
// Every crawled page is written as <slug>.md with a small front-matter block:
//
//   ---
//   title: "Create a customer"
//   source: https://developer.katanamrp.com/reference/createcustomer
//   ---
//
// The index is written twice: index.json (machine-readable, sorted by file)
// and index.md (a bullet list for humans). `rebuild_index` regenerates both
// from whatever .md files are already in the directory, so the index can be
// refreshed without crawling again.
// =============================================================================

use std::fs;
use std::path::Path;

use pulldown_cmark::{Event, Parser, Tag};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::error::Result;

pub const INDEX_JSON: &str = "index.json";
pub const INDEX_MD: &str = "index.md";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub title: String,
    pub url: String,
    pub file: String,
}

// Builds the text of a page file: front matter, blank line, body
pub fn page_file_contents(title: &str, source: &str, markdown: &str) -> String {
    // Quoted so colons and quotes in titles survive
    let quoted = serde_json::to_string(title).unwrap_or_else(|_| format!("\"{title}\""));
    format!("---\ntitle: {quoted}\nsource: {source}\n---\n\n{markdown}")
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub source: Option<String>,
}

// Parses the leading `---` block, returning it and the remaining body
pub fn parse_front_matter(text: &str) -> (FrontMatter, &str) {
    let mut front = FrontMatter::default();

    let Some(rest) = text.strip_prefix("---\n") else {
        return (front, text);
    };
    let Some(end) = rest.find("\n---") else {
        return (front, text);
    };

    for line in rest[..end].lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "title" => {
                let title = if value.starts_with('"') {
                    serde_json::from_str::<String>(value).unwrap_or_else(|_| value.to_string())
                } else {
                    value.to_string()
                };
                front.title = Some(title);
            }
            "source" => front.source = Some(value.to_string()),
            _ => {}
        }
    }

    let body = &rest[end + 4..];
    (front, body.trim_start_matches('\n'))
}

// Text of the first heading in a markdown document
pub fn first_heading(markdown: &str) -> Option<String> {
    let mut in_heading = false;
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading(..)) => in_heading = true,
            Event::End(Tag::Heading(..)) if in_heading => {
                let heading = text.trim().to_string();
                if !heading.is_empty() {
                    return Some(heading);
                }
                in_heading = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_heading => text.push_str(&t),
            _ => {}
        }
    }
    None
}

// File-name slug for a page, relative to the crawl prefix.
//
// Examples (prefix = /reference/):
//   /reference/                 -> overview
//   /reference/createcustomer   -> createcustomer
//   /reference/sales_orders/v2  -> sales-orders-v2
pub fn slug_for(url: &Url, prefix: &str) -> String {
    let path = url.path();
    let relative = path.strip_prefix(prefix).unwrap_or(path);

    let mut slug = String::with_capacity(relative.len());
    for c in relative.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        "overview".to_string()
    } else {
        slug.to_string()
    }
}

// Writes index.json and index.md; entries are sorted by file first
pub fn write_index(dir: &Path, entries: &mut [IndexEntry]) -> Result<()> {
    entries.sort_by(|a, b| a.file.cmp(&b.file));

    let json = serde_json::to_string_pretty(&entries)?;
    fs::write(dir.join(INDEX_JSON), format!("{json}\n"))?;

    let mut md = String::from("# Katana API documentation\n\n");
    for entry in entries.iter() {
        md.push_str(&format!("- [{}]({}) ([source]({}))\n", entry.title, entry.file, entry.url));
    }
    fs::write(dir.join(INDEX_MD), md)?;

    debug!(pages = entries.len(), dir = %dir.display(), "index written");
    Ok(())
}

// Rebuilds the index from the page files already in `dir`
pub fn rebuild_index(dir: &Path) -> Result<Vec<IndexEntry>> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir)? {
        let path = dir_entry?.path();
        let Some(file) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            continue;
        };
        if !file.ends_with(".md") || file == INDEX_MD {
            continue;
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!(file = %file, error = %e, "skipping unreadable page");
                continue;
            }
        };

        let (front, body) = parse_front_matter(&text);
        let title = front
            .title
            .or_else(|| first_heading(body))
            .unwrap_or_else(|| file.trim_end_matches(".md").to_string());

        entries.push(IndexEntry {
            title,
            url: front.source.unwrap_or_default(),
            file,
        });
    }

    write_index(dir, &mut entries)?;
    Ok(entries)
}
