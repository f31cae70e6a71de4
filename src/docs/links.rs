// src/docs/links.rs
// =============================================================================
// Finds the documentation pages linked from a page's sidebar.
//
// Docs sites put their table of contents in different places, so we try an
// ordered list of CSS selectors and use the first one that matches anything.
// If none match we fall back to every link on the page.
//
// Only links that stay inside the docs tree are kept:
// - same host as the base URL
// - path starts with the base URL's directory
// - fragments (#section) are stripped, so one page = one URL
//
// Rust concepts:
// - Option chaining with ? inside functions returning Option
// - filter_map: map and drop the Nones in one pass
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Tried in order; the first selector with at least one match wins
pub const SIDEBAR_SELECTORS: &[&str] = &[
    "nav.sidebar a[href]",
    ".sidebar a[href]",
    ".rm-Sidebar a[href]",
    "aside a[href]",
    "nav a[href]",
];

const FALLBACK_SELECTOR: &str = "a[href]";

// The part of a site we are allowed to crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    host: String,
    prefix: String,
}

impl Scope {
    // Scope for a base URL: its host plus its directory.
    //
    // Examples:
    //   https://docs.site/reference/intro  -> docs.site + /reference/
    //   https://docs.site/reference/       -> docs.site + /reference/
    pub fn for_base(base: &Url) -> Option<Self> {
        let host = base.host_str()?.to_string();
        let prefix = base.join("./").ok()?.path().to_string();
        Some(Self { host, prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn contains(&self, url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https")
            && url.host_str() == Some(self.host.as_str())
            && url.path().starts_with(&self.prefix)
    }
}

// Returns in-scope page URLs from the sidebar of `html`, in document order,
// without duplicates and without fragments.
pub fn extract_sidebar_links(html: &str, page_url: &Url, scope: &Scope) -> Vec<Url> {
    let document = Html::parse_document(html);

    let hrefs: Vec<String> = SIDEBAR_SELECTORS
        .iter()
        .chain(std::iter::once(&FALLBACK_SELECTOR))
        .filter_map(|css| Selector::parse(css).ok())
        .map(|selector| {
            document
                .select(&selector)
                .filter_map(|a| a.value().attr("href").map(str::to_string))
                .collect::<Vec<_>>()
        })
        .find(|found| !found.is_empty())
        .unwrap_or_default();

    let mut links: Vec<Url> = Vec::new();
    for href in hrefs {
        let Some(url) = resolve_link(page_url, &href) else {
            continue;
        };
        if scope.contains(&url) && !links.contains(&url) {
            links.push(url);
        }
    }
    links
}

// Resolves a (possibly relative) href against the page it appeared on.
// Pure anchors and non-web schemes are skipped.
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    let mut url = base.join(href).ok()?;
    url.set_fragment(None);
    Some(url)
}
