// src/docs/crawler.rs
// =============================================================================
// Crawls the Katana API reference into a directory of markdown files.
//
// How it works:
// 1. Fetch the base page and pull the page list out of its sidebar
// 2. Fetch those pages concurrently (at most `max_concurrency` at a time)
// 3. Collect sidebar links from those pages too, and fetch any new ones once
//    (links found at that second level are not followed further)
// 4. Convert every page to markdown, write <slug>.md, then the index
//
// A `visited` set is filled when a URL is queued, so no page is fetched twice
// even if many pages link to it. Fetch failures are logged and counted; they
// never stop the crawl.
//
// Rust concepts:
// - Arc<Semaphore>: shared permit pool, each fetch holds one permit
// - join_all: run a batch of futures together and keep their order
// =============================================================================

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use url::Url;

use super::convert::convert_page;
use super::index::{page_file_contents, slug_for, write_index, IndexEntry};
use super::links::{extract_sidebar_links, Scope};
use crate::error::{KatanaError, Result};

pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct CrawlOptions {
    pub base_url: Url,
    pub output_dir: PathBuf,
    pub max_concurrency: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPage {
    pub url: String,
    pub error: String,
}

#[derive(Debug, Default, Serialize)]
pub struct CrawlReport {
    pub pages: Vec<IndexEntry>,
    pub failed: Vec<FailedPage>,
}

impl CrawlReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

// Crawl state that outlives a single batch
struct Crawl<'a> {
    client: &'a Client,
    semaphore: Arc<Semaphore>,
    scope: Scope,
    output_dir: &'a Path,
    visited: HashSet<Url>,
    used_slugs: HashSet<String>,
    report: CrawlReport,
}

pub fn default_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(concat!("katana-docs/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

pub async fn crawl_docs(client: &Client, options: &CrawlOptions) -> Result<CrawlReport> {
    let scope = Scope::for_base(&options.base_url).ok_or_else(|| {
        KatanaError::Config(format!("base URL has no host: {}", options.base_url))
    })?;
    tokio::fs::create_dir_all(&options.output_dir).await?;

    let mut crawl = Crawl {
        client,
        semaphore: Arc::new(Semaphore::new(options.max_concurrency.max(1))),
        scope,
        output_dir: &options.output_dir,
        visited: HashSet::new(),
        // index.md belongs to the index
        used_slugs: HashSet::from(["index".to_string()]),
        report: CrawlReport::default(),
    };

    info!(base = %options.base_url, "crawling docs");
    let mut base = options.base_url.clone();
    base.set_fragment(None);

    // Level 0: the base page. Without it there is nothing to discover.
    crawl.visited.insert(base.clone());
    let html = fetch_page(client, &base).await?;
    crawl.save(&base, &html).await?;
    let level_one = crawl.discover(&html, &base);

    // Level 1: sidebar pages, whose own links are collected once
    let mut level_two = Vec::new();
    for (url, html) in crawl.fetch_batch(level_one).await {
        crawl.save(&url, &html).await?;
        level_two.extend(crawl.discover(&html, &url));
    }

    // Level 2: fetched and saved, not followed
    for (url, html) in crawl.fetch_batch(level_two).await {
        crawl.save(&url, &html).await?;
    }

    let mut report = crawl.report;
    write_index(&options.output_dir, &mut report.pages)?;
    info!(
        pages = report.pages.len(),
        failed = report.failed.len(),
        "crawl finished"
    );
    Ok(report)
}

impl Crawl<'_> {
    // New in-scope links on a page; marks them visited
    fn discover(&mut self, html: &str, page_url: &Url) -> Vec<Url> {
        let mut fresh = Vec::new();
        for link in extract_sidebar_links(html, page_url, &self.scope) {
            if self.visited.insert(link.clone()) {
                fresh.push(link);
            }
        }
        debug!(page = %page_url, new_links = fresh.len(), "links discovered");
        fresh
    }

    // Fetches a batch concurrently; failures go into the report
    async fn fetch_batch(&mut self, urls: Vec<Url>) -> Vec<(Url, String)> {
        let fetches = urls.into_iter().map(|url| {
            let semaphore = Arc::clone(&self.semaphore);
            let client = self.client;
            async move {
                // The semaphore is never closed, so a permit always arrives
                let _permit = semaphore.acquire_owned().await.ok();
                let result = fetch_page(client, &url).await;
                (url, result)
            }
        });

        let mut pages = Vec::new();
        for (url, result) in join_all(fetches).await {
            match result {
                Ok(html) => pages.push((url, html)),
                Err(e) => {
                    warn!(url = %url, error = %e, "failed to fetch page");
                    self.report.failed.push(FailedPage {
                        url: url.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }
        pages
    }

    async fn save(&mut self, url: &Url, html: &str) -> Result<()> {
        let page = convert_page(html, url);

        // Two URLs can collapse to the same slug; number the later ones
        let base_slug = slug_for(url, self.scope.prefix());
        let mut slug = base_slug.clone();
        let mut n = 2;
        while !self.used_slugs.insert(slug.clone()) {
            slug = format!("{base_slug}-{n}");
            n += 1;
        }

        let file = format!("{slug}.md");
        let contents = page_file_contents(&page.title, url.as_str(), &page.markdown);
        tokio::fs::write(self.output_dir.join(&file), contents).await?;
        debug!(url = %url, file = %file, "page written");

        self.report.pages.push(IndexEntry {
            title: page.title,
            url: url.to_string(),
            file,
        });
        Ok(())
    }
}

// Fetches a page and returns its HTML
async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(KatanaError::PageStatus {
            url: url.to_string(),
            status,
        });
    }

    Ok(response.text().await?)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a Semaphore instead of spawning everything at once?
//    - A Semaphore holds N permits; acquire() waits until one is free
//    - Each fetch holds a permit until it is dropped at the end of the block
//    - So at most N requests are in flight, however many pages there are
//
// 2. Why Arc?
//    - Every future in the batch needs the same semaphore
//    - Arc (atomic reference count) lets them share it; acquire_owned()
//      needs an Arc so the permit can outlive the borrow
//
// 3. Why is `visited` filled when a URL is queued, not when it is fetched?
//    - Pages in the same batch often link to each other
//    - Marking at queue time means a URL can never be in two batches
//
// 4. What does join_all return?
//    - The outputs of all the futures, in the same order they were given
//    - That keeps the written files and logs deterministic
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::index::INDEX_JSON;
    use tempfile::tempdir;
    use std::sync::Mutex;
    use std::time::Instant;
    use wiremock::matchers::{method, path, path_regex};
    use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

    fn html(body: &str) -> ResponseTemplate {
        ResponseTemplate::new(200)
            .insert_header("content-type", "text/html")
            .set_body_string(format!("<html><body>{body}</body></html>"))
    }

    async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_crawl_writes_pages_and_index() {
        let server = MockServer::start().await;
        let sidebar = r#"<nav class="sidebar">
            <a href="/ref/customers">Customers</a>
            <a href="/ref/products#top">Products</a>
            <a href="/ref/missing">Missing</a>
            <a href="/blog/news">Out of scope</a>
        </nav>"#;

        mount(&server, "/ref/intro", html(&format!("{sidebar}<main><h1>Intro</h1></main>"))).await;
        mount(
            &server,
            "/ref/customers",
            html(&format!(
                r#"{sidebar}<main><h1>Customers</h1><p>See <a href="/ref/customer-object">the object</a>.</p></main>"#
            )),
        )
        .await;
        mount(
            &server,
            "/ref/products",
            html(r#"<nav class="sidebar"><a href="/ref/variants">Variants</a></nav><main><h1>Products</h1></main>"#),
        )
        .await;
        mount(
            &server,
            "/ref/variants",
            html(r#"<nav class="sidebar"><a href="/ref/too-deep">Deep</a></nav><main><h1>Variants</h1></main>"#),
        )
        .await;
        mount(&server, "/ref/missing", ResponseTemplate::new(404)).await;

        let dir = tempdir().unwrap();
        let options = CrawlOptions {
            base_url: Url::parse(&format!("{}/ref/intro", server.uri())).unwrap(),
            output_dir: dir.path().to_path_buf(),
            max_concurrency: 2,
        };
        let report = crawl_docs(&default_client().unwrap(), &options).await.unwrap();

        let files: Vec<&str> = report.pages.iter().map(|p| p.file.as_str()).collect();
        assert_eq!(files, vec!["customers.md", "intro.md", "products.md", "variants.md"]);

        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].url.ends_with("/ref/missing"));
        assert!(report.has_failures());

        let customers = std::fs::read_to_string(dir.path().join("customers.md")).unwrap();
        assert!(customers.starts_with("---\ntitle: \"Customers\"\nsource: "));
        assert!(customers.contains("# Customers"));

        let index: Vec<IndexEntry> =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join(INDEX_JSON)).unwrap())
                .unwrap();
        assert_eq!(index, report.pages);
    }

    // Records when each request reached the server, then answers slowly
    struct SlowPage {
        delay: Duration,
        arrivals: Arc<Mutex<Vec<Instant>>>,
    }

    impl Respond for SlowPage {
        fn respond(&self, _request: &Request) -> ResponseTemplate {
            self.arrivals.lock().unwrap().push(Instant::now());
            html("<main><h1>Page</h1></main>").set_delay(self.delay)
        }
    }

    #[tokio::test]
    async fn test_fetches_never_exceed_max_concurrency() {
        let server = MockServer::start().await;
        let sidebar: String = (1..=6)
            .map(|n| format!(r#"<a href="/ref/p{n}">Page {n}</a>"#))
            .collect();
        mount(
            &server,
            "/ref/intro",
            html(&format!(r#"<nav class="sidebar">{sidebar}</nav><main><h1>Intro</h1></main>"#)),
        )
        .await;

        let delay = Duration::from_millis(200);
        let arrivals = Arc::new(Mutex::new(Vec::new()));
        Mock::given(method("GET"))
            .and(path_regex(r"^/ref/p\d$"))
            .respond_with(SlowPage {
                delay,
                arrivals: Arc::clone(&arrivals),
            })
            .expect(6)
            .mount(&server)
            .await;

        let max_concurrency = 2;
        let dir = tempdir().unwrap();
        let options = CrawlOptions {
            base_url: Url::parse(&format!("{}/ref/intro", server.uri())).unwrap(),
            output_dir: dir.path().to_path_buf(),
            max_concurrency,
        };
        let report = crawl_docs(&default_client().unwrap(), &options).await.unwrap();
        assert_eq!(report.pages.len(), 7);
        assert!(!report.has_failures());

        let mut arrivals = arrivals.lock().unwrap().clone();
        arrivals.sort();
        assert_eq!(arrivals.len(), 6);
        // A request can only start once an earlier one has been answered, so
        // request i + max_concurrency arrives at least `delay` after request i
        let slack = Duration::from_millis(5);
        for window in arrivals.windows(max_concurrency + 1) {
            let gap = window[max_concurrency] - window[0];
            assert!(gap + slack >= delay, "{} requests within {gap:?}", max_concurrency + 1);
        }
        // ...and the permits were actually used in parallel
        assert!(arrivals.windows(2).any(|w| w[1] - w[0] < delay));
    }

    #[tokio::test]
    async fn test_base_page_failure_is_an_error() {
        let server = MockServer::start().await;
        mount(&server, "/ref/intro", ResponseTemplate::new(500)).await;

        let dir = tempdir().unwrap();
        let options = CrawlOptions {
            base_url: Url::parse(&format!("{}/ref/intro", server.uri())).unwrap(),
            output_dir: dir.path().to_path_buf(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        };
        let err = crawl_docs(&default_client().unwrap(), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, KatanaError::PageStatus { .. }));
    }
}
