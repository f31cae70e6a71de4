// src/docs/convert.rs
// =============================================================================
// Turns a fetched HTML page into a title and a markdown body.
//
// The converter walks the DOM that `scraper` builds and emits markdown for
// the elements that matter in API docs: headings, paragraphs, lists, code
// blocks, tables, links and inline emphasis. Chrome (scripts, styles, navs,
// headers, footers) is dropped. Anything else is walked for its children.
//
// Block-level output is separated by one blank line; runs of whitespace in
// text nodes collapse to a single space, except inside <pre>.
// =============================================================================

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

// First match wins
const CONTENT_SELECTORS: &[&str] = &["main", "article", ".markdown-body", "body"];

const SKIPPED: &[&str] = &[
    "script", "style", "noscript", "nav", "header", "footer", "aside", "button", "svg", "form",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedPage {
    pub title: String,
    pub markdown: String,
}

// Title from the first <h1>, then <title>, then the URL itself
pub fn convert_page(html: &str, page_url: &Url) -> ConvertedPage {
    let document = Html::parse_document(html);

    let title = first_text(&document, "h1")
        .or_else(|| first_text(&document, "title"))
        .unwrap_or_else(|| page_url.to_string());

    let root = CONTENT_SELECTORS
        .iter()
        .filter_map(|css| Selector::parse(css).ok())
        .find_map(|selector| document.select(&selector).next())
        .unwrap_or_else(|| document.root_element());

    let mut converter = Converter {
        base: page_url,
        out: String::new(),
    };
    converter.blocks(root);

    ConvertedPage {
        title,
        markdown: converter.finish(),
    }
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = Selector::parse(css).ok()?;
    let element = document.select(&selector).next()?;
    let text = collapse(&element.text().collect::<String>());
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

struct Converter<'a> {
    base: &'a Url,
    out: String,
}

impl Converter<'_> {
    fn finish(self) -> String {
        let mut text = self.out.trim_end().to_string();
        text.push('\n');
        text
    }

    fn push_block(&mut self, block: &str) {
        let block = block.trim_matches('\n');
        if block.trim().is_empty() {
            return;
        }
        self.out.push_str(block);
        self.out.push_str("\n\n");
    }

    fn blocks(&mut self, element: ElementRef) {
        // Loose inline content between blocks is gathered into one paragraph
        let mut pending = String::new();

        for child in element.children() {
            match child.value() {
                Node::Text(text) => pending.push_str(&collapse(text)),
                Node::Element(_) => {
                    let Some(child) = ElementRef::wrap(child) else {
                        continue;
                    };
                    let name = child.value().name();
                    if is_block(name) {
                        self.push_block(pending.trim());
                        pending.clear();
                        self.block(child);
                    } else {
                        pending.push_str(&self.inline(child));
                    }
                }
                _ => {}
            }
        }
        self.push_block(pending.trim());
    }

    fn block(&mut self, element: ElementRef) {
        let name = element.value().name();
        match name {
            _ if SKIPPED.contains(&name) => {}
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = name[1..].parse::<usize>().unwrap_or(1);
                let text = self.inline_children(element);
                self.push_block(&format!("{} {}", "#".repeat(level), text.trim()));
            }
            "p" => {
                let text = self.inline_children(element);
                self.push_block(text.trim());
            }
            "pre" => self.code_block(element),
            "ul" | "ol" => {
                let mut lines = String::new();
                self.list(element, name == "ol", 0, &mut lines);
                self.push_block(&lines);
            }
            "blockquote" => {
                let mut inner = Converter {
                    base: self.base,
                    out: String::new(),
                };
                inner.blocks(element);
                let quoted: Vec<String> = inner
                    .out
                    .trim_end()
                    .lines()
                    .map(|line| format!("> {line}").trim_end().to_string())
                    .collect();
                self.push_block(&quoted.join("\n"));
            }
            "table" => self.table(element),
            "hr" => self.push_block("---"),
            _ => self.blocks(element),
        }
    }

    fn code_block(&mut self, pre: ElementRef) {
        // <pre><code class="language-json"> is the common shape
        let language = pre
            .children()
            .filter_map(ElementRef::wrap)
            .find(|c| c.value().name() == "code")
            .and_then(|code| code.value().attr("class"))
            .and_then(|class| {
                class
                    .split_whitespace()
                    .find_map(|c| c.strip_prefix("language-").or_else(|| c.strip_prefix("lang-")))
            })
            .unwrap_or("");

        let code: String = pre.text().collect();
        self.push_block(&format!("```{language}\n{}\n```", code.trim_matches('\n')));
    }

    fn list(&self, list: ElementRef, ordered: bool, depth: usize, lines: &mut String) {
        let indent = "  ".repeat(depth);
        let items = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|c| c.value().name() == "li");

        for (i, item) in items.enumerate() {
            let marker = if ordered {
                format!("{}.", i + 1)
            } else {
                "-".to_string()
            };
            let text = self.inline_children(item);
            lines.push_str(&format!("{indent}{marker} {}\n", text.trim()));

            for nested in item.children().filter_map(ElementRef::wrap) {
                let nested_name = nested.value().name();
                if nested_name == "ul" || nested_name == "ol" {
                    self.list(nested, nested_name == "ol", depth + 1, lines);
                }
            }
        }
    }

    fn table(&mut self, table: ElementRef) {
        let rows: Vec<Vec<String>> = table
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|e| e.value().name() == "tr")
            .map(|row| {
                row.children()
                    .filter_map(ElementRef::wrap)
                    .filter(|c| matches!(c.value().name(), "th" | "td"))
                    .map(|cell| self.inline_children(cell).trim().replace('|', "\\|"))
                    .collect()
            })
            .filter(|cells: &Vec<String>| !cells.is_empty())
            .collect();

        let Some(width) = rows.iter().map(Vec::len).max() else {
            return;
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        for (i, row) in rows.iter().enumerate() {
            let mut cells = row.clone();
            cells.resize(width, String::new());
            lines.push(format!("| {} |", cells.join(" | ")));
            if i == 0 {
                lines.push(format!("|{}", "---|".repeat(width)));
            }
        }
        self.push_block(&lines.join("\n"));
    }

    fn inline_children(&self, element: ElementRef) -> String {
        let mut text = String::new();
        for child in element.children() {
            match child.value() {
                Node::Text(t) => text.push_str(&collapse(t)),
                Node::Element(_) => {
                    if let Some(child) = ElementRef::wrap(child) {
                        text.push_str(&self.inline(child));
                    }
                }
                _ => {}
            }
        }
        text
    }

    fn inline(&self, element: ElementRef) -> String {
        let name = element.value().name();
        match name {
            _ if SKIPPED.contains(&name) => String::new(),
            // Nested lists are rendered by list()
            "ul" | "ol" => String::new(),
            "br" => "\n".to_string(),
            "code" => {
                let code: String = element.text().collect();
                if code.is_empty() {
                    String::new()
                } else {
                    format!("`{code}`")
                }
            }
            "strong" | "b" => wrap_nonempty(&self.inline_children(element), "**"),
            "em" | "i" => wrap_nonempty(&self.inline_children(element), "*"),
            "a" => {
                let text = self.inline_children(element);
                let label = text.trim();
                let target = element
                    .value()
                    .attr("href")
                    .and_then(|href| self.base.join(href).ok());
                match target {
                    Some(url) if !label.is_empty() => format!("[{label}]({url})"),
                    _ => text,
                }
            }
            "img" => {
                let alt = element.value().attr("alt").unwrap_or("");
                match element.value().attr("src").and_then(|s| self.base.join(s).ok()) {
                    Some(src) => format!("![{alt}]({src})"),
                    None => String::new(),
                }
            }
            _ => self.inline_children(element),
        }
    }
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "h1" | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "p"
            | "pre"
            | "ul"
            | "ol"
            | "blockquote"
            | "table"
            | "hr"
            | "div"
            | "section"
            | "article"
            | "main"
            | "dl"
            | "figure"
    ) || SKIPPED.contains(&name)
}

fn wrap_nonempty(text: &str, marker: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("{marker}{trimmed}{marker}")
    }
}

// Collapses whitespace runs to one space, keeping a single leading/trailing
// space if the text had one (so "a <b>x</b> c" keeps its spacing)
fn collapse(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return if text.is_empty() { String::new() } else { " ".to_string() };
    }
    let mut out = String::new();
    if text.starts_with(char::is_whitespace) {
        out.push(' ');
    }
    out.push_str(&words.join(" "));
    if text.ends_with(char::is_whitespace) {
        out.push(' ');
    }
    out
}
