//! Main-content extraction from documentation pages
//!
//! Documentation sites wrap the useful text in a handful of well-known
//! containers. Extraction strips page chrome, picks the first container that
//! exists, and falls back to the whole body when none does.

use crate::error::ExtractError;
use crate::text::collapse_whitespace;
use regex::{Regex, RegexBuilder};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Elements dropped before anything else
const CHROME_TAGS: &str = "nav, header, footer, aside, script, style, meta, link";

/// Content containers, highest priority first
const CONTENT_SELECTORS: &[&str] = &[
    "main",
    "article",
    ".content",
    ".documentation",
    ".doc-content",
    ".main-content",
    ".page-content",
    ".post-content",
    ".entry-content",
    "#content",
    "#main",
    "#documentation",
    ".markdown-body",
];

/// List-like elements that may hold site navigation in the body fallback
const BODY_NOISE_TAGS: &str = "nav, header, footer, aside, menu, ul, ol";

/// Words that mark a list-like element as navigation
const NAVIGATION_KEYWORDS: &[&str] = &[
    "navigation",
    "menu",
    "sidebar",
    "footer",
    "header",
    "breadcrumb",
    "toc",
];

/// Boilerplate phrases removed from the extracted text (case-insensitive)
const NOISE_PATTERNS: &[&str] = &[
    r"cookie\s+policy",
    r"privacy\s+policy",
    r"terms\s+of\s+service",
    r"follow\s+us\s+on",
    r"subscribe\s+to",
    r"newsletter",
    r"social\s+media",
    r"copyright.*?\d{4}",
    r"all\s+rights\s+reserved",
    r"last\s+updated.*?\d{4}",
    r"page\s+\d+\s+of\s+\d+",
    r"next\s+page",
    r"previous\s+page",
    // breadcrumb trails: Home > Docs > Guide > ...
    r"home\s*>\s*.*?>\s*.*?>\s*.*?",
];

/// Compiled selectors and patterns, built once on first use
static DEFAULT_EXTRACTOR: LazyLock<Result<Extractor, ExtractError>> =
    LazyLock::new(|| Extractor::new(CONTENT_SELECTORS));

/// Extract readable documentation text from an HTML page
///
/// Never fails: when nothing usable is found, or extraction itself breaks,
/// the input is returned unchanged, so callers must tolerate raw markup.
pub fn extract_main_content(html: &str) -> String {
    recover(html, try_extract_main_content(html))
}

/// Extract documentation text, reporting setup failures
///
/// Returns an empty string when the page has no visible text.
pub fn try_extract_main_content(html: &str) -> Result<String, ExtractError> {
    match &*DEFAULT_EXTRACTOR {
        Ok(extractor) => Ok(extractor.extract(html)),
        Err(e) => Err(e.clone()),
    }
}

fn recover(html: &str, result: Result<String, ExtractError>) -> String {
    match result {
        Ok(text) if !text.is_empty() => {
            debug!(chars = text.chars().count(), "Extracted documentation content");
            text
        }
        Ok(_) => {
            debug!("No documentation content found, keeping original page");
            html.to_string()
        }
        Err(e) => {
            warn!(error = %e, "Could not extract documentation content");
            html.to_string()
        }
    }
}

struct Extractor {
    chrome: Selector,
    containers: Vec<Selector>,
    list_like: Selector,
    body: Selector,
    noise: Vec<Regex>,
}

impl Extractor {
    fn new(content_selectors: &[&str]) -> Result<Self, ExtractError> {
        Ok(Self {
            chrome: parse_selector(CHROME_TAGS)?,
            containers: content_selectors
                .iter()
                .map(|s| parse_selector(s))
                .collect::<Result<Vec<_>, _>>()?,
            list_like: parse_selector(BODY_NOISE_TAGS)?,
            body: parse_selector("body")?,
            noise: compile_noise_patterns()?,
        })
    }

    fn extract(&self, html: &str) -> String {
        let mut document = Html::parse_document(html);
        detach_where(&mut document, &self.chrome, |_| true);

        let mut content = self.first_container_text(&document);

        if content.is_empty() {
            content = self.body_text(&mut document);
        }

        if content.is_empty() {
            return content;
        }

        strip_noise(&collapse_whitespace(&content), &self.noise)
    }

    /// Text of the first element matched by the highest-priority selector
    fn first_container_text(&self, document: &Html) -> String {
        let root = document.root_element();
        for selector in &self.containers {
            if let Some(element) = root.select(selector).next() {
                return visible_text(element);
            }
        }
        String::new()
    }

    /// Whole-body text after dropping list-like navigation blocks
    fn body_text(&self, document: &mut Html) -> String {
        detach_where(document, &self.list_like, |element| {
            let text = element.text().collect::<String>().to_lowercase();
            NAVIGATION_KEYWORDS.iter().any(|kw| text.contains(kw))
        });

        document
            .root_element()
            .select(&self.body)
            .next()
            .map(visible_text)
            .unwrap_or_default()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn compile_noise_patterns() -> Result<Vec<Regex>, ExtractError> {
    NOISE_PATTERNS
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(ExtractError::from)
        })
        .collect()
}

/// Detach every element matched by `selector` for which `predicate` holds
fn detach_where<F>(document: &mut Html, selector: &Selector, predicate: F)
where
    F: Fn(&ElementRef<'_>) -> bool,
{
    // Select from the root element so already detached subtrees are skipped.
    let ids: Vec<_> = document
        .root_element()
        .select(selector)
        .filter(|element| predicate(element))
        .map(|element| element.id())
        .collect();

    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Trimmed text nodes joined by single spaces
fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_noise(text: &str, patterns: &[Regex]) -> String {
    let mut cleaned = text.to_string();
    for pattern in patterns {
        cleaned = pattern.replace_all(&cleaned, "").into_owned();
    }
    collapse_whitespace(&cleaned)
}
