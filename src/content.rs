//! Data model for extracted and aggregated website content
//!
//! [`PageContent`] is produced once per successfully parsed page and is never
//! mutated afterwards; [`WebsiteContent`] is the aggregate profile produced
//! once per crawl invocation and handed to the generation layer as a value.

use serde::{Deserialize, Serialize};

/// An image discovered on a crawled page
///
/// Both fields are always present; `alt` defaults to an empty string when the
/// markup carries no alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageImage {
    /// Absolute image URL
    pub url: String,

    /// Alt text, empty if the img element had none
    #[serde(default)]
    pub alt: String,
}

/// Structured content extracted from a single fetched page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// The URL this page was fetched from
    pub url: String,

    /// Page title text, may be empty
    pub title: String,

    /// Meta-description text, may be empty
    pub description: String,

    /// h1-h3 heading text in document order, each longer than 3 chars
    pub headings: Vec<String>,

    /// Body paragraphs longer than 50 chars, at most 10
    pub paragraphs: Vec<String>,

    /// Images passing the validity heuristic, at most 20
    pub images: Vec<PageImage>,

    /// Absolute same-origin links, de-duplicated within the page, at most 20
    pub links: Vec<String>,
}

/// Aggregated brand profile for one crawl invocation
///
/// All string fields may be empty and all lists may be empty; a crawl where
/// every fetch failed still yields a valid (all-empty) profile with
/// `pages_crawled == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteContent {
    /// Scheme + host (+ explicit port) of the seed URL
    pub base_url: String,

    /// Brand name derived from the first page title
    pub brand_name: String,

    /// First paragraph found anywhere on the site, truncated to 150 chars
    pub tagline: String,

    /// First non-empty meta description, in page order
    pub description: String,

    /// First 5 entries of the de-duplicated heading pool
    pub products_services: Vec<String>,

    /// Entries 6-10 of the same heading pool, disjoint from products
    pub key_features: Vec<String>,

    /// Site-wide images de-duplicated by URL, at most 10
    pub images: Vec<PageImage>,

    /// Number of successfully parsed pages
    pub pages_crawled: usize,
}

impl WebsiteContent {
    /// Builds the all-empty profile returned when no pages were parsed
    pub fn empty(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            brand_name: String::new(),
            tagline: String::new(),
            description: String::new(),
            products_services: Vec::new(),
            key_features: Vec::new(),
            images: Vec::new(),
            pages_crawled: 0,
        }
    }
}

/// Truncates a string to at most `max` characters, respecting char boundaries
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
