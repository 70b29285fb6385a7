//! Page extractor
//!
//! Turns fetched markup into a structured [`PageContent`]. Navigation chrome
//! (script/style/nav/footer/header subtrees) is excluded so menus and
//! boilerplate do not pollute headings, paragraphs, or links.

use crate::content::{PageContent, PageImage};
use scraper::{ElementRef, Html, Selector};
use url::Url;

const MAX_PARAGRAPHS: usize = 10;
const MAX_IMAGES: usize = 20;
const MAX_LINKS: usize = 20;

const MIN_HEADING_CHARS: usize = 3;
const MIN_PARAGRAPH_CHARS: usize = 50;

/// Elements whose subtrees never contribute page content
const CHROME_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// URL substrings that mark an image as noise regardless of extension
const IMAGE_BLOCKLIST: [&str; 7] = [
    "icon", "logo", "favicon", "tracking", "pixel", "1x1", "spacer",
];

const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

/// Extracts structured content from one page of HTML
///
/// `base_url` is the site root of the seed; only links starting with it are
/// collected, so the frontier never receives off-origin candidates. Returns
/// `None` when the document cannot be processed, which the crawl loop treats
/// the same as a fetch failure.
pub fn extract_page(page_url: &Url, html: &str, base_url: &str) -> Option<PageContent> {
    let document = Html::parse_document(html);

    let title_sel = Selector::parse("title").ok()?;
    let meta_sel = Selector::parse(r#"meta[name="description"]"#).ok()?;
    let heading_sel = Selector::parse("h1, h2, h3").ok()?;
    let paragraph_sel = Selector::parse("p").ok()?;
    let image_sel = Selector::parse("img").ok()?;
    let anchor_sel = Selector::parse("a[href]").ok()?;

    let title = document
        .select(&title_sel)
        .next()
        .map(|el| element_text(&el))
        .unwrap_or_default();

    let description = document
        .select(&meta_sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let mut headings = Vec::new();
    for el in document.select(&heading_sel) {
        if inside_chrome(&el) {
            continue;
        }
        let text = element_text(&el);
        if text.chars().count() > MIN_HEADING_CHARS {
            headings.push(text);
        }
    }

    let mut paragraphs = Vec::new();
    for el in document.select(&paragraph_sel) {
        if paragraphs.len() == MAX_PARAGRAPHS {
            break;
        }
        if inside_chrome(&el) {
            continue;
        }
        let text = element_text(&el);
        if text.chars().count() > MIN_PARAGRAPH_CHARS {
            paragraphs.push(text);
        }
    }

    let mut images = Vec::new();
    for el in document.select(&image_sel) {
        if images.len() == MAX_IMAGES {
            break;
        }
        if inside_chrome(&el) {
            continue;
        }
        let src = el.value().attr("src").unwrap_or("").trim();
        if src.is_empty() {
            continue;
        }
        let Ok(absolute) = page_url.join(src) else {
            continue;
        };
        if is_valid_image(absolute.as_str()) {
            images.push(PageImage {
                url: absolute.to_string(),
                alt: el.value().attr("alt").unwrap_or("").trim().to_string(),
            });
        }
    }

    let mut links: Vec<String> = Vec::new();
    for el in document.select(&anchor_sel) {
        if links.len() == MAX_LINKS {
            break;
        }
        if inside_chrome(&el) {
            continue;
        }
        let href = el.value().attr("href").unwrap_or("");
        let Ok(absolute) = page_url.join(href) else {
            continue;
        };
        let absolute = absolute.to_string();
        if absolute.starts_with(base_url) && !links.contains(&absolute) {
            links.push(absolute);
        }
    }

    Some(PageContent {
        url: page_url.to_string(),
        title,
        description,
        headings,
        paragraphs,
        images,
        links,
    })
}

/// Decides whether an image URL points at real page imagery
///
/// The blocklist is checked first and unconditionally: a logo with a valid
/// extension is still rejected. Everything else passes on a known image
/// extension or the substring `image`.
pub fn is_valid_image(url: &str) -> bool {
    let lower = url.to_lowercase();

    if IMAGE_BLOCKLIST.iter().any(|pattern| lower.contains(pattern)) {
        return false;
    }

    IMAGE_EXTENSIONS.iter().any(|ext| lower.contains(ext)) || lower.contains("image")
}

/// True when the element sits inside a chrome subtree
fn inside_chrome(element: &ElementRef) -> bool {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| CHROME_TAGS.contains(&ancestor.value().name()))
}

/// Collects an element's text with whitespace collapsed to single spaces
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
