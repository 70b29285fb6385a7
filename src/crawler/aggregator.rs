//! Content aggregator
//!
//! Pure reduction of the per-page extractions into one [`WebsiteContent`]
//! profile. The heuristics here (brand-name split, heading-pool slicing) are a
//! testable contract downstream consumers rely on; do not "improve" them.

use crate::content::{truncate_chars, PageContent, PageImage, WebsiteContent};
use std::collections::HashSet;

const MAX_PRODUCTS: usize = 5;
const MAX_FEATURES_END: usize = 10;
const MAX_SITE_IMAGES: usize = 10;
const TAGLINE_CHARS: usize = 150;

/// Aggregates per-page extractions into a single brand profile
///
/// Deterministic and free of I/O: the same ordered page list always yields
/// the same profile. An empty page list yields the all-empty profile.
pub fn aggregate(base_url: &str, pages: Vec<PageContent>) -> WebsiteContent {
    if pages.is_empty() {
        return WebsiteContent::empty(base_url);
    }

    let brand_name = brand_name_from_title(&pages[0].title);

    let description = pages
        .iter()
        .map(|page| page.description.as_str())
        .find(|d| !d.is_empty())
        .unwrap_or("")
        .to_string();

    // One ordered pool; products and features are disjoint slices of it
    let pool = unique_headings(&pages);
    let products_services: Vec<String> = pool.iter().take(MAX_PRODUCTS).cloned().collect();
    let key_features: Vec<String> = pool
        .get(MAX_PRODUCTS..pool.len().min(MAX_FEATURES_END))
        .unwrap_or(&[])
        .to_vec();

    let tagline = pages
        .iter()
        .flat_map(|page| page.paragraphs.iter())
        .next()
        .map(|p| truncate_chars(p, TAGLINE_CHARS))
        .unwrap_or_default();

    let images = dedup_images(&pages);
    let pages_crawled = pages.len();

    WebsiteContent {
        base_url: base_url.to_string(),
        brand_name,
        tagline,
        description,
        products_services,
        key_features,
        images,
        pages_crawled,
    }
}

/// Derives the brand name from a page title
///
/// Split on the first `|`, then split the left part on the first `-`, take
/// the first segment, trim. Handles titles like "Acme Co | Home" and
/// "Acme Co - Welcome".
pub fn brand_name_from_title(title: &str) -> String {
    title
        .split('|')
        .next()
        .unwrap_or("")
        .split('-')
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Concatenates all pages' headings, de-duplicated with first occurrence kept
fn unique_headings(pages: &[PageContent]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for page in pages {
        for heading in &page.headings {
            if seen.insert(heading.clone()) {
                pool.push(heading.clone());
            }
        }
    }
    pool
}

/// Site-wide image list, de-duplicated by URL (first occurrence wins)
fn dedup_images(pages: &[PageContent]) -> Vec<PageImage> {
    let mut seen = HashSet::new();
    let mut images = Vec::new();
    for page in pages {
        for image in &page.images {
            if images.len() == MAX_SITE_IMAGES {
                return images;
            }
            if seen.insert(image.url.clone()) {
                images.push(image.clone());
            }
        }
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str) -> PageContent {
        PageContent {
            url: url.to_string(),
            title: String::new(),
            description: String::new(),
            headings: Vec::new(),
            paragraphs: Vec::new(),
            images: Vec::new(),
            links: Vec::new(),
        }
    }

    #[test]
    fn test_empty_pages_yield_empty_profile() {
        let profile = aggregate("https://acme.com", Vec::new());
        assert_eq!(profile, WebsiteContent::empty("https://acme.com"));
    }

    #[test]
    fn test_brand_name_pipe_separator() {
        assert_eq!(brand_name_from_title("Acme Co | Home"), "Acme Co");
    }

    #[test]
    fn test_brand_name_dash_separator() {
        assert_eq!(brand_name_from_title("Acme Co - Welcome Page"), "Acme Co");
    }

    #[test]
    fn test_brand_name_pipe_before_dash() {
        assert_eq!(brand_name_from_title("Acme Co - Tools | Shop"), "Acme Co");
    }

    #[test]
    fn test_brand_name_plain_title() {
        assert_eq!(brand_name_from_title("  Acme Co  "), "Acme Co");
    }

    #[test]
    fn test_brand_name_empty_title() {
        assert_eq!(brand_name_from_title(""), "");
    }

    #[test]
    fn test_brand_name_taken_from_first_page_only() {
        let mut first = page("https://acme.com/");
        first.title = "Acme Co | Home".to_string();
        let mut second = page("https://acme.com/about");
        second.title = "Other Name | About".to_string();

        let profile = aggregate("https://acme.com", vec![first, second]);
        assert_eq!(profile.brand_name, "Acme Co");
    }

    #[test]
    fn test_description_is_first_non_empty() {
        let first = page("https://acme.com/");
        let mut second = page("https://acme.com/about");
        second.description = "We make widgets.".to_string();
        let mut third = page("https://acme.com/contact");
        third.description = "Get in touch.".to_string();

        let profile = aggregate("https://acme.com", vec![first, second, third]);
        assert_eq!(profile.description, "We make widgets.");
    }

    #[test]
    fn test_heading_pool_split_is_disjoint() {
        let mut first = page("https://acme.com/");
        first.headings = (1..=6).map(|i| format!("Heading {i}")).collect();
        let mut second = page("https://acme.com/features");
        // "Heading 6" repeats and must not count twice
        second.headings = vec!["Heading 6".to_string(), "Heading 7".to_string(), "Heading 8".to_string()];

        let profile = aggregate("https://acme.com", vec![first, second]);
        assert_eq!(
            profile.products_services,
            vec!["Heading 1", "Heading 2", "Heading 3", "Heading 4", "Heading 5"]
        );
        assert_eq!(
            profile.key_features,
            vec!["Heading 6", "Heading 7", "Heading 8"]
        );
        for feature in &profile.key_features {
            assert!(!profile.products_services.contains(feature));
        }
    }

    #[test]
    fn test_few_headings_leave_features_empty() {
        let mut only = page("https://acme.com/");
        only.headings = vec!["Widgets".to_string(), "Gadgets".to_string()];

        let profile = aggregate("https://acme.com", vec![only]);
        assert_eq!(profile.products_services, vec!["Widgets", "Gadgets"]);
        assert!(profile.key_features.is_empty());
    }

    #[test]
    fn test_tagline_is_first_paragraph_truncated() {
        let long = "a".repeat(200);
        let mut first = page("https://acme.com/");
        first.paragraphs = vec![long.clone(), "b".repeat(60)];

        let profile = aggregate("https://acme.com", vec![first]);
        assert_eq!(profile.tagline, "a".repeat(150));
    }

    #[test]
    fn test_tagline_empty_without_paragraphs() {
        let profile = aggregate("https://acme.com", vec![page("https://acme.com/")]);
        assert_eq!(profile.tagline, "");
    }

    #[test]
    fn test_images_deduped_first_alt_wins_and_capped() {
        let mut first = page("https://acme.com/");
        first.images = vec![
            PageImage {
                url: "https://acme.com/hero.jpg".to_string(),
                alt: "Hero shot".to_string(),
            },
        ];
        let mut second = page("https://acme.com/about");
        second.images = (0..12)
            .map(|i| PageImage {
                url: format!("https://acme.com/img{i}.jpg"),
                alt: String::new(),
            })
            .collect();
        second.images.push(PageImage {
            url: "https://acme.com/hero.jpg".to_string(),
            alt: "Different alt".to_string(),
        });

        let profile = aggregate("https://acme.com", vec![first, second]);
        assert_eq!(profile.images.len(), 10);
        assert_eq!(profile.images[0].alt, "Hero shot");
        assert_eq!(
            profile.images.iter().filter(|i| i.url == "https://acme.com/hero.jpg").count(),
            1
        );
    }

    #[test]
    fn test_pages_crawled_matches_input_length() {
        let pages = vec![page("https://acme.com/"), page("https://acme.com/a")];
        let profile = aggregate("https://acme.com", pages);
        assert_eq!(profile.pages_crawled, 2);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let mut first = page("https://acme.com/");
        first.title = "Acme Co | Home".to_string();
        first.headings = vec!["Widgets".to_string(), "Gadgets".to_string()];
        first.paragraphs = vec!["p".repeat(60)];
        first.images = vec![PageImage {
            url: "https://acme.com/hero.jpg".to_string(),
            alt: String::new(),
        }];

        let pages = vec![first];
        let once = aggregate("https://acme.com", pages.clone());
        let twice = aggregate("https://acme.com", pages);
        assert_eq!(once, twice);
    }
}
