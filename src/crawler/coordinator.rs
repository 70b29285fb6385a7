//! Crawl coordinator
//!
//! Drives one crawl invocation: pops frontier URLs in FIFO order, fetches and
//! extracts one page at a time, enqueues newly discovered same-origin links,
//! and hands the accumulated pages to the aggregator. Per-page failures are
//! logged and skipped; only a bad seed URL aborts the crawl.

use crate::config::CrawlerConfig;
use crate::content::{PageContent, WebsiteContent};
use crate::crawler::aggregator::aggregate;
use crate::crawler::extractor::extract_page;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::scheduler::Frontier;
use crate::url::site_root;
use crate::GleanError;
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// Crawls websites into brand profiles
///
/// Holds only the configuration and the shared HTTP client; every call to
/// [`Coordinator::crawl`] builds its own frontier and visited set, so one
/// coordinator can serve concurrent crawls.
pub struct Coordinator {
    config: CrawlerConfig,
    client: Client,
}

impl Coordinator {
    pub fn new(config: CrawlerConfig) -> Result<Self, GleanError> {
        let client = build_http_client(&config)?;
        Ok(Self { config, client })
    }

    /// Crawls the site rooted at `seed_url` and returns its brand profile
    ///
    /// A site that is unreachable or entirely malformed yields a valid but
    /// empty profile rather than an error.
    pub async fn crawl(&self, seed_url: &str) -> Result<WebsiteContent, GleanError> {
        let seed = Url::parse(seed_url).map_err(|source| GleanError::InvalidSeed {
            url: seed_url.to_string(),
            source,
        })?;
        let base_url = site_root(&seed).ok_or_else(|| GleanError::SeedMissingHost {
            url: seed_url.to_string(),
        })?;

        tracing::info!(
            "Starting crawl of {} (page cap {})",
            base_url,
            self.config.max_pages
        );
        let start = Instant::now();

        let pages = self.collect_pages(seed, &base_url).await;

        tracing::info!(
            "Crawl of {} finished: {} pages in {:?}",
            base_url,
            pages.len(),
            start.elapsed()
        );

        Ok(aggregate(&base_url, pages))
    }

    /// Runs the frontier loop until the queue empties or the page cap is hit
    ///
    /// The cap counts successfully extracted pages, not fetch attempts: a
    /// crawl hitting many failures may issue more than `max_pages` fetches.
    async fn collect_pages(&self, seed: Url, base_url: &str) -> Vec<PageContent> {
        let mut frontier = Frontier::seeded(seed.to_string());
        let mut pages: Vec<PageContent> = Vec::new();

        while pages.len() < self.config.max_pages {
            let Some(url) = frontier.pop() else {
                break;
            };
            if !frontier.mark_visited(&url) {
                continue;
            }

            // Frontier entries come from Url::join output plus the seed, so
            // this re-parse only fails if something fed the queue by hand
            let page_url = match Url::parse(&url) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::debug!("Dropping unparseable frontier URL {}: {}", url, e);
                    continue;
                }
            };

            let body = match fetch_page(&self.client, &url).await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!("Skipping page: {}", e);
                    continue;
                }
            };

            let Some(page) = extract_page(&page_url, &body, base_url) else {
                tracing::warn!("Skipping {}: could not extract content", url);
                continue;
            };

            tracing::debug!(
                "Extracted {}: {} headings, {} paragraphs, {} links ({} queued)",
                url,
                page.headings.len(),
                page.paragraphs.len(),
                page.links.len(),
                frontier.len()
            );

            for link in &page.links {
                frontier.enqueue(link);
            }
            pages.push(page);
        }

        pages
    }
}

/// Crawls a site with the given configuration
///
/// Convenience wrapper for one-off crawls; construct a [`Coordinator`] to
/// reuse the HTTP client across several.
pub async fn crawl_site(
    seed_url: &str,
    config: CrawlerConfig,
) -> Result<WebsiteContent, GleanError> {
    Coordinator::new(config)?.crawl(seed_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinator_creation() {
        assert!(Coordinator::new(CrawlerConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_seed_is_rejected() {
        let coordinator = Coordinator::new(CrawlerConfig::default()).unwrap();
        let err = coordinator.crawl("not a url").await.unwrap_err();
        assert!(matches!(err, GleanError::InvalidSeed { .. }));
    }

    #[tokio::test]
    async fn test_hostless_seed_is_rejected() {
        let coordinator = Coordinator::new(CrawlerConfig::default()).unwrap();
        let err = coordinator.crawl("data:text/html,hello").await.unwrap_err();
        assert!(matches!(err, GleanError::SeedMissingHost { .. }));
    }
}
