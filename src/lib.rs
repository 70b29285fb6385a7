//! Siteglean: a website-to-brand-profile crawler
//!
//! This crate crawls a website breadth-first, extracts structured content from
//! each page, and aggregates everything into a single [`WebsiteContent`] brand
//! profile suitable for driving marketing-copy generation.

pub mod campaign;
pub mod config;
pub mod content;
pub mod crawler;
pub mod url;

use thiserror::Error;

/// Main error type for siteglean operations
///
/// Per-page fetch and extraction failures are recovered inside the crawl loop
/// and never surface here; a crawl only fails outright when it cannot start.
#[derive(Debug, Error)]
pub enum GleanError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid seed URL {url}: {source}")]
    InvalidSeed {
        url: String,
        source: ::url::ParseError,
    },

    #[error("Seed URL {url} has no host")]
    SeedMissingHost { url: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for siteglean operations
pub type Result<T> = std::result::Result<T, GleanError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, CrawlerConfig};
pub use content::{PageContent, PageImage, WebsiteContent};
pub use crawler::{crawl_site, Coordinator};
