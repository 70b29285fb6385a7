//! Configuration module
//!
//! Loads and validates TOML configuration files. Every field has a default,
//! so a config file is optional and may set only the keys it cares about.

mod parser;
mod types;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, DEFAULT_USER_AGENT};
