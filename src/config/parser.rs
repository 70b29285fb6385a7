use crate::config::types::Config;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use siteglean::config::load_config;
///
/// let config = load_config(Path::new("siteglean.toml")).unwrap();
/// println!("Page cap: {}", config.crawler.max_pages);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

/// Validates a parsed configuration
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.crawler.max_pages == 0 {
        return Err(ConfigError::Validation(
            "crawler.max-pages must be at least 1".to_string(),
        ));
    }

    if config.crawler.fetch_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "crawler.fetch-timeout-secs must be at least 1".to_string(),
        ));
    }

    if config.crawler.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler.user-agent must not be empty".to_string(),
        ));
    }

    Ok(())
}
