//! Siteglean command-line entry point
//!
//! Crawls a website into a brand profile and optionally drafts marketing copy
//! from it.

use clap::Parser;
use siteglean::campaign::{generate_campaign, CampaignType, Platform};
use siteglean::config::{load_config, Config};
use siteglean::content::WebsiteContent;
use siteglean::crawler::Coordinator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Crawl a website into a brand profile
#[derive(Parser, Debug)]
#[command(name = "siteglean")]
#[command(version)]
#[command(about = "Crawl a website into a brand profile and draft marketing copy", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the page cap for this crawl
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Print the aggregated profile as JSON
    #[arg(long)]
    json: bool,

    /// Draft a campaign of this type from the profile
    /// (email, social_media, blog, ad_copy, landing_page)
    #[arg(long, value_name = "TYPE")]
    campaign: Option<CampaignType>,

    /// Platform to draft campaign content for; repeatable
    /// (facebook, instagram, twitter, linkedin, tiktok, google_ads, email)
    #[arg(long, value_name = "PLATFORM")]
    platform: Vec<Platform>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };
    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
    }

    let coordinator = Coordinator::new(config.crawler)?;
    let profile = coordinator.crawl(&cli.url).await?;

    if let Some(campaign_type) = cli.campaign {
        let platforms = if cli.platform.is_empty() {
            vec![Platform::Instagram, Platform::Twitter, Platform::Linkedin]
        } else {
            cli.platform.clone()
        };
        let campaign = generate_campaign(&profile, &platforms, campaign_type);
        println!("{}", serde_json::to_string_pretty(&campaign)?);
    } else if cli.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print_profile(&profile);
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("siteglean=info,warn"),
            1 => EnvFilter::new("siteglean=debug,info"),
            2 => EnvFilter::new("siteglean=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Prints a human-readable profile summary
fn print_profile(profile: &WebsiteContent) {
    println!("=== Brand Profile: {} ===\n", profile.base_url);
    println!("Brand name:  {}", profile.brand_name);
    println!("Tagline:     {}", profile.tagline);
    println!("Description: {}", profile.description);

    println!("\nProducts/Services ({}):", profile.products_services.len());
    for entry in &profile.products_services {
        println!("  - {entry}");
    }

    println!("\nKey Features ({}):", profile.key_features.len());
    for entry in &profile.key_features {
        println!("  - {entry}");
    }

    println!("\nImages ({}):", profile.images.len());
    for image in &profile.images {
        if image.alt.is_empty() {
            println!("  - {}", image.url);
        } else {
            println!("  - {} ({})", image.url, image.alt);
        }
    }

    println!("\nPages crawled: {}", profile.pages_crawled);
}
