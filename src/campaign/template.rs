//! Template-based campaign generation
//!
//! Drafts platform-specific marketing copy from a crawled brand profile
//! without calling any external generation provider. The profile is consumed
//! read-only; every run over the same profile produces the same copy (ids and
//! timestamps aside).

use crate::campaign::types::{Campaign, CampaignContent, CampaignType, Platform};
use crate::content::{truncate_chars, WebsiteContent};
use chrono::Utc;
use uuid::Uuid;

const FALLBACK_BRAND: &str = "Your Brand";
const FALLBACK_TAGLINE: &str = "Discover our amazing products";
const BODY_TAGLINE_CHARS: usize = 100;
const TWITTER_BODY_CHARS: usize = 200;

/// Drafts a campaign from a crawled brand profile
pub fn generate_campaign(
    site: &WebsiteContent,
    platforms: &[Platform],
    campaign_type: CampaignType,
) -> Campaign {
    let brand = if site.brand_name.is_empty() {
        FALLBACK_BRAND
    } else {
        site.brand_name.as_str()
    };
    let tagline = if site.tagline.is_empty() {
        FALLBACK_TAGLINE.to_string()
    } else {
        truncate_chars(&site.tagline, BODY_TAGLINE_CHARS)
    };

    let content = platforms
        .iter()
        .map(|&platform| platform_content(site, brand, &tagline, platform))
        .collect();

    Campaign {
        id: Uuid::new_v4(),
        name: format!("{} - {} Campaign", brand, campaign_type.display_name()),
        campaign_type,
        target_audience: target_audience(site),
        content,
        created_at: Utc::now(),
    }
}

fn platform_content(
    site: &WebsiteContent,
    brand: &str,
    tagline: &str,
    platform: Platform,
) -> CampaignContent {
    let headline = format!("Discover {brand} Today!");
    let mut body = format!(
        "{} Visit {} to learn more about what makes us special.",
        tagline, site.base_url
    );
    let mut hashtags = vec![
        format!("#{}", brand.replace(' ', "")),
        "#Marketing".to_string(),
        "#Discover".to_string(),
    ];
    let image_suggestions = vec![
        format!("Hero image showcasing {brand}"),
        "Product/service highlight".to_string(),
        "Customer testimonial visual".to_string(),
    ];

    match platform {
        Platform::Twitter => body = truncate_chars(&body, TWITTER_BODY_CHARS),
        Platform::Instagram => {
            hashtags.push("#InstaMarketing".to_string());
            hashtags.push("#BrandSpotlight".to_string());
        }
        Platform::Linkedin => {
            body = format!("Looking for professional solutions? {tagline}");
            hashtags = vec![
                "#Business".to_string(),
                "#Professional".to_string(),
                "#Innovation".to_string(),
            ];
        }
        _ => {}
    }

    CampaignContent {
        platform,
        headline,
        body,
        hashtags,
        call_to_action: "Visit Our Website".to_string(),
        image_suggestions,
    }
}

/// Audience line built from the first few products/services on the site
fn target_audience(site: &WebsiteContent) -> String {
    if site.products_services.is_empty() {
        return "General audience interested in our products".to_string();
    }
    let top: Vec<&str> = site
        .products_services
        .iter()
        .take(3)
        .map(String::as_str)
        .collect();
    format!("General audience interested in {}", top.join(", "))
}
