use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of marketing campaign being drafted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    Email,
    SocialMedia,
    Blog,
    AdCopy,
    LandingPage,
}

impl CampaignType {
    /// Human-readable form used in campaign names ("Social Media")
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::SocialMedia => "Social Media",
            Self::Blog => "Blog",
            Self::AdCopy => "Ad Copy",
            Self::LandingPage => "Landing Page",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::SocialMedia => "social_media",
            Self::Blog => "blog",
            Self::AdCopy => "ad_copy",
            Self::LandingPage => "landing_page",
        }
    }
}

impl fmt::Display for CampaignType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CampaignType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "social_media" => Ok(Self::SocialMedia),
            "blog" => Ok(Self::Blog),
            "ad_copy" => Ok(Self::AdCopy),
            "landing_page" => Ok(Self::LandingPage),
            other => Err(format!("unknown campaign type: {other}")),
        }
    }
}

/// Distribution platform a piece of campaign content targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Tiktok,
    GoogleAds,
    Email,
}

impl Platform {
    fn slug(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Tiktok => "tiktok",
            Self::GoogleAds => "google_ads",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(Self::Facebook),
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "tiktok" => Ok(Self::Tiktok),
            "google_ads" => Ok(Self::GoogleAds),
            "email" => Ok(Self::Email),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Generated copy for one platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignContent {
    pub platform: Platform,
    pub headline: String,
    pub body: String,
    pub hashtags: Vec<String>,
    pub call_to_action: String,
    pub image_suggestions: Vec<String>,
}

/// A full drafted campaign
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub campaign_type: CampaignType,
    pub target_audience: String,
    pub content: Vec<CampaignContent>,
    pub created_at: DateTime<Utc>,
}
