//! Marketing campaign layer
//!
//! Consumes the crawl's [`WebsiteContent`](crate::content::WebsiteContent)
//! profile without mutating it: a campaign model, template-based copy
//! generation, and an in-memory campaign store.

mod store;
mod template;
mod types;

pub use store::CampaignStore;
pub use template::generate_campaign;
pub use types::{Campaign, CampaignContent, CampaignType, Platform};
