//! In-memory campaign store
//!
//! A plain keyed mapping from campaign id to campaign. No persistence; the
//! store lives as long as the process hosting it.

use crate::campaign::types::Campaign;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct CampaignStore {
    campaigns: HashMap<Uuid, Campaign>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a campaign under its own id, returning the id
    pub fn insert(&mut self, campaign: Campaign) -> Uuid {
        let id = campaign.id;
        self.campaigns.insert(id, campaign);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<&Campaign> {
        self.campaigns.get(id)
    }

    pub fn list(&self) -> Vec<&Campaign> {
        self.campaigns.values().collect()
    }

    /// Removes a campaign; returns false if the id was unknown
    pub fn delete(&mut self, id: &Uuid) -> bool {
        self.campaigns.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }
}
