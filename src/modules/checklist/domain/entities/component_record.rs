use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::RawComponentEntry;
use crate::modules::checklist::domain::value_objects::ComponentKey;

/// A distinct component of a set with its total required quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub component_id: String,
    pub variant_id: String,
    pub name: String,
    pub variant_name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl ComponentRecord {
    pub fn key(&self) -> ComponentKey {
        ComponentKey::new(self.component_id.clone(), self.variant_id.clone())
    }

    pub fn matches(&self, key: &ComponentKey) -> bool {
        self.component_id == key.component_id && self.variant_id == key.variant_id
    }

    /// Same descriptive fields as `entry` (quantity aside)
    pub fn describes(&self, entry: &RawComponentEntry) -> bool {
        self.name == entry.name
            && self.variant_name == entry.variant_name
            && self.image_url == entry.image_url
    }
}

impl From<RawComponentEntry> for ComponentRecord {
    fn from(entry: RawComponentEntry) -> Self {
        Self {
            component_id: entry.component_id,
            variant_id: entry.variant_id,
            name: entry.name,
            variant_name: entry.variant_name,
            image_url: entry.image_url,
            quantity: entry.quantity,
        }
    }
}
