use serde::{Deserialize, Serialize};

use super::ComponentKey;
use crate::modules::checklist::domain::entities::ComponentRecord;

/// Collected vs. required totals for the whole set
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistProgress {
    pub collected: u64,
    pub required: u64,
    pub percent: f64,
}

impl ChecklistProgress {
    pub fn new(collected: u64, required: u64) -> Self {
        let percent = if required > 0 {
            collected as f64 / required as f64 * 100.0
        } else {
            0.0
        };
        Self {
            collected,
            required,
            percent,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.required > 0 && self.collected >= self.required
    }
}

/// One checklist row: a component joined with its collected count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProgress {
    pub key: ComponentKey,
    pub name: String,
    pub variant_name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub collected: u32,
    pub is_complete: bool,
}

impl ComponentProgress {
    pub fn from_record(record: &ComponentRecord, collected: u32) -> Self {
        Self {
            key: record.key(),
            name: record.name.clone(),
            variant_name: record.variant_name.clone(),
            image_url: record.image_url.clone(),
            quantity: record.quantity,
            collected,
            is_complete: collected == record.quantity,
        }
    }
}
