use serde::{Deserialize, Serialize};

use super::ComponentRecord;
use crate::modules::catalog::domain::SetIdentifier;
use crate::modules::checklist::domain::value_objects::ComponentKey;

/// Result of one successful load: the set and its aggregated components.
///
/// A new summary always replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSummary {
    pub identifier: SetIdentifier,
    pub display_name: String,
    pub components: Vec<ComponentRecord>,
}

impl SetSummary {
    pub fn new(
        identifier: SetIdentifier,
        display_name: String,
        components: Vec<ComponentRecord>,
    ) -> Self {
        Self {
            identifier,
            display_name,
            components,
        }
    }

    pub fn find(&self, key: &ComponentKey) -> Option<&ComponentRecord> {
        self.components.iter().find(|record| record.matches(key))
    }

    /// Sum of every component's required quantity
    pub fn total_quantity(&self) -> u64 {
        self.components.iter().map(|c| c.quantity as u64).sum()
    }
}
