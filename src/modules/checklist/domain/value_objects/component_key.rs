use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a component within a set: part number plus color/material variant
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentKey {
    pub component_id: String,
    pub variant_id: String,
}

impl ComponentKey {
    pub fn new(component_id: impl Into<String>, variant_id: impl Into<String>) -> Self {
        Self {
            component_id: component_id.into(),
            variant_id: variant_id.into(),
        }
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.component_id, self.variant_id)
    }
}
