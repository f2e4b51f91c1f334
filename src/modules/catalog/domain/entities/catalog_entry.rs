use serde::{Deserialize, Serialize};

/// One row of a set's component listing, as delivered by the catalog.
///
/// The same `(component_id, variant_id)` pair may appear several times in a
/// listing (sub-assemblies, spares); aggregation happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawComponentEntry {
    pub component_id: String,
    pub variant_id: String,
    pub name: String,
    pub variant_name: String,
    pub image_url: Option<String>,
    pub quantity: u32,
    pub is_spare: bool,
}

/// Set-level metadata shown above the checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMeta {
    pub display_name: String,
    pub year: Option<i32>,
    pub image_url: Option<String>,
    pub part_count: Option<u32>,
}

impl SetMeta {
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            year: None,
            image_url: None,
            part_count: None,
        }
    }
}

/// A single page of the component listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentPage {
    pub entries: Vec<RawComponentEntry>,
    /// The catalog signalled a further page (`next` cursor present)
    pub has_next: bool,
}
