use super::models::{SetDetails, SetPart, SetPartsResponse};
use crate::modules::catalog::domain::{ComponentPage, RawComponentEntry, SetMeta};

/// Maps Rebrickable DTOs onto catalog domain entities
#[derive(Debug, Default, Clone, Copy)]
pub struct RebrickableMapper;

impl RebrickableMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn map_set_meta(&self, details: SetDetails) -> SetMeta {
        SetMeta {
            display_name: details.name,
            year: details.year,
            image_url: details.set_img_url.filter(|url| !url.is_empty()),
            part_count: details.num_parts,
        }
    }

    pub fn map_entry(&self, row: SetPart) -> RawComponentEntry {
        RawComponentEntry {
            component_id: row.part.part_num,
            variant_id: row.color.id.to_string(),
            name: row.part.name,
            variant_name: row.color.name,
            image_url: row.part.part_img_url.filter(|url| !url.is_empty()),
            quantity: row.quantity,
            is_spare: row.is_spare,
        }
    }

    pub fn map_page(&self, response: SetPartsResponse) -> ComponentPage {
        ComponentPage {
            has_next: response.next.is_some(),
            entries: response
                .results
                .into_iter()
                .map(|row| self.map_entry(row))
                .collect(),
        }
    }
}
