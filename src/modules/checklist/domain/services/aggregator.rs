use std::collections::HashMap;

use crate::modules::catalog::domain::RawComponentEntry;
use crate::modules::checklist::domain::{entities::ComponentRecord, value_objects::ComponentKey};
use crate::shared::errors::{AppError, AppResult};

/// Collapse repeated `(component, variant)` rows into one record per identity.
///
/// Quantities of repeats are summed. Output order is the order in which each
/// identity first appeared. Descriptive fields come from the first occurrence;
/// repeats that disagree are logged and otherwise ignored.
pub fn aggregate(entries: Vec<RawComponentEntry>) -> AppResult<Vec<ComponentRecord>> {
    if entries.is_empty() {
        return Err(AppError::empty_set());
    }

    let mut records: Vec<ComponentRecord> = Vec::new();
    let mut index: HashMap<ComponentKey, usize> = HashMap::with_capacity(entries.len());

    for entry in entries {
        let key = ComponentKey::new(entry.component_id.clone(), entry.variant_id.clone());

        match index.get(&key) {
            Some(&position) => {
                let existing = &mut records[position];
                if !existing.describes(&entry) {
                    log::warn!(
                        "Component {} listed with differing details ('{}' vs '{}'); keeping the first",
                        key,
                        existing.name,
                        entry.name
                    );
                }
                existing.quantity = existing.quantity.saturating_add(entry.quantity);
            }
            None => {
                index.insert(key, records.len());
                records.push(ComponentRecord::from(entry));
            }
        }
    }

    log::debug!("Aggregated into {} distinct components", records.len());
    Ok(records)
}
