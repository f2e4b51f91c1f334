/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog entries with sensible defaults
use brick_checklist_lib::modules::catalog::RawComponentEntry;

pub struct EntryFactory {
    component_id: String,
    variant_id: String,
    name: Option<String>,
    variant_name: String,
    image_url: Option<String>,
    quantity: u32,
    is_spare: bool,
}

impl EntryFactory {
    pub fn new(component_id: &str, variant_id: &str) -> Self {
        Self {
            component_id: component_id.to_string(),
            variant_id: variant_id.to_string(),
            name: None,
            variant_name: format!("Color {}", variant_id),
            image_url: Some(format!("https://cdn.test/parts/{}.png", component_id)),
            quantity: 1,
            is_spare: false,
        }
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn spare(mut self) -> Self {
        self.is_spare = true;
        self
    }

    pub fn build(self) -> RawComponentEntry {
        RawComponentEntry {
            name: self
                .name
                .unwrap_or_else(|| format!("Part {}", self.component_id)),
            component_id: self.component_id,
            variant_id: self.variant_id,
            variant_name: self.variant_name,
            image_url: self.image_url,
            quantity: self.quantity,
            is_spare: self.is_spare,
        }
    }
}

/// `count` distinct single-quantity entries, ids prefixed with `prefix`
pub fn distinct_entries(prefix: &str, count: usize) -> Vec<RawComponentEntry> {
    (0..count)
        .map(|i| EntryFactory::new(&format!("{}-{}", prefix, i), "0").build())
        .collect()
}
