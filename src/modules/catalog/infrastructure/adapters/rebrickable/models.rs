use serde::{Deserialize, Serialize};

// Response envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

pub type SetPartsResponse = PaginatedResponse<SetPart>;

// GET /lego/sets/{set_num}/
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetDetails {
    pub set_num: String,
    pub name: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub theme_id: Option<u32>,
    #[serde(default)]
    pub num_parts: Option<u32>,
    #[serde(default)]
    pub set_img_url: Option<String>,
    #[serde(default)]
    pub set_url: Option<String>,
    #[serde(default)]
    pub last_modified_dt: Option<String>,
}

// GET /lego/sets/{set_num}/parts/ result row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPart {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub inv_part_id: Option<u64>,
    pub part: Part,
    pub color: Color,
    #[serde(default)]
    pub set_num: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub is_spare: bool,
    #[serde(default)]
    pub element_id: Option<String>,
    #[serde(default)]
    pub num_sets: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub part_num: String,
    pub name: String,
    #[serde(default)]
    pub part_cat_id: Option<u32>,
    #[serde(default)]
    pub part_url: Option<String>,
    #[serde(default)]
    pub part_img_url: Option<String>,
    #[serde(default)]
    pub print_of: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub rgb: Option<String>,
    #[serde(default)]
    pub is_trans: Option<bool>,
}
