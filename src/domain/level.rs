//! Level data: cell lists supplied by the external level-loading layer.
//!
//! The grid consumes a flat list of `{x, y, type, color?}` entries. Unknown
//! type names degrade to `empty` with a warning instead of failing the whole
//! load, so levels written against newer material sets still open.

use serde::{Deserialize, Deserializer, Serialize};

use super::cell::CellType;

/// One cell placement in a level file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSpec {
    pub x: i32,
    pub y: i32,
    #[serde(rename = "type", deserialize_with = "cell_type_lenient")]
    pub cell_type: CellType,
    /// Packed ABGR; the material default is used when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
}

/// A complete level cell list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub cells: Vec<CellSpec>,
}

impl LevelData {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}

fn cell_type_lenient<'de, D>(deserializer: D) -> Result<CellType, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    match serde_json::from_value(serde_json::Value::String(name.clone())) {
        Ok(t) => Ok(t),
        Err(_) => {
            log::warn!("unknown cell type '{name}' in level data, defaulting to empty");
            Ok(CellType::Empty)
        }
    }
}
