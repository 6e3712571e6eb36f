//! Serde model of the JSON level-pack document.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelPackFile {
    pub levels: Vec<LevelFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ASCII grid rows, one glyph per cell
    pub rows: Vec<String>,
    /// Keys required on the exit tiles
    #[serde(default)]
    pub goal: Option<Vec<KeyRef>>,
    /// Declared spawn `[x, y]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<[i32; 2]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_keys: Option<Vec<KeyRef>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pickups: Vec<PickupFile>,
}

/// A key written either by name (`"up"`) or by metadata code (`1`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyRef {
    Code(i64),
    Name(String),
}

/// A key stored in a pick-up tile when the level starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupFile {
    pub x: i32,
    pub y: i32,
    pub key: KeyRef,
}
