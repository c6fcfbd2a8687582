//! Key entities.

use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyEntity {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub entity_type: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub source_refs: Vec<String>,
}

impl KeyEntity {
    /// Identity used when comparing versions: `name::type`.
    pub fn key(&self) -> String {
        format!("{}::{}", self.name, self.entity_type)
    }
}
