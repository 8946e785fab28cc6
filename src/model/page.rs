// src/model/page.rs
use crate::types::NotionId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A page as returned by the pages and database-query endpoints.
///
/// Properties stay an open JSON map: the exporter only reads a handful of
/// named entries and every other field is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: NotionId,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl PageRecord {
    pub fn new(id: NotionId) -> Self {
        Self {
            id,
            properties: Map::new(),
        }
    }

    pub fn with_property(mut self, name: &str, value: Value) -> Self {
        self.properties.insert(name.to_string(), value);
        self
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}
