use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One agenda/discussion entry within a meeting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MinutesItem {
    pub name: String,
    pub description: Option<String>,
    pub external_source_id: Option<String>,
}

impl MinutesItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            external_source_id: None,
        }
    }
}
