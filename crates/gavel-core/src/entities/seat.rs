use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An electoral seat a councilmember occupies. Looked up by name in static
/// reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub electoral_area: Option<String>,
    pub image_uri: Option<String>,
}

impl Seat {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            electoral_area: None,
            image_uri: None,
        }
    }
}
