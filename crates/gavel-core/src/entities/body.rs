use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A governing body: the full council, or a committee with the full council
/// as its parent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Body {
    pub name: String,
    pub parent: Option<Box<Body>>,
    pub is_active: bool,
    pub external_source_id: Option<String>,
}

impl Body {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            is_active: true,
            external_source_id: None,
        }
    }
}
