use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Body;

/// One term a person served on a body. `end` is absent while the term is
/// ongoing. A person's roles are kept sorted ascending by `start`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Role {
    pub title: String,
    pub body: Option<Body>,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
    pub external_source_id: Option<String>,
}
