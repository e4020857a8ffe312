use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MatterStatusDecision;

use super::Person;

/// A tracked legislative item (ordinance, appointment, resolution) that a
/// minutes item may reference. `name` is the concise identifier, `title` the
/// descriptive text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Matter {
    pub name: String,
    pub title: Option<String>,
    pub matter_type: Option<String>,
    pub result_status: Option<MatterStatusDecision>,
    pub sponsors: Vec<Person>,
    pub external_source_id: Option<String>,
}
