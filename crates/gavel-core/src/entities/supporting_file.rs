use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An attachment on a minutes item, e.g. a PDF of the ordinance text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SupportingFile {
    pub name: Option<String>,
    pub uri: String,
    pub external_source_id: Option<String>,
}
