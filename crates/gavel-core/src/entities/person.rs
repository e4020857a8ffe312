use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Role, Seat};

/// A councilmember or other participant. `name` is the unique key static
/// reference data is matched on. Roles are assumed chronologically
/// non-overlapping by downstream consumers; the store does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub seat: Option<Seat>,
    pub roles: Vec<Role>,
    pub picture_uri: Option<String>,
    pub is_active: bool,
    pub external_source_id: Option<String>,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            phone: None,
            website: None,
            seat: None,
            roles: Vec::new(),
            picture_uri: None,
            is_active: true,
            external_source_id: None,
        }
    }
}
