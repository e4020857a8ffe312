use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::VoteDecision;

use super::Person;

/// One person's vote on a minutes item.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Vote {
    pub person: Option<Person>,
    pub decision: Option<VoteDecision>,
    pub external_source_id: Option<String>,
}
