use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EventMinutesItemDecision;

use super::{Matter, MinutesItem, SupportingFile, Vote};

/// A minutes item as it occurred at a specific event: the item itself plus
/// the matter it references, the decision reached, and the recorded votes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventMinutesItem {
    pub index: Option<u32>,
    pub minutes_item: Option<MinutesItem>,
    pub matter: Option<Matter>,
    pub decision: Option<EventMinutesItemDecision>,
    pub votes: Vec<Vote>,
    pub supporting_files: Vec<SupportingFile>,
}
