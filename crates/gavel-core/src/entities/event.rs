use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Body, EventMinutesItem, Session};

/// A full meeting event: the responsible body, its sessions, and every
/// meaningful minutes item, ready for the downstream ingestion pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EventIngestionModel {
    pub body: Option<Body>,
    pub sessions: Vec<Session>,
    pub event_minutes_items: Vec<EventMinutesItem>,
    pub agenda_uri: Option<String>,
    pub minutes_uri: Option<String>,
    pub external_source_id: Option<String>,
}
