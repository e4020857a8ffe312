use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One sitting of an event, usually with a video recording. Multi-session
/// events get one `Session` per discovered recording.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Session {
    pub session_datetime: Option<DateTime<Utc>>,
    pub session_index: u32,
    pub video_uri: Option<String>,
    pub caption_uri: Option<String>,
}

/// A video/caption URI pair discovered for an event, before it is turned
/// into a [`Session`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContentUris {
    pub video_uri: Option<String>,
    pub caption_uri: Option<String>,
}
