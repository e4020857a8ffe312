//! Entity structs for the event ingestion schema.
//!
//! These are the normalized records handed to the downstream civic-data
//! pipeline. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON roundtrip and schema generation. Emptiness semantics for each
//! type live in [`crate::reduce`], not here.

mod body;
mod event;
mod event_minutes_item;
mod matter;
mod minutes_item;
mod person;
mod role;
mod seat;
mod session;
mod supporting_file;
mod vote;

pub use body::Body;
pub use event::EventIngestionModel;
pub use event_minutes_item::EventMinutesItem;
pub use matter::Matter;
pub use minutes_item::MinutesItem;
pub use person::Person;
pub use role::Role;
pub use seat::Seat;
pub use session::{ContentUris, Session};
pub use supporting_file::SupportingFile;
pub use vote::Vote;
