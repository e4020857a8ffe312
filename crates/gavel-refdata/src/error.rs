//! Static reference data error types.

use thiserror::Error;

/// Errors raised while loading a static reference file.
///
/// The integrity variants (`Duplicate`, `UnknownSeat`, `UnknownBody`,
/// `UnknownRoleTitle`) indicate a maintenance error in the reference file
/// and are fatal at load time. Merge logic downstream assumes the tables
/// are referentially sound.
#[derive(Debug, Error)]
pub enum StaticDataError {
    /// A lookup table key appears more than once.
    #[error("duplicate {section} entry: '{key}'")]
    Duplicate { section: &'static str, key: String },

    /// A person references a seat name missing from the `seats` table.
    #[error("person '{person}' references seat '{seat}' not defined in top-level 'seats'")]
    UnknownSeat { person: String, seat: String },

    /// A role references a body name missing from the `primary_bodies` table.
    #[error(
        "person '{person}' has a role on body '{body}' not defined in top-level 'primary_bodies'"
    )]
    UnknownBody { person: String, body: String },

    /// A role title is not one of the allowed standardized titles.
    #[error("person '{person}' has a role with unrecognized title '{title}'")]
    UnknownRoleTitle { person: String, title: String },

    /// A role timestamp is outside the representable range.
    #[error("person '{person}' has a role with unrepresentable timestamp {value}")]
    InvalidTimestamp { person: String, value: i64 },

    /// The document is not well-formed JSON or a field has the wrong shape.
    #[error("static data parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The reference file could not be read.
    #[error("static data file error: {0}")]
    Io(#[from] std::io::Error),
}
