//! # gavel-refdata
//!
//! Operator-curated static reference data for Gavel scrapers.
//!
//! Municipality feeds are noisy and incomplete, so each deployment ships a
//! hand-maintained JSON file of known seats, primary governing bodies, and
//! councilmembers with their historical terms. This crate loads that file
//! into an immutable [`StaticDataSet`] whose values always take precedence
//! over scraped data in the normalization pipeline.
//!
//! Loading is strict: duplicate names, dangling seat/body references, and
//! unrecognized role titles fail immediately with a [`StaticDataError`]
//! rather than being skipped, since a broken reference file silently
//! corrupts every later merge.

mod error;
pub mod raw;

pub use error::StaticDataError;

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use gavel_core::entities::{Body, Person, Role, Seat};
use gavel_core::enums::RoleTitle;

use raw::{RawBodyRef, RawPerson, RawRole, RawStaticDoc};

/// The three lookup tables from a static reference file. Built once per
/// scrape run and read-only afterwards; share by reference across threads.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSet {
    pub seats: BTreeMap<String, Seat>,
    pub primary_bodies: BTreeMap<String, Body>,
    pub persons: BTreeMap<String, Person>,
}

impl StaticDataSet {
    /// Read and validate a static reference file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StaticDataError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a static reference document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, StaticDataError> {
        let doc: RawStaticDoc = serde_json::from_str(json)?;
        Self::from_document(doc)
    }

    /// Validate a raw document into lookup tables.
    ///
    /// Fails on the first integrity violation: a duplicate key in any
    /// section, a person whose seat is not in `seats`, a role whose body
    /// name is not in `primary_bodies`, or a role title outside the
    /// [`RoleTitle`] constants.
    pub fn from_document(doc: RawStaticDoc) -> Result<Self, StaticDataError> {
        let mut seats = BTreeMap::new();
        for (name, raw) in doc.seats.0 {
            let seat = Seat {
                name: name.clone(),
                electoral_area: raw.electoral_area,
                image_uri: raw.image_uri,
            };
            if seats.insert(name.clone(), seat).is_some() {
                return Err(StaticDataError::Duplicate {
                    section: "seats",
                    key: name,
                });
            }
        }

        let mut primary_bodies = BTreeMap::new();
        for (name, raw) in doc.primary_bodies.0 {
            let body = Body {
                name: name.clone(),
                parent: None,
                is_active: raw.is_active,
                external_source_id: raw.external_source_id,
            };
            if primary_bodies.insert(name.clone(), body).is_some() {
                return Err(StaticDataError::Duplicate {
                    section: "primary_bodies",
                    key: name,
                });
            }
        }

        let mut persons = BTreeMap::new();
        for (name, raw) in doc.persons.0 {
            let person = build_person(&name, raw, &seats, &primary_bodies)?;
            if persons.insert(name.clone(), person).is_some() {
                return Err(StaticDataError::Duplicate {
                    section: "persons",
                    key: name,
                });
            }
        }

        debug!(
            seats = seats.len(),
            primary_bodies = primary_bodies.len(),
            persons = persons.len(),
            "static reference data loaded"
        );

        Ok(Self {
            seats,
            primary_bodies,
            persons,
        })
    }

    /// Look up a person by the name scraping produced.
    #[must_use]
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.persons.get(name)
    }

    /// True when the file defines no primary bodies at all, in which case
    /// the role sanitizer falls back to common council names.
    #[must_use]
    pub fn has_primary_bodies(&self) -> bool {
        !self.primary_bodies.is_empty()
    }
}

fn build_person(
    name: &str,
    raw: RawPerson,
    seats: &BTreeMap<String, Seat>,
    primary_bodies: &BTreeMap<String, Body>,
) -> Result<Person, StaticDataError> {
    debug!(person = name, "parsing static person");

    let seat = match raw.seat {
        None => None,
        Some(seat_name) => match seats.get(&seat_name) {
            Some(seat) => Some(seat.clone()),
            None => {
                return Err(StaticDataError::UnknownSeat {
                    person: name.to_string(),
                    seat: seat_name,
                });
            }
        },
    };

    let mut roles = Vec::with_capacity(raw.roles.len());
    for raw_role in raw.roles {
        roles.push(build_role(name, raw_role, primary_bodies)?);
    }

    Ok(Person {
        name: name.to_string(),
        email: raw.email,
        phone: raw.phone,
        website: raw.website,
        seat,
        roles,
        picture_uri: raw.picture_uri,
        is_active: raw.is_active,
        external_source_id: raw.external_source_id,
    })
}

fn build_role(
    person: &str,
    raw: RawRole,
    primary_bodies: &BTreeMap<String, Body>,
) -> Result<Role, StaticDataError> {
    if RoleTitle::parse(&raw.title).is_none() {
        return Err(StaticDataError::UnknownRoleTitle {
            person: person.to_string(),
            title: raw.title,
        });
    }

    let body = match raw.body {
        RawBodyRef::Name(body_name) => match primary_bodies.get(&body_name) {
            Some(body) => body.clone(),
            None => {
                return Err(StaticDataError::UnknownBody {
                    person: person.to_string(),
                    body: body_name,
                });
            }
        },
        RawBodyRef::Inline(inline) => Body {
            name: inline.name,
            parent: None,
            is_active: inline.is_active,
            external_source_id: inline.external_source_id,
        },
    };

    let start = epoch_to_utc(person, raw.start_datetime)?;
    let end = raw.end_datetime.map(|secs| epoch_to_utc(person, secs)).transpose()?;

    Ok(Role {
        title: raw.title,
        body: Some(body),
        start,
        end,
        external_source_id: raw.external_source_id,
    })
}

fn epoch_to_utc(person: &str, secs: i64) -> Result<DateTime<Utc>, StaticDataError> {
    DateTime::from_timestamp(secs, 0).ok_or(StaticDataError::InvalidTimestamp {
        person: person.to_string(),
        value: secs,
    })
}
