//! Emptiness reduction for ingestion-model records.
//!
//! Municipality feeds deliver records with most fields blank. Each record
//! type declares a set of *meaning fields*; a record reduces to absent when,
//! after recursively reducing its nested records bottom-up, none of its
//! meaning fields holds a value. [`ReducerConfig`] carries the per-type
//! field sets, keyed by [`RecordKind`], with defaults callers may override
//! per deployment.
//!
//! Presence rules:
//! - strings count when non-empty
//! - optional scalars count when set
//! - required numerics always count, so they make poor meaning fields
//! - sequences count when non-empty after element reduction
//! - nested records count when they survive their own reduction
//!
//! Field names a type does not know never count as present.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    Body, EventIngestionModel, EventMinutesItem, Matter, MinutesItem, Person, Role, Seat, Session,
    SupportingFile, Vote,
};

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// Type tag identifying an ingestion-model record type, used to key
/// per-type reducer configuration.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Seat,
    Body,
    Role,
    Person,
    MinutesItem,
    Matter,
    SupportingFile,
    Vote,
    EventMinutesItem,
    Session,
    Event,
}

impl RecordKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seat => "seat",
            Self::Body => "body",
            Self::Role => "role",
            Self::Person => "person",
            Self::MinutesItem => "minutes_item",
            Self::Matter => "matter",
            Self::SupportingFile => "supporting_file",
            Self::Vote => "vote",
            Self::EventMinutesItem => "event_minutes_item",
            Self::Session => "session",
            Self::Event => "event",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReducerConfig
// ---------------------------------------------------------------------------

/// Built-in meaning fields per record type. A record with none of the listed
/// fields present carries no information worth ingesting.
const DEFAULT_MEANING_FIELDS: &[(RecordKind, &[&str])] = &[
    (RecordKind::Seat, &["name"]),
    (RecordKind::Body, &["name"]),
    (RecordKind::Role, &["title"]),
    (RecordKind::Person, &["name"]),
    (RecordKind::MinutesItem, &["name"]),
    (RecordKind::Matter, &["name", "title"]),
    (RecordKind::SupportingFile, &["uri"]),
    (RecordKind::Vote, &["person", "decision"]),
    (RecordKind::EventMinutesItem, &["minutes_item"]),
    (RecordKind::Session, &["session_datetime", "video_uri"]),
    (RecordKind::Event, &["body", "sessions"]),
];

/// Per-type meaning-field sets consulted by [`Reduce`] implementations.
///
/// Built once at configuration time and passed into the assembler; never
/// mutated during a scrape run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducerConfig {
    meaning_fields: BTreeMap<RecordKind, Vec<String>>,
}

impl ReducerConfig {
    /// Replace the meaning fields for one record type.
    ///
    /// The supplied set is exact, not merged with the default. Names the
    /// record type does not declare are permitted but never match.
    #[must_use]
    pub fn with_meaning_fields(mut self, kind: RecordKind, fields: &[&str]) -> Self {
        self.meaning_fields
            .insert(kind, fields.iter().map(ToString::to_string).collect());
        self
    }

    /// The meaning fields configured for `kind`.
    #[must_use]
    pub fn meaning_fields(&self, kind: RecordKind) -> &[String] {
        self.meaning_fields.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// True when any configured meaning field for `kind` reports present.
    fn any_present(&self, kind: RecordKind, is_present: impl Fn(&str) -> bool) -> bool {
        self.meaning_fields(kind)
            .iter()
            .any(|field| is_present(field))
    }
}

impl Default for ReducerConfig {
    fn default() -> Self {
        let meaning_fields = DEFAULT_MEANING_FIELDS
            .iter()
            .map(|(kind, fields)| (*kind, fields.iter().map(ToString::to_string).collect()))
            .collect();
        Self { meaning_fields }
    }
}

// ---------------------------------------------------------------------------
// Reduce
// ---------------------------------------------------------------------------

/// Bottom-up emptiness reduction.
///
/// Implementations first reduce nested record fields and sequences, then
/// evaluate their own meaning fields against the configuration. Reduction
/// is idempotent: reducing an already-reduced record changes nothing.
pub trait Reduce: Sized {
    /// Type tag under which this record's meaning fields are configured.
    const KIND: RecordKind;

    /// Prune nested records, then collapse to `None` when no meaning field
    /// is present.
    #[must_use]
    fn reduce(self, cfg: &ReducerConfig) -> Option<Self>;
}

/// Reduce every element of a sequence, dropping elements that reduce to
/// absent.
#[must_use]
pub fn reduce_vec<T: Reduce>(items: Vec<T>, cfg: &ReducerConfig) -> Vec<T> {
    items
        .into_iter()
        .filter_map(|item| item.reduce(cfg))
        .collect()
}

fn text_present(value: &str) -> bool {
    !value.is_empty()
}

fn opt_text_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Leaf records
// ---------------------------------------------------------------------------

impl Reduce for Seat {
    const KIND: RecordKind = RecordKind::Seat;

    fn reduce(self, cfg: &ReducerConfig) -> Option<Self> {
        cfg.any_present(Self::KIND, |field| match field {
            "name" => text_present(&self.name),
            "electoral_area" => opt_text_present(self.electoral_area.as_deref()),
            "image_uri" => opt_text_present(self.image_uri.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for MinutesItem {
    const KIND: RecordKind = RecordKind::MinutesItem;

    fn reduce(self, cfg: &ReducerConfig) -> Option<Self> {
        cfg.any_present(Self::KIND, |field| match field {
            "name" => text_present(&self.name),
            "description" => opt_text_present(self.description.as_deref()),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for SupportingFile {
    const KIND: RecordKind = RecordKind::SupportingFile;

    fn reduce(self, cfg: &ReducerConfig) -> Option<Self> {
        cfg.any_present(Self::KIND, |field| match field {
            "name" => opt_text_present(self.name.as_deref()),
            "uri" => text_present(&self.uri),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for Session {
    const KIND: RecordKind = RecordKind::Session;

    fn reduce(self, cfg: &ReducerConfig) -> Option<Self> {
        cfg.any_present(Self::KIND, |field| match field {
            "session_datetime" => self.session_datetime.is_some(),
            "session_index" => true,
            "video_uri" => opt_text_present(self.video_uri.as_deref()),
            "caption_uri" => opt_text_present(self.caption_uri.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

// ---------------------------------------------------------------------------
// Records with nested records
// ---------------------------------------------------------------------------

impl Reduce for Body {
    const KIND: RecordKind = RecordKind::Body;

    fn reduce(mut self, cfg: &ReducerConfig) -> Option<Self> {
        self.parent = self
            .parent
            .and_then(|parent| (*parent).reduce(cfg).map(Box::new));

        cfg.any_present(Self::KIND, |field| match field {
            "name" => text_present(&self.name),
            "parent" => self.parent.is_some(),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for Role {
    const KIND: RecordKind = RecordKind::Role;

    fn reduce(mut self, cfg: &ReducerConfig) -> Option<Self> {
        self.body = self.body.and_then(|body| body.reduce(cfg));

        cfg.any_present(Self::KIND, |field| match field {
            "title" => text_present(&self.title),
            "body" => self.body.is_some(),
            "end" => self.end.is_some(),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for Person {
    const KIND: RecordKind = RecordKind::Person;

    fn reduce(mut self, cfg: &ReducerConfig) -> Option<Self> {
        self.seat = self.seat.and_then(|seat| seat.reduce(cfg));
        self.roles = reduce_vec(self.roles, cfg);

        cfg.any_present(Self::KIND, |field| match field {
            "name" => text_present(&self.name),
            "email" => opt_text_present(self.email.as_deref()),
            "phone" => opt_text_present(self.phone.as_deref()),
            "website" => opt_text_present(self.website.as_deref()),
            "seat" => self.seat.is_some(),
            "roles" => !self.roles.is_empty(),
            "picture_uri" => opt_text_present(self.picture_uri.as_deref()),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for Matter {
    const KIND: RecordKind = RecordKind::Matter;

    fn reduce(mut self, cfg: &ReducerConfig) -> Option<Self> {
        self.sponsors = reduce_vec(self.sponsors, cfg);

        cfg.any_present(Self::KIND, |field| match field {
            "name" => text_present(&self.name),
            "title" => opt_text_present(self.title.as_deref()),
            "matter_type" => opt_text_present(self.matter_type.as_deref()),
            "result_status" => self.result_status.is_some(),
            "sponsors" => !self.sponsors.is_empty(),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for Vote {
    const KIND: RecordKind = RecordKind::Vote;

    fn reduce(mut self, cfg: &ReducerConfig) -> Option<Self> {
        self.person = self.person.and_then(|person| person.reduce(cfg));

        cfg.any_present(Self::KIND, |field| match field {
            "person" => self.person.is_some(),
            "decision" => self.decision.is_some(),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for EventMinutesItem {
    const KIND: RecordKind = RecordKind::EventMinutesItem;

    fn reduce(mut self, cfg: &ReducerConfig) -> Option<Self> {
        self.minutes_item = self.minutes_item.and_then(|item| item.reduce(cfg));
        self.matter = self.matter.and_then(|matter| matter.reduce(cfg));
        self.votes = reduce_vec(self.votes, cfg);
        self.supporting_files = reduce_vec(self.supporting_files, cfg);

        cfg.any_present(Self::KIND, |field| match field {
            "index" => self.index.is_some(),
            "minutes_item" => self.minutes_item.is_some(),
            "matter" => self.matter.is_some(),
            "decision" => self.decision.is_some(),
            "votes" => !self.votes.is_empty(),
            "supporting_files" => !self.supporting_files.is_empty(),
            _ => false,
        })
        .then_some(self)
    }
}

impl Reduce for EventIngestionModel {
    const KIND: RecordKind = RecordKind::Event;

    fn reduce(mut self, cfg: &ReducerConfig) -> Option<Self> {
        self.body = self.body.and_then(|body| body.reduce(cfg));
        self.sessions = reduce_vec(self.sessions, cfg);
        self.event_minutes_items = reduce_vec(self.event_minutes_items, cfg);

        cfg.any_present(Self::KIND, |field| match field {
            "body" => self.body.is_some(),
            "sessions" => !self.sessions.is_empty(),
            "event_minutes_items" => !self.event_minutes_items.is_empty(),
            "agenda_uri" => opt_text_present(self.agenda_uri.as_deref()),
            "minutes_uri" => opt_text_present(self.minutes_uri.as_deref()),
            "external_source_id" => opt_text_present(self.external_source_id.as_deref()),
            _ => false,
        })
        .then_some(self)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn empty_vote() -> Vote {
        Vote {
            person: None,
            decision: None,
            external_source_id: None,
        }
    }

    #[test]
    fn defaults_cover_every_record_kind() {
        let cfg = ReducerConfig::default();
        for (kind, _) in DEFAULT_MEANING_FIELDS {
            assert!(
                !cfg.meaning_fields(*kind).is_empty(),
                "no default meaning fields for {kind}"
            );
        }
    }

    #[test]
    fn named_seat_survives_reduction() {
        let cfg = ReducerConfig::default();
        let seat = Seat::new("Position 1");
        assert_eq!(seat.clone().reduce(&cfg), Some(seat));
    }

    #[test]
    fn blank_seat_reduces_to_absent() {
        let cfg = ReducerConfig::default();
        assert_eq!(Seat::new("").reduce(&cfg), None);
    }

    #[test]
    fn any_present_meaning_field_keeps_the_record() {
        let cfg = ReducerConfig::default();
        let vote = Vote {
            person: Some(Person::new("Jane Doe")),
            ..empty_vote()
        };
        assert!(vote.reduce(&cfg).is_some());
    }

    #[test]
    fn vote_with_no_meaning_fields_reduces_to_absent() {
        let cfg = ReducerConfig::default();
        assert_eq!(
            Vote {
                external_source_id: Some("123".to_string()),
                ..empty_vote()
            }
            .reduce(&cfg),
            None
        );
    }

    #[test]
    fn nested_reduction_happens_before_presence_check() {
        let cfg = ReducerConfig::default();
        // the person has no name, so it reduces away; without it the vote
        // has no meaning field left
        let vote = Vote {
            person: Some(Person::new("")),
            ..empty_vote()
        };
        assert_eq!(vote.reduce(&cfg), None);
    }

    #[test]
    fn unknown_meaning_field_names_never_match() {
        let cfg = ReducerConfig::default().with_meaning_fields(
            RecordKind::Seat,
            &["name", "not_a_real_field"],
        );
        assert_eq!(Seat::new("").reduce(&cfg), None);
        assert!(Seat::new("Position 9").reduce(&cfg).is_some());
    }

    #[test]
    fn emptied_sequence_does_not_kill_record_unless_declared() {
        let cfg = ReducerConfig::default();
        let mut person = Person::new("Jane Doe");
        person.seat = Some(Seat::new(""));
        let reduced = person.reduce(&cfg).unwrap();
        assert_eq!(reduced.seat, None);
        assert_eq!(reduced.name, "Jane Doe");
    }

    #[test]
    fn event_minutes_item_collapses_bottom_up() {
        // with meaning fields {matter, minutes_item}, an item whose matter
        // and minutes item both reduce away is itself absent even though
        // votes remain
        let cfg = ReducerConfig::default()
            .with_meaning_fields(RecordKind::EventMinutesItem, &["matter", "minutes_item"]);
        let item = EventMinutesItem {
            index: Some(3),
            minutes_item: Some(MinutesItem::new("")),
            matter: Some(Matter {
                name: String::new(),
                title: None,
                matter_type: None,
                result_status: None,
                sponsors: Vec::new(),
                external_source_id: None,
            }),
            decision: None,
            votes: vec![Vote {
                person: Some(Person::new("Jane Doe")),
                decision: None,
                external_source_id: None,
            }],
            supporting_files: Vec::new(),
        };
        assert_eq!(item.reduce(&cfg), None);
    }

    #[test]
    fn default_event_minutes_item_keeps_named_minutes_item() {
        let cfg = ReducerConfig::default();
        let item = EventMinutesItem {
            index: None,
            minutes_item: Some(MinutesItem::new("Approval of the Agenda")),
            matter: None,
            decision: None,
            votes: Vec::new(),
            supporting_files: Vec::new(),
        };
        assert!(item.reduce(&cfg).is_some());
    }

    #[test]
    fn event_without_body_or_sessions_reduces_to_absent() {
        let cfg = ReducerConfig::default();
        let event = EventIngestionModel {
            body: None,
            sessions: Vec::new(),
            event_minutes_items: vec![EventMinutesItem {
                index: None,
                minutes_item: Some(MinutesItem::new("Roll Call")),
                matter: None,
                decision: None,
                votes: Vec::new(),
                supporting_files: Vec::new(),
            }],
            agenda_uri: None,
            minutes_uri: None,
            external_source_id: None,
        };
        assert_eq!(event.reduce(&cfg), None);
    }

    #[test]
    fn reduce_is_idempotent() {
        let cfg = ReducerConfig::default();
        let event = EventIngestionModel {
            body: Some(Body::new("City Council")),
            sessions: vec![Session {
                session_datetime: None,
                session_index: 0,
                video_uri: Some("https://video.example/council.mp4".to_string()),
                caption_uri: None,
            }],
            event_minutes_items: vec![
                EventMinutesItem {
                    index: Some(0),
                    minutes_item: Some(MinutesItem::new("CB 120108")),
                    matter: None,
                    decision: None,
                    votes: vec![
                        Vote {
                            person: Some(Person::new("Jane Doe")),
                            decision: None,
                            external_source_id: None,
                        },
                        empty_vote(),
                    ],
                    supporting_files: Vec::new(),
                },
                EventMinutesItem {
                    index: Some(1),
                    minutes_item: Some(MinutesItem::new("")),
                    matter: None,
                    decision: None,
                    votes: Vec::new(),
                    supporting_files: Vec::new(),
                },
            ],
            agenda_uri: None,
            minutes_uri: None,
            external_source_id: Some("1234".to_string()),
        };

        let once = event.reduce(&cfg).unwrap();
        let twice = once.clone().reduce(&cfg).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once.event_minutes_items.len(), 1);
        assert_eq!(once.event_minutes_items[0].votes.len(), 1);
    }
}
