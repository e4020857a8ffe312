//! End-to-end reduction over a realistic nested event.

use chrono::{TimeZone, Utc};
use gavel_core::entities::{
    Body, EventIngestionModel, EventMinutesItem, Matter, MinutesItem, Person, Session,
    SupportingFile, Vote,
};
use gavel_core::enums::{EventMinutesItemDecision, VoteDecision};
use gavel_core::reduce::{Reduce, ReducerConfig};
use pretty_assertions::assert_eq;

fn council_event() -> EventIngestionModel {
    EventIngestionModel {
        body: Some(Body::new("City Council")),
        sessions: vec![Session {
            session_datetime: Some(Utc.with_ymd_and_hms(2021, 7, 12, 16, 30, 0).unwrap()),
            session_index: 0,
            video_uri: Some("https://video.example/council_071221.mp4".to_string()),
            caption_uri: None,
        }],
        event_minutes_items: vec![
            // a full item with matter, votes, and an attachment
            EventMinutesItem {
                index: Some(0),
                minutes_item: Some(MinutesItem::new("CB 120108")),
                matter: Some(Matter {
                    name: "CB 120108".to_string(),
                    title: Some("AN ORDINANCE relating to the parks district".to_string()),
                    matter_type: Some("Council Bill".to_string()),
                    result_status: None,
                    sponsors: vec![Person::new("Alex Pedersen")],
                    external_source_id: Some("9001".to_string()),
                }),
                decision: Some(EventMinutesItemDecision::Passed),
                votes: vec![
                    Vote {
                        person: Some(Person::new("Alex Pedersen")),
                        decision: Some(VoteDecision::Approve),
                        external_source_id: Some("77001".to_string()),
                    },
                    // blank voter row as Legistar sometimes returns
                    Vote {
                        person: Some(Person::new("")),
                        decision: None,
                        external_source_id: Some("77002".to_string()),
                    },
                ],
                supporting_files: vec![SupportingFile {
                    name: Some("Summary and Fiscal Note".to_string()),
                    uri: String::new(),
                    external_source_id: None,
                }],
            },
            // an item that is pure padding
            EventMinutesItem {
                index: Some(1),
                minutes_item: Some(MinutesItem::new("")),
                matter: None,
                decision: None,
                votes: Vec::new(),
                supporting_files: Vec::new(),
            },
        ],
        agenda_uri: Some("https://legistar.example/agenda.pdf".to_string()),
        minutes_uri: None,
        external_source_id: Some("4585".to_string()),
    }
}

#[test]
fn padding_is_pruned_at_every_level() {
    let cfg = ReducerConfig::default();
    let reduced = council_event().reduce(&cfg).expect("event should survive");

    assert_eq!(reduced.event_minutes_items.len(), 1);
    let item = &reduced.event_minutes_items[0];
    assert_eq!(item.votes.len(), 1);
    assert_eq!(
        item.votes[0].person.as_ref().map(|p| p.name.as_str()),
        Some("Alex Pedersen")
    );
    // the attachment had no uri, so it is gone
    assert!(item.supporting_files.is_empty());
}

#[test]
fn reduction_is_idempotent_at_event_scope() {
    let cfg = ReducerConfig::default();
    let once = council_event().reduce(&cfg).unwrap();
    let twice = once.clone().reduce(&cfg).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn reduced_event_roundtrips_through_json() {
    let cfg = ReducerConfig::default();
    let reduced = council_event().reduce(&cfg).unwrap();

    let json = serde_json::to_string_pretty(&reduced).unwrap();
    let recovered: EventIngestionModel = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, reduced);
}
