//! Roster drift detection between scraped events and the static data.
//!
//! When a council seat turns over, scraping keeps working but the curated
//! static data goes stale. Comparing the two after a scrape surfaces the
//! drift while it is one name, not a whole council.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use gavel_core::entities::{EventIngestionModel, Person};
use gavel_core::text::simplify;
use gavel_refdata::StaticDataSet;
use tracing::{info, warn};

/// Names present on only one side of a roster comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterComparison {
    /// Static persons no longer appearing in scraped data.
    pub departed: Vec<String>,
    /// Scraped persons the static data does not know.
    pub arrived: Vec<String>,
}

impl RosterComparison {
    /// True when scraped and static rosters agree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.departed.is_empty() && self.arrived.is_empty()
    }
}

/// Unique sponsors and voters across a batch of events, in first-seen
/// order, deduplicated by name.
#[must_use]
pub fn extract_persons(events: &[EventIngestionModel]) -> Vec<Person> {
    let mut seen = BTreeSet::new();
    let mut persons = Vec::new();
    for event in events {
        for item in &event.event_minutes_items {
            let sponsors = item.matter.iter().flat_map(|matter| matter.sponsors.iter());
            let voters = item.votes.iter().filter_map(|vote| vote.person.as_ref());
            for person in sponsors.chain(voters) {
                if seen.insert(person.name.clone()) {
                    persons.push(person.clone());
                }
            }
        }
    }
    persons
}

/// Compare active primary-body officeholders against the static persons.
///
/// A scraped person counts when they are active and hold an unexpired role
/// on one of the static primary bodies. Departures are logged at info;
/// arrivals at warn, because an arrival means the static data needs
/// updating.
#[must_use]
pub fn compare_persons(scraped: &[Person], static_data: &StaticDataSet) -> RosterComparison {
    compare_persons_at(scraped, static_data, Utc::now())
}

fn compare_persons_at(
    scraped: &[Person],
    static_data: &StaticDataSet,
    now: DateTime<Utc>,
) -> RosterComparison {
    let primary_names: BTreeSet<String> = static_data
        .primary_bodies
        .keys()
        .map(|name| simplify(name).to_lowercase())
        .collect();

    let current: BTreeSet<&str> = scraped
        .iter()
        .filter(|person| person.is_active && holds_current_primary_role(person, &primary_names, now))
        .map(|person| person.name.as_str())
        .collect();
    let known: BTreeSet<&str> = static_data.persons.keys().map(String::as_str).collect();

    let departed: Vec<String> = known.difference(&current).map(ToString::to_string).collect();
    let arrived: Vec<String> = current.difference(&known).map(ToString::to_string).collect();

    if !departed.is_empty() {
        info!(persons = ?departed, "static persons no longer found in scraped data");
    }
    if !arrived.is_empty() {
        warn!(persons = ?arrived, "new persons in scraped data, update the static reference data");
    }

    RosterComparison { departed, arrived }
}

fn holds_current_primary_role(
    person: &Person,
    primary_names: &BTreeSet<String>,
    now: DateTime<Utc>,
) -> bool {
    person.roles.iter().any(|role| {
        role.end.is_none_or(|end| now <= end)
            && role
                .body
                .as_ref()
                .is_some_and(|body| primary_names.contains(&simplify(&body.name).to_lowercase()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gavel_core::entities::{Body, EventMinutesItem, Matter, Role, Vote};
    use pretty_assertions::assert_eq;

    fn utc(y: i32, mo: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, 0, 0, 0).unwrap()
    }

    fn person(name: &str) -> Person {
        Person {
            name: name.to_string(),
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

    fn council_member(name: &str, end: Option<DateTime<Utc>>) -> Person {
        let mut p = person(name);
        p.roles = vec![Role {
            title: "Councilmember".to_string(),
            body: Some(Body {
                name: "City Council".to_string(),
                parent: None,
                is_active: true,
                external_source_id: None,
            }),
            start: utc(2020, 1, 1),
            end,
            external_source_id: None,
        }];
        p
    }

    fn static_council(names: &[&str]) -> StaticDataSet {
        let mut data = StaticDataSet::default();
        data.primary_bodies.insert(
            "City Council".to_string(),
            Body {
                name: "City Council".to_string(),
                parent: None,
                is_active: true,
                external_source_id: None,
            },
        );
        for name in names {
            data.persons.insert((*name).to_string(), person(name));
        }
        data
    }

    #[test]
    fn extracts_unique_sponsors_and_voters() {
        let item = EventMinutesItem {
            index: None,
            minutes_item: None,
            matter: Some(Matter {
                name: "CB 120108".to_string(),
                title: None,
                matter_type: None,
                result_status: None,
                sponsors: vec![person("Alex Pedersen")],
                external_source_id: None,
            }),
            decision: None,
            votes: vec![
                Vote {
                    person: Some(person("Alex Pedersen")),
                    decision: None,
                    external_source_id: None,
                },
                Vote {
                    person: Some(person("Lisa Herbold")),
                    decision: None,
                    external_source_id: None,
                },
                Vote {
                    person: None,
                    decision: None,
                    external_source_id: None,
                },
            ],
            supporting_files: Vec::new(),
        };
        let event = EventIngestionModel {
            body: None,
            sessions: Vec::new(),
            event_minutes_items: vec![item],
            agenda_uri: None,
            minutes_uri: None,
            external_source_id: None,
        };

        let persons = extract_persons(&[event]);
        let names: Vec<&str> = persons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alex Pedersen", "Lisa Herbold"]);
    }

    #[test]
    fn reports_departed_and_arrived_members() {
        let data = static_council(&["Alex Pedersen", "Lisa Herbold"]);
        let scraped = vec![
            council_member("Alex Pedersen", None),
            council_member("Tanya Woo", Some(utc(2030, 1, 1))),
        ];

        let comparison = compare_persons_at(&scraped, &data, utc(2021, 6, 15));

        assert_eq!(comparison.departed, vec!["Lisa Herbold".to_string()]);
        assert_eq!(comparison.arrived, vec!["Tanya Woo".to_string()]);
        assert!(!comparison.is_empty());
    }

    #[test]
    fn expired_and_inactive_roles_do_not_count() {
        let data = static_council(&["Alex Pedersen"]);

        let expired = council_member("Tanya Woo", Some(utc(2020, 12, 31)));
        let mut inactive = council_member("Sally Bagshaw", None);
        inactive.is_active = false;

        let comparison = compare_persons_at(&[expired, inactive], &data, utc(2021, 6, 15));

        assert_eq!(comparison.arrived, Vec::<String>::new());
        assert_eq!(comparison.departed, vec!["Alex Pedersen".to_string()]);
    }
}
