//! Static-data injection for scraped persons.
//!
//! The static reference data is authoritative: whatever a deployment has
//! curated for a person overrides what Legistar reports, and the curated
//! roles are merged into the scraped role list.

use std::collections::{BTreeMap, BTreeSet};

use gavel_core::entities::Person;
use gavel_refdata::StaticDataSet;
use tracing::debug;

use crate::roles::sanitize_roles;

/// Known name variants, keyed by the canonical static name.
pub type PersonAliases = BTreeMap<String, BTreeSet<String>>;

/// Overwrites scraped person fields from the static reference data.
#[derive(Debug, Clone, Default)]
pub struct PersonInjector {
    static_data: StaticDataSet,
    aliases: PersonAliases,
}

impl PersonInjector {
    /// Build an injector over a deployment's static data. The injector
    /// keeps its own copy.
    #[must_use]
    pub fn new(static_data: &StaticDataSet) -> Self {
        Self {
            static_data: static_data.clone(),
            aliases: PersonAliases::new(),
        }
    }

    /// Attach alias resolution: scraped names listed as variants are
    /// rewritten to their canonical static name before lookup.
    #[must_use]
    pub fn with_aliases(mut self, aliases: PersonAliases) -> Self {
        self.aliases = aliases;
        self
    }

    /// Overwrite every field the static record holds a value for, and
    /// merge the static roles in via [`sanitize_roles`]. A person with no
    /// static entry comes back unchanged.
    #[must_use]
    pub fn inject(&self, person: Person) -> Person {
        let canonical = self.canonical_name(&person.name);
        let Some(known) = self.static_data.person(canonical) else {
            return person;
        };
        debug!(scraped = %person.name, canonical = %known.name, "injecting static person data");

        let mut person = person;
        person.name.clone_from(&known.name);
        if known.email.is_some() {
            person.email.clone_from(&known.email);
        }
        if known.phone.is_some() {
            person.phone.clone_from(&known.phone);
        }
        if known.website.is_some() {
            person.website.clone_from(&known.website);
        }
        if known.picture_uri.is_some() {
            person.picture_uri.clone_from(&known.picture_uri);
        }
        if known.external_source_id.is_some() {
            person.external_source_id.clone_from(&known.external_source_id);
        }
        if known.seat.is_some() {
            person.seat.clone_from(&known.seat);
        }
        person.is_active = known.is_active;
        person.roles = sanitize_roles(
            &person.name,
            std::mem::take(&mut person.roles),
            &self.static_data,
        );
        person
    }

    fn canonical_name<'s>(&'s self, name: &'s str) -> &'s str {
        if self.aliases.is_empty() || self.aliases.contains_key(name) {
            return name;
        }
        self.aliases
            .iter()
            .find(|(_, variants)| variants.contains(name))
            .map_or(name, |(canonical, _)| canonical.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use gavel_core::entities::{Body, Role, Seat};
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
            is_active: false,
            external_source_id: None,
        }
    }

    fn static_gonzalez() -> StaticDataSet {
        let mut known = person("M. Lorena González");
        known.email = Some("lorena.gonzalez@seattle.gov".to_string());
        known.is_active = true;
        known.seat = Some(Seat {
            name: "Position 9".to_string(),
            electoral_area: Some("Citywide".to_string()),
            image_uri: None,
        });
        known.roles = vec![Role {
            title: "Councilmember".to_string(),
            body: Some(Body {
                name: "City Council".to_string(),
                parent: None,
                is_active: true,
                external_source_id: None,
            }),
            start: utc(2020, 1, 1),
            end: None,
            external_source_id: None,
        }];

        let mut data = StaticDataSet::default();
        data.persons.insert(known.name.clone(), known);
        data
    }

    #[test]
    fn injects_static_fields_over_scraped_ones() {
        let injector = PersonInjector::new(&static_gonzalez());
        let mut scraped = person("M. Lorena González");
        scraped.phone = Some("206-684-8802".to_string());

        let injected = injector.inject(scraped);

        assert_eq!(injected.email.as_deref(), Some("lorena.gonzalez@seattle.gov"));
        assert_eq!(injected.seat.as_ref().unwrap().name, "Position 9");
        // no static phone, so the scraped one stays
        assert_eq!(injected.phone.as_deref(), Some("206-684-8802"));
        assert!(injected.is_active);
    }

    #[test]
    fn merges_static_roles_into_the_scraped_list() {
        let injector = PersonInjector::new(&static_gonzalez());
        let injected = injector.inject(person("M. Lorena González"));

        assert_eq!(injected.roles.len(), 1);
        assert_eq!(injected.roles[0].title, "Councilmember");
    }

    #[test]
    fn aliases_resolve_to_the_canonical_name() {
        let mut aliases = PersonAliases::new();
        aliases.insert(
            "M. Lorena González".to_string(),
            BTreeSet::from(["Lorena González".to_string()]),
        );
        let injector = PersonInjector::new(&static_gonzalez()).with_aliases(aliases);

        let injected = injector.inject(person("Lorena González"));

        assert_eq!(injected.name, "M. Lorena González");
        assert_eq!(injected.seat.as_ref().unwrap().name, "Position 9");
    }

    #[test]
    fn unknown_person_is_returned_unchanged() {
        let injector = PersonInjector::new(&static_gonzalez());
        let scraped = person("Committee Clerk");

        assert_eq!(injector.inject(scraped.clone()), scraped);
    }
}
