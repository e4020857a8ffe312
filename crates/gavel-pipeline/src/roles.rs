//! Role list sanitation against the static reference data.
//!
//! Scraped office records are messy: free-text titles, overlapping terms,
//! and gaps the static data already covers. The merge in [`sanitize_roles`]
//! is append-only; title standardization and term trimming are separate
//! passes a deployment applies when it wants them.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use gavel_core::entities::{Body, Role};
use gavel_core::enums::RoleTitle;
use gavel_core::reduce::{ReducerConfig, reduce_vec};
use gavel_core::text::simplify;
use gavel_refdata::StaticDataSet;
use tracing::debug;

/// Title fragments marking a primary-body role as council president.
pub const COUNCIL_PRESIDENT_PATTERNS: &[&str] = &["chair", "pres", "super"];

/// Title fragments marking a non-primary-body role as chair.
pub const CHAIR_PATTERNS: &[&str] = &["chair", "pres"];

/// Primary body names assumed when the static data defines none.
const FALLBACK_PRIMARY_BODIES: &[&str] = &["city council", "council briefing"];

/// Merge a person's static roles into their scraped roles.
///
/// Append-only: scraped roles are never dropped or rewritten. A static
/// role is appended unless a scraped role already covers it, meaning the
/// same body and an overlapping or identical time range (`None` end is
/// unbounded). The merged list is sorted by start, open-ended roles after
/// closed ones with the same start. A person with no static entry gets
/// their scraped roles back, trimmed of empties.
#[must_use]
pub fn sanitize_roles(
    person_name: &str,
    scraped_roles: Vec<Role>,
    static_data: &StaticDataSet,
) -> Vec<Role> {
    let Some(known) = static_data.person(person_name) else {
        return reduce_vec(scraped_roles, &ReducerConfig::default());
    };

    let mut roles = scraped_roles;
    for known_role in &known.roles {
        let covered = roles.iter().any(|role| {
            same_body(role.body.as_ref(), known_role.body.as_ref())
                && ranges_overlap(role, known_role)
        });
        if !covered {
            debug!(
                person = person_name,
                title = %known_role.title,
                "appending static role missing from scraped data"
            );
            roles.push(known_role.clone());
        }
    }

    sort_roles(&mut roles);
    roles
}

/// Map free-text role titles onto the [`RoleTitle`] constants.
///
/// Roles on a primary body become councilmember, or council president when
/// the title contains one of `council_pres_patterns`. Roles on other
/// bodies map through the common vice/alternate/supervisor fragments and
/// `chair_patterns`, defaulting to member. Fragments match
/// case-insensitively as substrings.
#[must_use]
pub fn standardize_titles(
    mut roles: Vec<Role>,
    static_data: &StaticDataSet,
    council_pres_patterns: &[&str],
    chair_patterns: &[&str],
) -> Vec<Role> {
    let primary_names = primary_body_names(static_data);

    for role in &mut roles {
        let is_primary = role
            .body
            .as_ref()
            .is_some_and(|body| primary_names.contains(&simplify(&body.name).to_lowercase()));
        let title = simplify(&role.title).to_lowercase();

        let standard = if is_primary {
            if contains_any(&title, council_pres_patterns) {
                RoleTitle::CouncilPresident
            } else {
                RoleTitle::Councilmember
            }
        } else if title.contains("vice") {
            RoleTitle::ViceChair
        } else if title.contains("alt") {
            RoleTitle::Alternate
        } else if title.contains("super") {
            RoleTitle::Supervisor
        } else if contains_any(&title, chair_patterns) {
            RoleTitle::Chair
        } else {
            RoleTitle::Member
        };
        role.title = standard.as_str().to_string();
    }
    roles
}

/// End overlapping councilmember terms one day before the next term
/// starts, so each body has one sitting councilmember term at a time.
///
/// Only closed councilmember terms that name a body are considered; per
/// body they are walked in start order and an earlier term running past
/// the next term's start is clipped.
#[must_use]
pub fn trim_overlapping_terms(mut roles: Vec<Role>) -> Vec<Role> {
    let mut terms: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (index, role) in roles.iter().enumerate() {
        if role.title == RoleTitle::Councilmember.as_str() && role.end.is_some() {
            if let Some(body) = &role.body {
                terms
                    .entry(simplify(&body.name).to_lowercase())
                    .or_default()
                    .push(index);
            }
        }
    }

    for indices in terms.values_mut() {
        indices.sort_by_key(|&index| (roles[index].start, roles[index].end));
        for pair in indices.windows(2) {
            let next_start = roles[pair[1]].start;
            let previous = &mut roles[pair[0]];
            if previous.end.is_some_and(|end| end > next_start) {
                previous.end = Some(next_start - Duration::days(1));
            }
        }
    }

    roles
}

fn primary_body_names(static_data: &StaticDataSet) -> Vec<String> {
    if static_data.has_primary_bodies() {
        static_data
            .primary_bodies
            .keys()
            .map(|name| simplify(name).to_lowercase())
            .collect()
    } else {
        FALLBACK_PRIMARY_BODIES.iter().map(ToString::to_string).collect()
    }
}

fn contains_any(text: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|fragment| text.contains(fragment))
}

fn same_body(a: Option<&Body>, b: Option<&Body>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => simplify(&a.name).to_lowercase() == simplify(&b.name).to_lowercase(),
        _ => false,
    }
}

fn ranges_overlap(a: &Role, b: &Role) -> bool {
    let a_end = a.end.unwrap_or(DateTime::<Utc>::MAX_UTC);
    let b_end = b.end.unwrap_or(DateTime::<Utc>::MAX_UTC);
    a.start <= b_end && b.start <= a_end
}

fn sort_roles(roles: &mut [Role]) {
    roles.sort_by(|a, b| {
        a.start.cmp(&b.start).then_with(|| match (a.end, b.end) {
            (Some(a_end), Some(b_end)) => a_end.cmp(&b_end),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    });
}
