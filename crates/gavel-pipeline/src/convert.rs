//! Wire record to entity coercions.
//!
//! Every string lifted off a Legistar payload runs through
//! [`gavel_core::text::simplify`], so blank values become absent rather
//! than empty-but-present. Conversions do not fail on bad optional data;
//! the emptiness reducer decides later what survives. The one fatal case
//! is an event date that cannot be parsed.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use gavel_core::entities::{Body, Matter, MinutesItem, Person, Role, SupportingFile, Vote};
use gavel_core::text::{normalize_phone, simplify_opt};
use gavel_legistar::types::{RawAttachment, RawBody, RawEventItem, RawOfficeRecord, RawPerson, RawVote};
use tracing::{debug, warn};

use crate::PipelineError;
use crate::decisions::DecisionPatterns;

/// Naive timestamp layout used by `EventDate` and office record dates.
const WIRE_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Clock layout used by `EventTime`.
const WIRE_TIME_FORMAT: &str = "%I:%M %p";

/// Convert an attached body record.
#[must_use]
pub fn body(raw: Option<&RawBody>) -> Option<Body> {
    let raw = raw?;
    Some(Body {
        name: simplify_opt(raw.body_name.as_deref()).unwrap_or_default(),
        parent: None,
        is_active: raw.body_active_flag.is_some_and(|flag| flag != 0),
        external_source_id: raw.body_id.map(|id| id.to_string()),
    })
}

/// Convert the minutes-item text of an event item.
#[must_use]
pub fn minutes_item(item: &RawEventItem) -> MinutesItem {
    MinutesItem {
        name: simplify_opt(item.event_item_title.as_deref()).unwrap_or_default(),
        description: None,
        external_source_id: Some(item.event_item_id.to_string()),
    }
}

/// Convert matter attachments.
#[must_use]
pub fn supporting_files(raw: &[RawAttachment]) -> Vec<SupportingFile> {
    raw.iter()
        .map(|attachment| SupportingFile {
            name: simplify_opt(attachment.matter_attachment_name.as_deref()),
            uri: simplify_opt(attachment.matter_attachment_hyperlink.as_deref())
                .unwrap_or_default(),
            external_source_id: attachment.matter_attachment_id.map(|id| id.to_string()),
        })
        .collect()
}

/// Coercions that depend on the deployment: its decision patterns and the
/// fixed UTC offset of the municipality's local time.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    patterns: &'a DecisionPatterns,
    offset: FixedOffset,
}

impl<'a> Converter<'a> {
    #[must_use]
    pub const fn new(patterns: &'a DecisionPatterns, offset: FixedOffset) -> Self {
        Self { patterns, offset }
    }

    /// Convert an attached person record.
    ///
    /// Nameless rows and placeholder rows ("No Sponsor Required") convert
    /// to `None`.
    #[must_use]
    pub fn person(&self, raw: Option<&RawPerson>) -> Option<Person> {
        let raw = raw?;
        let name = simplify_opt(raw.person_full_name.as_deref())?;
        if self.patterns.is_placeholder_person(&name) {
            return None;
        }
        Some(Person {
            name,
            email: simplify_opt(raw.person_email.as_deref()),
            phone: simplify_opt(raw.person_phone.as_deref()).map(|phone| normalize_phone(&phone)),
            website: simplify_opt(raw.person_www.as_deref()),
            seat: None,
            roles: self.roles(raw.office_record_info.as_deref().unwrap_or_default()),
            picture_uri: None,
            is_active: raw.person_active_flag.is_some_and(|flag| flag != 0),
            external_source_id: raw.person_id.map(|id| id.to_string()),
        })
    }

    /// Convert attached office records.
    ///
    /// A record whose start date is missing or malformed is skipped; a bad
    /// end date degrades to an open-ended role.
    #[must_use]
    pub fn roles(&self, records: &[RawOfficeRecord]) -> Vec<Role> {
        records.iter().filter_map(|record| self.role(record)).collect()
    }

    fn role(&self, record: &RawOfficeRecord) -> Option<Role> {
        let start = record
            .office_record_start_date
            .as_deref()
            .and_then(|value| self.wire_datetime(value).ok());
        let Some(start) = start else {
            warn!(
                record = ?record.office_record_id,
                start = ?record.office_record_start_date,
                "office record has no usable start date, skipping"
            );
            return None;
        };
        let end = record
            .office_record_end_date
            .as_deref()
            .and_then(|value| self.wire_datetime(value).ok());
        Some(Role {
            title: simplify_opt(record.office_record_title.as_deref()).unwrap_or_default(),
            body: body(record.office_record_body_info.as_ref()),
            start,
            end,
            external_source_id: record.office_record_id.map(|id| id.to_string()),
        })
    }

    /// Convert attached vote rows.
    #[must_use]
    pub fn votes(&self, raw: &[RawVote]) -> Vec<Vote> {
        raw.iter()
            .map(|vote| Vote {
                person: self.person(vote.person_info.as_ref()),
                decision: self
                    .patterns
                    .vote_decision(vote.vote_value_name.as_deref().unwrap_or_default()),
                external_source_id: vote.vote_id.map(|id| id.to_string()),
            })
            .collect()
    }

    /// Convert the matter carried by an event item.
    ///
    /// The matter name falls back to the file number when the name field is
    /// blank. Placeholder sponsor rows drop out during person conversion.
    #[must_use]
    pub fn matter(&self, item: &RawEventItem) -> Matter {
        let sponsors = item
            .matter_sponsor_info
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|sponsor| self.person(sponsor.sponsor_person_info.as_ref()))
            .collect();
        Matter {
            name: simplify_opt(item.event_item_matter_name.as_deref())
                .or_else(|| simplify_opt(item.event_item_matter_file.as_deref()))
                .unwrap_or_default(),
            title: simplify_opt(item.event_item_matter_file.as_deref()),
            matter_type: simplify_opt(item.event_item_matter_type.as_deref()),
            result_status: self
                .patterns
                .matter_status(item.event_item_matter_status.as_deref().unwrap_or_default()),
            sponsors,
            external_source_id: item.event_item_matter_id.map(|id| id.to_string()),
        }
    }

    /// Combine `EventDate` and `EventTime` into the session instant.
    ///
    /// A missing or malformed time degrades to midnight.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Construction`] when the date is missing or
    /// malformed.
    pub fn event_datetime(
        &self,
        date: Option<&str>,
        time: Option<&str>,
    ) -> Result<DateTime<Utc>, PipelineError> {
        let date = date.ok_or_else(|| PipelineError::Construction {
            what: "event datetime",
            reason: "EventDate is missing".to_string(),
        })?;
        let day = NaiveDateTime::parse_from_str(date, WIRE_DATETIME_FORMAT)
            .map(|datetime| datetime.date())
            .or_else(|_| NaiveDate::parse_from_str(date, "%Y-%m-%d"))
            .map_err(|parse_error| PipelineError::Construction {
                what: "event datetime",
                reason: format!("EventDate {date:?}: {parse_error}"),
            })?;
        let clock = match time {
            Some(value) => NaiveTime::parse_from_str(value, WIRE_TIME_FORMAT).unwrap_or_else(|_| {
                debug!(time = value, "unparseable EventTime, assuming midnight");
                NaiveTime::MIN
            }),
            None => NaiveTime::MIN,
        };
        Ok(to_utc(day.and_time(clock), self.offset))
    }

    fn wire_datetime(&self, value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        let naive = NaiveDateTime::parse_from_str(value, WIRE_DATETIME_FORMAT)?;
        Ok(to_utc(naive, self.offset))
    }
}

/// Reinterpret a naive local wall-clock time as a UTC instant.
fn to_utc(naive: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    Utc.from_utc_datetime(&(naive - offset))
}
