//! Event fetching with full record expansion.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::http::{check_response, parse_json};
use crate::persons::ExpansionCache;
use crate::types::{RawEvent, RawEventItem, RawSponsor};
use crate::{LegistarClient, LegistarError};

/// Datetime format Legistar accepts inside `$filter` expressions.
const FILTER_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

impl LegistarClient {
    /// Fetch all events in `[begin, end)` and expand each one: its event
    /// items (with agenda notes, minutes notes, and attachments), each
    /// item's votes, each vote's person with office records and bodies,
    /// and each matter's sponsors.
    ///
    /// Person and body lookups are cached for the duration of the call.
    ///
    /// # Errors
    ///
    /// Returns [`LegistarError`] if any request fails in transport, the
    /// API returns a non-success status, or a response cannot be parsed.
    pub async fn events_between(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<RawEvent>, LegistarError> {
        debug!(%begin, %end, client = self.client_name(), "querying Legistar for events");

        let url = events_url(self.base_url(), begin, end);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let mut events: Vec<RawEvent> = parse_json(resp, "events").await?;

        let mut cache = ExpansionCache::default();
        for event in &mut events {
            self.expand_event(event, &mut cache).await?;
        }

        debug!(count = events.len(), "collected Legistar events");
        Ok(events)
    }

    async fn expand_event(
        &self,
        event: &mut RawEvent,
        cache: &mut ExpansionCache,
    ) -> Result<(), LegistarError> {
        let items_url = format!(
            "{}/Events/{}/EventItems?AgendaNote=1&MinutesNote=1&Attachments=1",
            self.base_url(),
            event.event_id,
        );
        let resp = check_response(self.http.get(&items_url).send().await?).await?;
        event.event_items = parse_json(resp, "event items").await?;

        if let Some(body_id) = event.event_body_id {
            event.event_body_info = self.body_cached(body_id, cache).await?;
        }

        for item in &mut event.event_items {
            self.expand_event_item(item, cache).await?;
        }
        Ok(())
    }

    async fn expand_event_item(
        &self,
        item: &mut RawEventItem,
        cache: &mut ExpansionCache,
    ) -> Result<(), LegistarError> {
        let votes_url = format!(
            "{}/EventItems/{}/Votes",
            self.base_url(),
            item.event_item_id,
        );
        let resp = check_response(self.http.get(&votes_url).send().await?).await?;
        item.event_item_vote_info = parse_json(resp, "votes").await?;

        for vote in &mut item.event_item_vote_info {
            if let Some(person_id) = vote.vote_person_id {
                vote.person_info = self.person_cached(person_id, cache).await?;
            }
        }

        item.matter_sponsor_info = match item.event_item_matter_id {
            Some(matter_id) if matter_id >= 0 => {
                Some(self.matter_sponsors(matter_id, cache).await?)
            }
            _ => None,
        };
        Ok(())
    }

    async fn matter_sponsors(
        &self,
        matter_id: i64,
        cache: &mut ExpansionCache,
    ) -> Result<Vec<RawSponsor>, LegistarError> {
        let url = format!("{}/Matters/{matter_id}/Sponsors", self.base_url());
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let mut sponsors: Vec<RawSponsor> = parse_json(resp, "sponsors").await?;

        // Sponsor rows only reference a person id; attach the full record.
        for sponsor in &mut sponsors {
            if let Some(person_id) = sponsor.matter_sponsor_name_id {
                sponsor.sponsor_person_info = self.person_cached(person_id, cache).await?;
            }
        }
        Ok(sponsors)
    }
}

fn events_url(base: &str, begin: NaiveDateTime, end: NaiveDateTime) -> String {
    format!(
        "{base}/Events?$filter=EventDate+ge+datetime%27{}%27+and+EventDate+lt+datetime%27{}%27",
        begin.format(FILTER_DATETIME_FORMAT),
        end.format(FILTER_DATETIME_FORMAT),
    )
}
