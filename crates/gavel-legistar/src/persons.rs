//! Cached person and body lookups.
//!
//! A busy event page references the same councilmembers and bodies tens of
//! times across votes, sponsors, and office records. Lookups go through a
//! per-call [`ExpansionCache`] so each person and body is fetched at most
//! once per [`events_between`](crate::LegistarClient::events_between) call.

use std::collections::HashMap;

use crate::http::{check_response, parse_json};
use crate::types::{RawBody, RawOfficeRecord, RawPerson};
use crate::{LegistarClient, LegistarError};

/// Per-call lookup cache for persons and bodies. `None` entries record
/// lookups the API answered with a non-success status, so a missing record
/// is not refetched either.
#[derive(Debug, Default)]
pub(crate) struct ExpansionCache {
    persons: HashMap<i64, Option<RawPerson>>,
    bodies: HashMap<i64, Option<RawBody>>,
}

impl LegistarClient {
    /// Fetch a person with their office records and each record's body
    /// attached. `Ok(None)` when the API does not know the id.
    ///
    /// # Errors
    ///
    /// Returns [`LegistarError`] if a request fails in transport or a
    /// response cannot be parsed.
    pub async fn person_by_id(
        &self,
        person_id: i64,
    ) -> Result<Option<RawPerson>, LegistarError> {
        let mut cache = ExpansionCache::default();
        self.person_cached(person_id, &mut cache).await
    }

    /// Fetch all persons whose `PersonFullName` exactly matches `full_name`.
    ///
    /// # Errors
    ///
    /// Returns [`LegistarError`] if the request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn persons_by_name(
        &self,
        full_name: &str,
    ) -> Result<Vec<RawPerson>, LegistarError> {
        let url = person_search_url(self.base_url(), full_name);
        let resp = check_response(self.http.get(&url).send().await?).await?;
        parse_json(resp, "person search").await
    }

    pub(crate) async fn person_cached(
        &self,
        person_id: i64,
        cache: &mut ExpansionCache,
    ) -> Result<Option<RawPerson>, LegistarError> {
        if let Some(person) = cache.persons.get(&person_id) {
            return Ok(person.clone());
        }

        let url = format!("{}/Persons/{person_id}", self.base_url());
        let resp = self.http.get(&url).send().await?;
        if !resp.status().is_success() {
            cache.persons.insert(person_id, None);
            return Ok(None);
        }
        let mut person: RawPerson = parse_json(resp, "person").await?;

        // All known office records (roles) for this person. A failed
        // records fetch keeps the person with no records attached.
        let records_url = format!("{}/Persons/{person_id}/OfficeRecords", self.base_url());
        let records_resp = self.http.get(&records_url).send().await?;
        if records_resp.status().is_success() {
            let mut records: Vec<RawOfficeRecord> =
                parse_json(records_resp, "office records").await?;
            for record in &mut records {
                if let Some(body_id) = record.office_record_body_id {
                    record.office_record_body_info =
                        self.body_cached(body_id, cache).await?;
                }
            }
            person.office_record_info = Some(records);
        }

        let person = Some(person);
        cache.persons.insert(person_id, person.clone());
        Ok(person)
    }

    pub(crate) async fn body_cached(
        &self,
        body_id: i64,
        cache: &mut ExpansionCache,
    ) -> Result<Option<RawBody>, LegistarError> {
        if let Some(body) = cache.bodies.get(&body_id) {
            return Ok(body.clone());
        }

        let url = format!("{}/Bodies/{body_id}", self.base_url());
        let resp = self.http.get(&url).send().await?;
        let body = if resp.status().is_success() {
            Some(parse_json::<RawBody>(resp, "body").await?)
        } else {
            None
        };
        cache.bodies.insert(body_id, body.clone());
        Ok(body)
    }
}

fn person_search_url(base: &str, full_name: &str) -> String {
    // Legistar's OData filter wants form-style encoding: spaces as '+'.
    let encoded = urlencoding::encode(full_name).replace("%20", "+");
    format!("{base}/Persons?$filter=PersonFullName+eq+%27{encoded}%27")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cache_starts_empty() {
        let cache = ExpansionCache::default();
        assert!(cache.persons.is_empty());
        assert!(cache.bodies.is_empty());
    }

    #[test]
    fn person_search_url_uses_form_style_encoding() {
        let url = person_search_url(
            "http://webapi.legistar.com/v1/seattle",
            "M. Lorena González",
        );
        assert_eq!(
            url,
            "http://webapi.legistar.com/v1/seattle/Persons\
             ?$filter=PersonFullName+eq+%27M.+Lorena+Gonz%C3%A1lez%27"
        );
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_person_lookup_for_seattle() {
        let client = LegistarClient::new("seattle");
        let person = client.person_by_id(677).await.unwrap();
        match person {
            Some(p) => {
                println!(
                    "person 677: {} (records: {})",
                    p.person_full_name.as_deref().unwrap_or("?"),
                    p.office_record_info.map_or(0, |r| r.len()),
                );
            }
            None => println!("person 677 not found"),
        }
    }
}
