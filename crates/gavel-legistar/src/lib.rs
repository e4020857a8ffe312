//! # gavel-legistar
//!
//! Legistar Web API client for Gavel.
//!
//! Talks to the public `webapi.legistar.com` InSite API and returns fully
//! expanded wire records:
//! - `/Events` filtered by date span
//! - `/Events/{id}/EventItems` with agenda notes, minutes notes, attachments
//! - `/EventItems/{id}/Votes`
//! - `/Matters/{id}/Sponsors`
//! - `/Persons/{id}` plus `/Persons/{id}/OfficeRecords`
//! - `/Bodies/{id}`
//!
//! Records stay in wire shape ([`types`]); normalization to ingestion
//! entities happens downstream. No retries, no backoff, no authentication:
//! the API is public and read-only.

pub mod events;
pub mod persons;
pub mod types;

mod error;
mod http;

pub use error::LegistarError;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client scoped to one Legistar municipality.
pub struct LegistarClient {
    pub(crate) http: reqwest::Client,
    client_name: String,
    base: String,
}

impl LegistarClient {
    /// Create a client for a Legistar municipality, e.g. `"seattle"`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(client_name: impl Into<String>) -> Self {
        let client_name = client_name.into();
        Self {
            http: reqwest::Client::builder()
                .user_agent("gavel/0.1")
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client should build"),
            base: format!("http://webapi.legistar.com/v1/{client_name}"),
            client_name,
        }
    }

    /// The municipality name this client queries.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base
    }

    /// True when the Legistar API recognizes the client name. The simplest
    /// check: if the bodies endpoint answers, this is a Legistar
    /// municipality.
    pub async fn is_legistar_client(&self) -> bool {
        let url = format!("{}/Bodies", self.base);
        match self.http.get(&url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}
