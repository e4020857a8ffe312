//! Scraper deployment configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScraperSection {
    /// Legistar client name for the municipality (e.g. `"seattle"`).
    #[serde(default)]
    pub client: String,

    /// Fixed UTC offset, in minutes, of the municipality's local time.
    /// Legistar timestamps carry no zone; `-420` is US Pacific daylight
    /// time, `0` leaves them as UTC.
    #[serde(default)]
    pub timezone_offset_minutes: i32,

    /// Path to the static reference data file (seats, primary bodies,
    /// known persons). Empty means scrape without reference data.
    #[serde(default)]
    pub static_data_path: String,

    /// Case-insensitive regex patterns for minutes items to drop
    /// (e.g. `"^call to order$"`).
    #[serde(default)]
    pub ignore_minutes_items: Vec<String>,

    /// Drop whole events whose minutes items all filtered away.
    #[serde(default)]
    pub require_minutes_items: bool,

    /// Alternate spellings seen in the feed, keyed by the canonical name
    /// used in the static reference data.
    #[serde(default)]
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl ScraperSection {
    /// Check if the section names a municipality to scrape.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.client.is_empty()
    }

    /// Check if a static reference data file is configured.
    #[must_use]
    pub fn has_static_data(&self) -> bool {
        !self.static_data_path.is_empty()
    }
}
