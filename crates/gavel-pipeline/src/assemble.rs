//! Whole-event assembly and batch scraping.
//!
//! [`LegistarScraper`] ties the pipeline together for one municipality:
//! fetch raw events, convert and filter their items, inject static person
//! data, reduce out the emptiness, and report whatever could not be
//! assembled instead of aborting the batch.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use gavel_core::entities::{ContentUris, EventIngestionModel, EventMinutesItem, Session};
use gavel_core::enums::MatterStatusDecision;
use gavel_core::reduce::{Reduce, ReducerConfig};
use gavel_core::text::simplify_opt;
use gavel_legistar::LegistarClient;
use gavel_legistar::types::{RawEvent, RawEventItem};
use gavel_refdata::StaticDataSet;
use serde::Serialize;
use tracing::{debug, warn};

use crate::PipelineError;
use crate::convert::{self, Converter};
use crate::decisions::{DecisionPatterns, PatternOverrides};
use crate::filter::MinutesFilter;
use crate::inject::{PersonAliases, PersonInjector};

// ── Options ─────────────────────────────────────────────────────────────────

/// Per-deployment assembly knobs.
#[derive(Debug, Clone, Default)]
pub struct ScrapeOptions {
    /// Offset of the municipality's local time from UTC, in minutes.
    /// Legistar reports naive local timestamps.
    pub utc_offset_minutes: i32,
    /// Exclusion patterns for procedural minutes items.
    pub ignore_minutes_items: Vec<String>,
    /// Drop events whose filtered minutes list comes out empty.
    pub require_minutes_items: bool,
    /// Decision pattern replacements.
    pub patterns: PatternOverrides,
    /// Name variants for static person lookup.
    pub aliases: PersonAliases,
}

// ── Content URI resolution ──────────────────────────────────────────────────

/// Extra video and caption sources for events without an `EventVideoPath`.
///
/// Municipalities publish recordings in different places; implement this
/// to teach the assembler where to look. Each returned pair becomes one
/// session.
pub trait ContentUriResolver: Send + Sync {
    fn resolve(&self, event: &RawEvent) -> Vec<ContentUris>;
}

/// Stock resolver: no sources beyond the event's own `EventVideoPath`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtraContent;

impl ContentUriResolver for NoExtraContent {
    fn resolve(&self, _event: &RawEvent) -> Vec<ContentUris> {
        Vec::new()
    }
}

// ── Outcome ─────────────────────────────────────────────────────────────────

/// An event the batch could not assemble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEvent {
    pub external_source_id: String,
    pub reason: String,
}

/// Result of scraping a date span: whatever assembled, plus what did not.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScrapeOutcome {
    pub events: Vec<EventIngestionModel>,
    pub skipped: Vec<SkippedEvent>,
}

// ── Scraper ─────────────────────────────────────────────────────────────────

/// One municipality's scraper: the API client plus every compiled
/// per-deployment table needed to assemble its events.
pub struct LegistarScraper {
    client: LegistarClient,
    injector: PersonInjector,
    patterns: DecisionPatterns,
    filter: MinutesFilter,
    reducer: ReducerConfig,
    resolver: Box<dyn ContentUriResolver>,
    offset: FixedOffset,
    require_minutes_items: bool,
}

impl std::fmt::Debug for LegistarScraper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegistarScraper")
            .field("injector", &self.injector)
            .field("patterns", &self.patterns)
            .field("filter", &self.filter)
            .field("reducer", &self.reducer)
            .field("offset", &self.offset)
            .field("require_minutes_items", &self.require_minutes_items)
            .finish_non_exhaustive()
    }
}

impl LegistarScraper {
    /// Build a scraper for one municipality, compiling its filter and
    /// decision patterns up front.
    ///
    /// # Errors
    ///
    /// [`PipelineError::InvalidPattern`] for an uncompilable pattern,
    /// [`PipelineError::Construction`] for an out-of-range UTC offset.
    pub fn new(
        client: LegistarClient,
        static_data: &StaticDataSet,
        options: ScrapeOptions,
    ) -> Result<Self, PipelineError> {
        let offset = options
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| PipelineError::Construction {
                what: "utc offset",
                reason: format!("{} minutes is out of range", options.utc_offset_minutes),
            })?;
        Ok(Self {
            client,
            injector: PersonInjector::new(static_data).with_aliases(options.aliases),
            patterns: DecisionPatterns::new(&options.patterns)?,
            filter: MinutesFilter::new(&options.ignore_minutes_items)?,
            reducer: ReducerConfig::default(),
            resolver: Box::new(NoExtraContent),
            offset,
            require_minutes_items: options.require_minutes_items,
        })
    }

    /// Replace the emptiness configuration.
    #[must_use]
    pub fn with_reducer(mut self, reducer: ReducerConfig) -> Self {
        self.reducer = reducer;
        self
    }

    /// Replace the content URI resolver.
    #[must_use]
    pub fn with_resolver(mut self, resolver: Box<dyn ContentUriResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// The underlying API client.
    #[must_use]
    pub fn client(&self) -> &LegistarClient {
        &self.client
    }

    /// Scrape and assemble every event in `[begin, end)`, given as naive
    /// local timestamps.
    ///
    /// Events are assembled independently: one bad event becomes a
    /// [`SkippedEvent`] and the batch continues.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Fetch`] when the span query itself fails.
    pub async fn events_between(
        &self,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<ScrapeOutcome, PipelineError> {
        let raw_events = self.client.events_between(begin, end).await?;

        let mut outcome = ScrapeOutcome::default();
        for raw in &raw_events {
            match self.assemble_event(raw) {
                Ok(Some(event)) => outcome.events.push(event),
                Ok(None) => debug!(event = raw.event_id, "event reduced to nothing"),
                Err(error) => {
                    warn!(event = raw.event_id, %error, "skipping event");
                    outcome.skipped.push(SkippedEvent {
                        external_source_id: raw.event_id.to_string(),
                        reason: error.to_string(),
                    });
                }
            }
        }
        debug!(
            events = outcome.events.len(),
            skipped = outcome.skipped.len(),
            "assembled scraped events"
        );
        Ok(outcome)
    }

    /// Assemble one raw event into an ingestion model.
    ///
    /// Pure and synchronous: everything needed is already attached to the
    /// raw event. `Ok(None)` when the event reduces to nothing, or when the
    /// deployment requires minutes items and none survived filtering.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Construction`] when the event date is unusable.
    pub fn assemble_event(
        &self,
        raw: &RawEvent,
    ) -> Result<Option<EventIngestionModel>, PipelineError> {
        let conv = Converter::new(&self.patterns, self.offset);

        let mut items = Vec::new();
        for raw_item in &raw.event_items {
            let item = self.assemble_item(raw_item, conv);
            let Some(item) = self.filter.apply(item) else {
                continue;
            };
            let Some(mut item) = item.reduce(&self.reducer) else {
                continue;
            };
            fix_event_minutes(&mut item, raw_item);
            items.push(item);
        }

        if self.require_minutes_items && items.is_empty() {
            debug!(event = raw.event_id, "no minutes items survived, dropping event");
            return Ok(None);
        }

        let session_datetime =
            conv.event_datetime(raw.event_date.as_deref(), raw.event_time.as_deref())?;

        let event = EventIngestionModel {
            body: convert::body(raw.event_body_info.as_ref()),
            sessions: self.sessions(raw, session_datetime),
            event_minutes_items: items,
            agenda_uri: simplify_opt(raw.event_agenda_file.as_deref()),
            minutes_uri: simplify_opt(raw.event_minutes_file.as_deref()),
            external_source_id: Some(raw.event_id.to_string()),
        };
        Ok(event.reduce(&self.reducer))
    }

    fn assemble_item(&self, raw_item: &RawEventItem, conv: Converter<'_>) -> EventMinutesItem {
        let votes = conv
            .votes(&raw_item.event_item_vote_info)
            .into_iter()
            .map(|mut vote| {
                vote.person = vote.person.map(|person| self.injector.inject(person));
                vote
            })
            .collect();

        let mut matter = conv.matter(raw_item);
        matter.sponsors = matter
            .sponsors
            .into_iter()
            .map(|sponsor| self.injector.inject(sponsor))
            .collect();

        EventMinutesItem {
            index: raw_item.event_item_minutes_sequence,
            minutes_item: Some(convert::minutes_item(raw_item)),
            matter: Some(matter),
            decision: self.patterns.minutes_decision(
                raw_item.event_item_passed_flag_name.as_deref().unwrap_or_default(),
            ),
            votes,
            supporting_files: convert::supporting_files(&raw_item.event_item_matter_attachments),
        }
    }

    /// One session per content URI pair. The event's own `EventVideoPath`
    /// wins; otherwise the resolver is consulted, and an event with no
    /// sources at all still gets a single bare session.
    fn sessions(&self, raw: &RawEvent, session_datetime: DateTime<Utc>) -> Vec<Session> {
        let uris = match simplify_opt(raw.event_video_path.as_deref()) {
            Some(video) => vec![ContentUris {
                video_uri: Some(video),
                caption_uri: None,
            }],
            None => {
                let resolved = self.resolver.resolve(raw);
                if resolved.is_empty() {
                    vec![ContentUris {
                        video_uri: None,
                        caption_uri: None,
                    }]
                } else {
                    resolved
                }
            }
        };
        (0u32..)
            .zip(uris)
            .map(|(index, uris)| Session {
                session_datetime: Some(session_datetime),
                session_index: index,
                video_uri: uris.video_uri,
                caption_uri: uris.caption_uri,
            })
            .collect()
    }
}

/// Swap the concise matter name and the descriptive agenda text once both
/// sides survived reduction, and default a voted-on matter that still has
/// raw status text to in-progress.
fn fix_event_minutes(item: &mut EventMinutesItem, raw_item: &RawEventItem) {
    if let (Some(minutes_item), Some(matter)) = (item.minutes_item.as_mut(), item.matter.as_mut())
    {
        minutes_item.description = Some(minutes_item.name.clone());
        minutes_item.name.clone_from(&matter.name);
        matter.title.clone_from(&minutes_item.description);
    }

    if let Some(matter) = item.matter.as_mut() {
        let has_raw_status = raw_item
            .event_item_matter_status
            .as_deref()
            .is_some_and(|status| !status.is_empty());
        if matter.result_status.is_none() && !item.votes.is_empty() && has_raw_status {
            matter.result_status = Some(MatterStatusDecision::InProgress);
        }
    }
}
