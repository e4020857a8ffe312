use std::collections::BTreeMap;

use anyhow::Context;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use tracing::debug;

use gavel_config::{GavelConfig, PatternsSection};
use gavel_legistar::LegistarClient;
use gavel_pipeline::assemble::{LegistarScraper, ScrapeOptions};
use gavel_pipeline::decisions::PatternOverrides;
use gavel_pipeline::inject::PersonAliases;
use gavel_pipeline::roster::{compare_persons, extract_persons};
use gavel_refdata::StaticDataSet;

use crate::cli::ScrapeArgs;

/// Handle `gavel scrape`.
pub async fn handle(args: &ScrapeArgs, config: &GavelConfig) -> anyhow::Result<()> {
    let client_name = super::client_name(args.client.as_deref(), config)?;

    let static_path = args.static_data.clone().or_else(|| {
        config
            .scraper
            .has_static_data()
            .then(|| config.scraper.static_data_path.clone())
    });
    let static_data = match &static_path {
        Some(path) => StaticDataSet::from_path(path)
            .with_context(|| format!("loading static reference data from {path}"))?,
        None => StaticDataSet::default(),
    };

    let options = ScrapeOptions {
        utc_offset_minutes: config.scraper.timezone_offset_minutes,
        ignore_minutes_items: config.scraper.ignore_minutes_items.clone(),
        require_minutes_items: config.scraper.require_minutes_items,
        patterns: pattern_overrides(&config.patterns),
        aliases: person_aliases(&config.scraper.aliases),
    };
    let scraper = LegistarScraper::new(LegistarClient::new(client_name.as_str()), &static_data, options)?;

    let end = match &args.end {
        Some(value) => parse_local_datetime(value)?,
        None => Utc::now().naive_utc(),
    };
    let begin = match &args.begin {
        Some(value) => parse_local_datetime(value)?,
        None => end - Duration::days(2),
    };
    anyhow::ensure!(begin < end, "--begin {begin} is not before --end {end}");

    debug!(client = %client_name, %begin, %end, "scrape configured");
    let outcome = scraper.events_between(begin, end).await?;

    for skip in &outcome.skipped {
        eprintln!("skipped event {}: {}", skip.external_source_id, skip.reason);
    }

    let comparison = compare_persons(&extract_persons(&outcome.events), &static_data);
    if !comparison.is_empty() {
        eprintln!(
            "roster drift: departed {:?}, arrived {:?}",
            comparison.departed, comparison.arrived
        );
    }

    let json = serde_json::to_string_pretty(&outcome.events)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing events to {}", path.display()))?;
            eprintln!("wrote {} events to {}", outcome.events.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn pattern_overrides(patterns: &PatternsSection) -> PatternOverrides {
    PatternOverrides {
        vote_approve: patterns.vote_approve.clone(),
        vote_abstain: patterns.vote_abstain.clone(),
        vote_reject: patterns.vote_reject.clone(),
        vote_absent: patterns.vote_absent.clone(),
        vote_nonvoting: patterns.vote_nonvoting.clone(),
        matter_adopted: patterns.matter_adopted.clone(),
        matter_in_progress: patterns.matter_in_progress.clone(),
        matter_rejected: patterns.matter_rejected.clone(),
        minutes_passed: patterns.minutes_passed.clone(),
        minutes_failed: patterns.minutes_failed.clone(),
    }
}

fn person_aliases(aliases: &BTreeMap<String, Vec<String>>) -> PersonAliases {
    aliases
        .iter()
        .map(|(canonical, variants)| (canonical.clone(), variants.iter().cloned().collect()))
        .collect()
}

/// Parse a local wall-clock range boundary: full datetime first, date-only
/// means midnight.
fn parse_local_datetime(value: &str) -> anyhow::Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .with_context(|| format!("could not parse '{value}' as a date or datetime"))
}
