use chrono::{Duration, Utc};

use gavel_config::GavelConfig;
use gavel_legistar::LegistarClient;
use gavel_pipeline::assemble::{LegistarScraper, ScrapeOptions};
use gavel_refdata::StaticDataSet;

use crate::cli::CheckArgs;

/// Handle `gavel check`.
pub async fn handle(args: &CheckArgs, config: &GavelConfig) -> anyhow::Result<()> {
    let client_name = super::client_name(args.client.as_deref(), config)?;

    let static_data = StaticDataSet::default();
    let options = ScrapeOptions {
        utc_offset_minutes: config.scraper.timezone_offset_minutes,
        ..ScrapeOptions::default()
    };
    let scraper = LegistarScraper::new(
        LegistarClient::new(client_name.as_str()),
        &static_data,
        options,
    )?;

    if !scraper.client().is_legistar_client().await {
        anyhow::bail!("'{client_name}' does not answer as a Legistar client");
    }
    println!("'{client_name}' answers as a Legistar client");

    let end = Utc::now().naive_utc();
    let begin = end - Duration::days(i64::from(args.days));
    let outcome = scraper.events_between(begin, end).await?;

    if outcome.events.is_empty() {
        anyhow::bail!(
            "no ingestible events in the last {} days ({} skipped)",
            args.days,
            outcome.skipped.len()
        );
    }

    println!(
        "{} ingestible events in the last {} days",
        outcome.events.len(),
        args.days
    );
    Ok(())
}
