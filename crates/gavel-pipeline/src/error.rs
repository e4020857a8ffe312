use gavel_legistar::LegistarError;
use thiserror::Error;

/// Failures raised while configuring or running the pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A filter or decision pattern did not compile. Raised at
    /// configuration time, before any scraping starts.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The offending pattern text.
        pattern: String,
        /// Compile error from the regex engine.
        source: regex::Error,
    },

    /// Scraped data that cannot be coerced into a record.
    #[error("could not construct {what}: {reason}")]
    Construction {
        /// The record being built.
        what: &'static str,
        /// Why the data was unusable.
        reason: String,
    },

    /// The underlying Legistar fetch failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] LegistarError),
}
