//! Exclusion filter for procedural minutes items.
//!
//! Deployments list patterns for agenda items that should never reach the
//! ingestion model ("Approval of the Agenda", "ADJOURNMENT"). Matching is
//! case-insensitive against the wrapped minutes item's name and
//! description; literal substrings are valid patterns as-is.

use gavel_core::entities::EventMinutesItem;
use regex::Regex;
use tracing::debug;

use crate::PipelineError;
use crate::decisions::compile;

/// Compiled exclusion patterns for scraped minutes items.
#[derive(Debug, Clone, Default)]
pub struct MinutesFilter {
    patterns: Vec<Regex>,
}

impl MinutesFilter {
    /// Compile the exclusion patterns, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// [`PipelineError::InvalidPattern`] when a pattern does not compile.
    pub fn new<P: AsRef<str>>(patterns: &[P]) -> Result<Self, PipelineError> {
        let patterns = patterns
            .iter()
            .map(|pattern| compile(pattern.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Apply the filter to one assembled item.
    ///
    /// Returns the item untouched when nothing matches and `None` when any
    /// pattern matches either text, checking patterns in configured order.
    /// Items without a minutes item, and items with neither name nor
    /// description text, always pass.
    #[must_use]
    pub fn apply(&self, item: EventMinutesItem) -> Option<EventMinutesItem> {
        let Some(minutes_item) = item.minutes_item.as_ref() else {
            return Some(item);
        };

        for pattern in &self.patterns {
            let name_matches =
                !minutes_item.name.is_empty() && pattern.is_match(&minutes_item.name);
            let description_matches = minutes_item
                .description
                .as_deref()
                .is_some_and(|description| pattern.is_match(description));
            if name_matches || description_matches {
                debug!(name = %minutes_item.name, %pattern, "minutes item filtered out");
                return None;
            }
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_core::entities::MinutesItem;

    fn item(name: &str, description: Option<&str>) -> EventMinutesItem {
        EventMinutesItem {
            index: None,
            minutes_item: Some(MinutesItem {
                name: name.to_string(),
                description: description.map(ToString::to_string),
                external_source_id: None,
            }),
            matter: None,
            decision: None,
            votes: Vec::new(),
            supporting_files: Vec::new(),
        }
    }

    #[test]
    fn excludes_by_name_case_insensitively() {
        let filter = MinutesFilter::new(&["approval of the agenda"]).unwrap();
        assert!(filter.apply(item("APPROVAL OF THE AGENDA", None)).is_none());
        assert!(filter.apply(item("CB 120108", None)).is_some());
    }

    #[test]
    fn excludes_by_description() {
        let filter = MinutesFilter::new(&["public comment"]).unwrap();
        let excluded = item("Item 3", Some("Public Comment period, up to 20 minutes"));
        assert!(filter.apply(excluded).is_none());
    }

    #[test]
    fn anchored_patterns_stay_anchored() {
        let filter = MinutesFilter::new(&["^adjournment$"]).unwrap();
        assert!(filter.apply(item("Adjournment", None)).is_none());
        assert!(filter.apply(item("Adjournment Resolution", None)).is_some());
    }

    #[test]
    fn empty_filter_passes_everything() {
        let filter = MinutesFilter::new::<&str>(&[]).unwrap();
        assert!(filter.apply(item("ADJOURNMENT", None)).is_some());
    }

    #[test]
    fn item_without_minutes_item_passes() {
        let filter = MinutesFilter::new(&["everything", ".*"]).unwrap();
        let bare = EventMinutesItem {
            index: Some(1),
            minutes_item: None,
            matter: None,
            decision: None,
            votes: Vec::new(),
            supporting_files: Vec::new(),
        };
        assert!(filter.apply(bare).is_some());
    }

    #[test]
    fn invalid_pattern_is_fatal() {
        let err = MinutesFilter::new(&["valid", "("]).unwrap_err();
        assert!(matches!(err, PipelineError::InvalidPattern { pattern, .. } if pattern == "("));
    }
}
