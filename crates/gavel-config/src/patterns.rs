//! Decision pattern overrides.
//!
//! Every field is an optional case-insensitive regex that replaces the
//! built-in classification pattern of the same name. Unset fields keep
//! the defaults, which fit most Legistar municipalities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PatternsSection {
    /// Vote value names that count as an approval.
    #[serde(default)]
    pub vote_approve: Option<String>,

    /// Vote value names that count as an abstention.
    #[serde(default)]
    pub vote_abstain: Option<String>,

    /// Vote value names that count as a rejection.
    #[serde(default)]
    pub vote_reject: Option<String>,

    /// Vote value names that mark the member absent.
    #[serde(default)]
    pub vote_absent: Option<String>,

    /// Vote value names that mark a non-voting member.
    #[serde(default)]
    pub vote_nonvoting: Option<String>,

    /// Matter status names that mean the matter was adopted.
    #[serde(default)]
    pub matter_adopted: Option<String>,

    /// Matter status names that mean the matter is still moving.
    #[serde(default)]
    pub matter_in_progress: Option<String>,

    /// Matter status names that mean the matter was rejected.
    #[serde(default)]
    pub matter_rejected: Option<String>,

    /// Minutes item outcomes that count as passed.
    #[serde(default)]
    pub minutes_passed: Option<String>,

    /// Minutes item outcomes that count as failed.
    #[serde(default)]
    pub minutes_failed: Option<String>,
}

impl PatternsSection {
    /// Check if any built-in pattern is overridden.
    #[must_use]
    pub fn is_customized(&self) -> bool {
        self.vote_approve.is_some()
            || self.vote_abstain.is_some()
            || self.vote_reject.is_some()
            || self.vote_absent.is_some()
            || self.vote_nonvoting.is_some()
            || self.matter_adopted.is_some()
            || self.matter_in_progress.is_some()
            || self.matter_rejected.is_some()
            || self.minutes_passed.is_some()
            || self.minutes_failed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_overrides() {
        assert!(!PatternsSection::default().is_customized());
    }

    #[test]
    fn any_single_override_counts_as_customized() {
        let section = PatternsSection {
            vote_approve: Some("aye".into()),
            ..Default::default()
        };
        assert!(section.is_customized());
    }
}
