//! Decision classification for scraped vote, matter, and minutes text.
//!
//! Municipalities phrase the same outcome differently ("In Favor", "Yes",
//! "Approve"). A table of case-insensitive patterns maps the phrasing onto
//! the canonical decision constants, and every pattern can be replaced per
//! deployment.

use gavel_core::enums::{EventMinutesItemDecision, MatterStatusDecision, VoteDecision};
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::PipelineError;

// ── Default patterns ────────────────────────────────────────────────────────

const VOTE_APPROVE: &str = "approve|favor|yes";
const VOTE_ABSTAIN: &str = "abstain|refuse|refrain";
const VOTE_REJECT: &str = "reject|oppose|no";
const VOTE_ABSENT: &str = "absent";
const VOTE_NONVOTING: &str = "nv|(?:non.*voting)";

const MATTER_ADOPTED: &str = "approved|confirmed|passed|adopted|consent|(?:voted.*com+it+ee)";
const MATTER_IN_PROGRESS: &str = "heard|read|filed|held|(?:in.*com+it+ee)";
const MATTER_REJECTED: &str = "rejected|dropped";

const MINUTES_PASSED: &str = "pass";
const MINUTES_FAILED: &str = "not|fail";

/// Placeholder names in sponsor and vote rows, e.g. "No Sponsor Required".
const PLACEHOLDER_PERSON: &str = "no.*required";

// ── Overrides ───────────────────────────────────────────────────────────────

/// Per-deployment replacements for the default classification patterns.
///
/// `None` keeps the default. Overrides are compiled case-insensitively,
/// like the defaults.
#[derive(Debug, Clone, Default)]
pub struct PatternOverrides {
    pub vote_approve: Option<String>,
    pub vote_abstain: Option<String>,
    pub vote_reject: Option<String>,
    pub vote_absent: Option<String>,
    pub vote_nonvoting: Option<String>,
    pub matter_adopted: Option<String>,
    pub matter_in_progress: Option<String>,
    pub matter_rejected: Option<String>,
    pub minutes_passed: Option<String>,
    pub minutes_failed: Option<String>,
}

// ── Compiled patterns ───────────────────────────────────────────────────────

/// The compiled classification table for one deployment.
#[derive(Debug, Clone)]
pub struct DecisionPatterns {
    vote_approve: Regex,
    vote_abstain: Regex,
    vote_reject: Regex,
    vote_absent: Regex,
    vote_nonvoting: Regex,
    matter_adopted: Regex,
    matter_in_progress: Regex,
    matter_rejected: Regex,
    minutes_passed: Regex,
    minutes_failed: Regex,
    placeholder_person: Regex,
}

impl DecisionPatterns {
    /// Compile the default patterns with the given overrides applied.
    ///
    /// # Errors
    ///
    /// [`PipelineError::InvalidPattern`] when an override does not compile.
    pub fn new(overrides: &PatternOverrides) -> Result<Self, PipelineError> {
        fn pick<'a>(replacement: Option<&'a str>, default: &'a str) -> &'a str {
            replacement.unwrap_or(default)
        }
        Ok(Self {
            vote_approve: compile(pick(overrides.vote_approve.as_deref(), VOTE_APPROVE))?,
            vote_abstain: compile(pick(overrides.vote_abstain.as_deref(), VOTE_ABSTAIN))?,
            vote_reject: compile(pick(overrides.vote_reject.as_deref(), VOTE_REJECT))?,
            vote_absent: compile(pick(overrides.vote_absent.as_deref(), VOTE_ABSENT))?,
            vote_nonvoting: compile(pick(overrides.vote_nonvoting.as_deref(), VOTE_NONVOTING))?,
            matter_adopted: compile(pick(overrides.matter_adopted.as_deref(), MATTER_ADOPTED))?,
            matter_in_progress: compile(pick(
                overrides.matter_in_progress.as_deref(),
                MATTER_IN_PROGRESS,
            ))?,
            matter_rejected: compile(pick(overrides.matter_rejected.as_deref(), MATTER_REJECTED))?,
            minutes_passed: compile(pick(overrides.minutes_passed.as_deref(), MINUTES_PASSED))?,
            minutes_failed: compile(pick(overrides.minutes_failed.as_deref(), MINUTES_FAILED))?,
            placeholder_person: compile(PLACEHOLDER_PERSON)?,
        })
    }

    /// Compile the stock patterns.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the defaults are valid patterns.
    pub fn with_defaults() -> Result<Self, PipelineError> {
        Self::new(&PatternOverrides::default())
    }

    /// Classify a `VoteValueName` string.
    ///
    /// The base approve/reject classification combines with absent and
    /// abstain qualifiers into the qualified constants; a qualifier without
    /// a base decision needs a non-voting marker to classify at all.
    #[must_use]
    pub fn vote_decision(&self, value: &str) -> Option<VoteDecision> {
        if value.is_empty() {
            return None;
        }

        let mut decision = if self.vote_approve.is_match(value) {
            Some(VoteDecision::Approve)
        } else if self.vote_reject.is_match(value) {
            Some(VoteDecision::Reject)
        } else {
            None
        };

        let nonvoting = self.vote_nonvoting.is_match(value);

        if self.vote_absent.is_match(value) {
            decision = match decision {
                Some(VoteDecision::Approve) => Some(VoteDecision::AbsentApprove),
                Some(VoteDecision::Reject) => Some(VoteDecision::AbsentReject),
                None if nonvoting => Some(VoteDecision::AbsentNonVoting),
                other => other,
            };
        } else if self.vote_abstain.is_match(value) {
            decision = match decision {
                Some(VoteDecision::Approve) => Some(VoteDecision::AbstainApprove),
                Some(VoteDecision::Reject) => Some(VoteDecision::AbstainReject),
                None if nonvoting => Some(VoteDecision::AbstainNonVoting),
                other => other,
            };
        }

        if decision.is_none() {
            debug!(value, "could not classify vote value");
        }
        decision
    }

    /// Classify an `EventItemMatterStatus` string. Adopted patterns are
    /// tried first, then in-progress, then rejected.
    #[must_use]
    pub fn matter_status(&self, value: &str) -> Option<MatterStatusDecision> {
        if value.is_empty() {
            return None;
        }
        if self.matter_adopted.is_match(value) {
            return Some(MatterStatusDecision::Adopted);
        }
        if self.matter_in_progress.is_match(value) {
            return Some(MatterStatusDecision::InProgress);
        }
        if self.matter_rejected.is_match(value) {
            return Some(MatterStatusDecision::Rejected);
        }
        debug!(value, "could not classify matter status");
        None
    }

    /// Classify an `EventItemPassedFlagName` string. Passed patterns are
    /// tried before failed patterns.
    #[must_use]
    pub fn minutes_decision(&self, value: &str) -> Option<EventMinutesItemDecision> {
        if value.is_empty() {
            return None;
        }
        if self.minutes_passed.is_match(value) {
            return Some(EventMinutesItemDecision::Passed);
        }
        if self.minutes_failed.is_match(value) {
            return Some(EventMinutesItemDecision::Failed);
        }
        None
    }

    /// True for placeholder names in sponsor and vote rows.
    #[must_use]
    pub fn is_placeholder_person(&self, name: &str) -> bool {
        self.placeholder_person.is_match(name)
    }
}

pub(crate) fn compile(pattern: &str) -> Result<Regex, PipelineError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|source| PipelineError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}
