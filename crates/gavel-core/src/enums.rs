//! Decision and role-title constants for the ingestion schema.
//!
//! Each enum serializes to the canonical string the downstream civic-data
//! pipeline stores, so `as_str()` and the serde form always agree. Values
//! are produced by the pattern classifiers in `gavel-pipeline` and validated
//! against static reference data at load time.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// VoteDecision
// ---------------------------------------------------------------------------

/// How a single person voted on a minutes item.
///
/// Base decisions (`Approve`, `Reject`) combine with an absent or abstain
/// qualifier into the six qualified variants. `*NonVoting` covers members
/// recorded as present-but-not-voting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum VoteDecision {
    Approve,
    Reject,
    #[serde(rename = "Abstain (Approve)")]
    AbstainApprove,
    #[serde(rename = "Abstain (Reject)")]
    AbstainReject,
    #[serde(rename = "Abstain (Non-Voting)")]
    AbstainNonVoting,
    #[serde(rename = "Absent (Approve)")]
    AbsentApprove,
    #[serde(rename = "Absent (Reject)")]
    AbsentReject,
    #[serde(rename = "Absent (Non-Voting)")]
    AbsentNonVoting,
}

impl VoteDecision {
    /// Return the canonical string stored by the downstream pipeline.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
            Self::AbstainApprove => "Abstain (Approve)",
            Self::AbstainReject => "Abstain (Reject)",
            Self::AbstainNonVoting => "Abstain (Non-Voting)",
            Self::AbsentApprove => "Absent (Approve)",
            Self::AbsentReject => "Absent (Reject)",
            Self::AbsentNonVoting => "Absent (Non-Voting)",
        }
    }
}

impl fmt::Display for VoteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MatterStatusDecision
// ---------------------------------------------------------------------------

/// Status of a legislative matter after the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum MatterStatusDecision {
    Adopted,
    #[serde(rename = "In Progress")]
    InProgress,
    Rejected,
}

impl MatterStatusDecision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adopted => "Adopted",
            Self::InProgress => "In Progress",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for MatterStatusDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventMinutesItemDecision
// ---------------------------------------------------------------------------

/// Whether a minutes item passed or failed at the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum EventMinutesItemDecision {
    Passed,
    Failed,
}

impl EventMinutesItemDecision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for EventMinutesItemDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RoleTitle
// ---------------------------------------------------------------------------

/// Allowed standardized titles for a person's role on a body.
///
/// Static reference data must use one of these titles; the role sanitizer
/// maps free-text scraped titles onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RoleTitle {
    Councilmember,
    #[serde(rename = "Council President")]
    CouncilPresident,
    Chair,
    #[serde(rename = "Vice Chair")]
    ViceChair,
    Alternate,
    Supervisor,
    Member,
}

impl RoleTitle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Councilmember => "Councilmember",
            Self::CouncilPresident => "Council President",
            Self::Chair => "Chair",
            Self::ViceChair => "Vice Chair",
            Self::Alternate => "Alternate",
            Self::Supervisor => "Supervisor",
            Self::Member => "Member",
        }
    }

    /// Parse a title string, tolerating case and `_`/`-` word separators.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.to_lowercase().replace(['_', '-'], " ");
        let normalized = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            "councilmember" => Some(Self::Councilmember),
            "council president" => Some(Self::CouncilPresident),
            "chair" => Some(Self::Chair),
            "vice chair" => Some(Self::ViceChair),
            "alternate" => Some(Self::Alternate),
            "supervisor" => Some(Self::Supervisor),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

impl fmt::Display for RoleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(vote_approve, VoteDecision, VoteDecision::Approve, "Approve");
    test_serde_roundtrip!(
        vote_abstain_approve,
        VoteDecision,
        VoteDecision::AbstainApprove,
        "Abstain (Approve)"
    );
    test_serde_roundtrip!(
        vote_absent_non_voting,
        VoteDecision,
        VoteDecision::AbsentNonVoting,
        "Absent (Non-Voting)"
    );

    test_serde_roundtrip!(
        matter_in_progress,
        MatterStatusDecision,
        MatterStatusDecision::InProgress,
        "In Progress"
    );
    test_serde_roundtrip!(
        matter_adopted,
        MatterStatusDecision,
        MatterStatusDecision::Adopted,
        "Adopted"
    );

    test_serde_roundtrip!(
        emi_passed,
        EventMinutesItemDecision,
        EventMinutesItemDecision::Passed,
        "Passed"
    );

    test_serde_roundtrip!(
        role_council_president,
        RoleTitle,
        RoleTitle::CouncilPresident,
        "Council President"
    );
    test_serde_roundtrip!(role_vice_chair, RoleTitle, RoleTitle::ViceChair, "Vice Chair");

    #[test]
    fn role_title_parse_tolerates_case_and_separators() {
        assert_eq!(RoleTitle::parse("Councilmember"), Some(RoleTitle::Councilmember));
        assert_eq!(
            RoleTitle::parse("council_president"),
            Some(RoleTitle::CouncilPresident)
        );
        assert_eq!(RoleTitle::parse("VICE-CHAIR"), Some(RoleTitle::ViceChair));
        assert_eq!(RoleTitle::parse("  Member "), Some(RoleTitle::Member));
        assert_eq!(RoleTitle::parse("Mayor"), None);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", VoteDecision::AbstainReject), "Abstain (Reject)");
        assert_eq!(format!("{}", MatterStatusDecision::InProgress), "In Progress");
        assert_eq!(format!("{}", EventMinutesItemDecision::Failed), "Failed");
        assert_eq!(format!("{}", RoleTitle::Councilmember), "Councilmember");
    }
}
