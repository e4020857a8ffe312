//! Legistar wire records.
//!
//! Field names mirror the Legistar Web API JSON payloads. Fields holding
//! another record (`EventBodyInfo`, `EventItems`, `EventItemVoteInfo`,
//! `PersonInfo`, `OfficeRecordInfo`, `OfficeRecordBodyInfo`,
//! `MatterSponsorInfo`, `SponsorPersonInfo`) are not part of the raw
//! payloads; the client attaches them during expansion. Unknown payload
//! fields are ignored, so these structs stay stable as municipalities
//! enable extra InSite columns.

use serde::Deserialize;

/// One row from `/Events`, with items and body attached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEvent {
    pub event_id: i64,
    pub event_body_id: Option<i64>,
    /// Naive local date, e.g. `2021-06-07T00:00:00`.
    pub event_date: Option<String>,
    /// Clock time of day, e.g. `9:30 AM`.
    pub event_time: Option<String>,
    pub event_video_path: Option<String>,
    pub event_agenda_file: Option<String>,
    pub event_minutes_file: Option<String>,
    /// Attached from `/Bodies/{EventBodyId}`.
    pub event_body_info: Option<RawBody>,
    /// Attached from `/Events/{EventId}/EventItems`.
    #[serde(default)]
    pub event_items: Vec<RawEventItem>,
}

/// One row from `/Events/{id}/EventItems`, with votes and sponsors attached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawEventItem {
    pub event_item_id: i64,
    pub event_item_title: Option<String>,
    /// Position of this item in the published minutes document.
    pub event_item_minutes_sequence: Option<u32>,
    pub event_item_passed_flag_name: Option<String>,
    pub event_item_matter_id: Option<i64>,
    pub event_item_matter_file: Option<String>,
    pub event_item_matter_name: Option<String>,
    pub event_item_matter_type: Option<String>,
    pub event_item_matter_status: Option<String>,
    #[serde(default)]
    pub event_item_matter_attachments: Vec<RawAttachment>,
    /// Attached from `/EventItems/{EventItemId}/Votes`.
    #[serde(default)]
    pub event_item_vote_info: Vec<RawVote>,
    /// Attached from `/Matters/{EventItemMatterId}/Sponsors`; `None` when
    /// the item has no matter.
    pub matter_sponsor_info: Option<Vec<RawSponsor>>,
}

/// A document attached to a matter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawAttachment {
    pub matter_attachment_id: Option<i64>,
    pub matter_attachment_name: Option<String>,
    pub matter_attachment_hyperlink: Option<String>,
}

/// One row from `/EventItems/{id}/Votes`, with the voter attached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawVote {
    pub vote_id: Option<i64>,
    pub vote_person_id: Option<i64>,
    pub vote_value_id: Option<i64>,
    pub vote_value_name: Option<String>,
    /// Attached from `/Persons/{VotePersonId}`.
    pub person_info: Option<RawPerson>,
}

/// One row from `/Persons`, with office records attached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawPerson {
    pub person_id: Option<i64>,
    pub person_full_name: Option<String>,
    pub person_email: Option<String>,
    pub person_phone: Option<String>,
    #[serde(rename = "PersonWWW")]
    pub person_www: Option<String>,
    /// 1 for currently serving, 0 otherwise.
    pub person_active_flag: Option<i64>,
    /// Attached from `/Persons/{PersonId}/OfficeRecords`; `None` when the
    /// records fetch failed.
    pub office_record_info: Option<Vec<RawOfficeRecord>>,
}

/// One row from `/Persons/{id}/OfficeRecords`, with the body attached.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawOfficeRecord {
    pub office_record_id: Option<i64>,
    pub office_record_title: Option<String>,
    /// Naive local timestamp, e.g. `2020-01-01T00:00:00`.
    pub office_record_start_date: Option<String>,
    pub office_record_end_date: Option<String>,
    pub office_record_body_id: Option<i64>,
    /// Attached from `/Bodies/{OfficeRecordBodyId}`.
    pub office_record_body_info: Option<RawBody>,
}

/// One row from `/Bodies`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawBody {
    pub body_id: Option<i64>,
    pub body_name: Option<String>,
    /// 1 for active, 0 otherwise.
    pub body_active_flag: Option<i64>,
}

/// One row from `/Matters/{id}/Sponsors`, with the person attached.
///
/// Legistar sponsor rows carry only a person id reference.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawSponsor {
    pub matter_sponsor_name_id: Option<i64>,
    /// Attached from `/Persons/{MatterSponsorNameId}`.
    pub sponsor_person_info: Option<RawPerson>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EVENTS_FIXTURE: &str = r#"[
        {
            "EventId": 4651,
            "EventGuid": "7B250C21-AEDF-4AEB-9FF7-D6D2C1C37420",
            "EventLastModifiedUtc": "2021-06-08T01:05:40.137",
            "EventBodyId": 138,
            "EventDate": "2021-06-07T00:00:00",
            "EventTime": "2:00 PM",
            "EventVideoPath": null,
            "EventAgendaFile": "http://legistar2.granicus.com/seattle/meetings/2021/6/4651_A.pdf",
            "EventMinutesFile": "http://legistar2.granicus.com/seattle/meetings/2021/6/4651_M.pdf",
            "EventInSiteURL": "https://seattle.legistar.com/MeetingDetail.aspx?ID=863944"
        },
        {
            "EventId": 4658,
            "EventBodyId": 139,
            "EventDate": "2021-06-09T00:00:00",
            "EventTime": null
        }
    ]"#;

    const ITEMS_FIXTURE: &str = r#"[
        {
            "EventItemId": 82287,
            "EventItemTitle": "CB 120108 - An ordinance relating to the transfer of city property",
            "EventItemMinutesSequence": 6,
            "EventItemPassedFlagName": "Pass",
            "EventItemMatterId": 11975,
            "EventItemMatterFile": "CB 120108",
            "EventItemMatterName": "Vacant building monitoring program",
            "EventItemMatterType": "Council Bill (CB)",
            "EventItemMatterStatus": "Passed",
            "EventItemMatterAttachments": [
                {
                    "MatterAttachmentId": 12237,
                    "MatterAttachmentName": "Summary and Fiscal Note",
                    "MatterAttachmentHyperlink": "http://legistar2.granicus.com/seattle/attachments/12237.docx"
                }
            ]
        }
    ]"#;

    const PERSON_FIXTURE: &str = r#"{
        "PersonId": 677,
        "PersonGuid": "A1F55A3C-BC26-4EAF-B2B6-B524B0E93E85",
        "PersonFullName": "Alex Pedersen",
        "PersonEmail": "Alex.Pedersen@seattle.gov",
        "PersonPhone": "(206) 684-8804",
        "PersonWWW": "http://www.seattle.gov/council/pedersen",
        "PersonActiveFlag": 1
    }"#;

    const VOTES_FIXTURE: &str = r#"[
        {
            "VoteId": 49220,
            "VotePersonId": 677,
            "VoteValueId": 16,
            "VoteValueName": "In Favor"
        },
        {
            "VoteId": 49221,
            "VotePersonId": 684,
            "VoteValueId": null,
            "VoteValueName": null
        }
    ]"#;

    #[test]
    fn parse_events_page() {
        let events: Vec<RawEvent> = serde_json::from_str(EVENTS_FIXTURE).unwrap();
        assert_eq!(events.len(), 2);

        let first = &events[0];
        assert_eq!(first.event_id, 4651);
        assert_eq!(first.event_body_id, Some(138));
        assert_eq!(first.event_date.as_deref(), Some("2021-06-07T00:00:00"));
        assert_eq!(first.event_time.as_deref(), Some("2:00 PM"));
        assert_eq!(first.event_video_path, None);
        assert!(first.event_items.is_empty());
        assert!(first.event_body_info.is_none());

        assert_eq!(events[1].event_time, None);
        assert_eq!(events[1].event_agenda_file, None);
    }

    #[test]
    fn parse_event_items_with_attachments() {
        let items: Vec<RawEventItem> = serde_json::from_str(ITEMS_FIXTURE).unwrap();
        let item = &items[0];
        assert_eq!(item.event_item_id, 82287);
        assert_eq!(item.event_item_minutes_sequence, Some(6));
        assert_eq!(item.event_item_matter_file.as_deref(), Some("CB 120108"));
        assert_eq!(item.event_item_matter_status.as_deref(), Some("Passed"));
        assert_eq!(item.event_item_matter_attachments.len(), 1);
        assert_eq!(
            item.event_item_matter_attachments[0]
                .matter_attachment_name
                .as_deref(),
            Some("Summary and Fiscal Note")
        );
        assert!(item.event_item_vote_info.is_empty());
        assert!(item.matter_sponsor_info.is_none());
    }

    #[test]
    fn parse_person() {
        let person: RawPerson = serde_json::from_str(PERSON_FIXTURE).unwrap();
        assert_eq!(person.person_id, Some(677));
        assert_eq!(person.person_full_name.as_deref(), Some("Alex Pedersen"));
        assert_eq!(person.person_phone.as_deref(), Some("(206) 684-8804"));
        assert_eq!(
            person.person_www.as_deref(),
            Some("http://www.seattle.gov/council/pedersen")
        );
        assert_eq!(person.person_active_flag, Some(1));
        assert!(person.office_record_info.is_none());
    }

    #[test]
    fn parse_votes_with_null_values() {
        let votes: Vec<RawVote> = serde_json::from_str(VOTES_FIXTURE).unwrap();
        assert_eq!(votes.len(), 2);
        assert_eq!(votes[0].vote_value_name.as_deref(), Some("In Favor"));
        assert_eq!(votes[1].vote_value_id, None);
        assert_eq!(votes[1].vote_value_name, None);
        assert!(votes[1].person_info.is_none());
    }
}
