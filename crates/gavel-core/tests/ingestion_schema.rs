//! JSON Schema generation for the ingestion-model contract.

use gavel_core::entities::EventIngestionModel;
use schemars::schema_for;

#[test]
fn event_schema_names_the_nested_records() {
    let schema = schema_for!(EventIngestionModel);
    let json = serde_json::to_value(&schema).unwrap();

    assert_eq!(json["title"], "EventIngestionModel");
    let properties = json["properties"].as_object().unwrap();
    assert!(properties.contains_key("body"));
    assert!(properties.contains_key("sessions"));
    assert!(properties.contains_key("event_minutes_items"));

    let defs = json["$defs"].as_object().unwrap();
    assert!(defs.contains_key("Person"));
    assert!(defs.contains_key("VoteDecision"));
}
