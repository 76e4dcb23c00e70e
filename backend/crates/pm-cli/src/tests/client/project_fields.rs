use crate::ProjectFields;

use serde_json::json;

#[test]
fn test_unset_fields_are_omitted() {
    let fields = ProjectFields {
        name: Some("Apollo"),
        ..ProjectFields::default()
    };

    let value = serde_json::to_value(&fields).unwrap();

    assert_eq!(value, json!({ "name": "Apollo" }));
}

#[test]
fn test_fields_use_camel_case() {
    let fields = ProjectFields {
        start_date: Some("2026-01-05"),
        team_members: Some("alice, bob"),
        updated_by: Some("carol"),
        ..ProjectFields::default()
    };

    let value = serde_json::to_value(&fields).unwrap();

    assert_eq!(value["startDate"], "2026-01-05");
    assert_eq!(value["teamMembers"], "alice, bob");
    assert_eq!(value["updatedBy"], "carol");
}
