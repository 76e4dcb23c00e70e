use crate::ProjectStatus;

use std::str::FromStr;

#[test]
fn test_project_status_as_str() {
    assert_eq!(ProjectStatus::Active.as_str(), "ACTIVE");
    assert_eq!(ProjectStatus::Inactive.as_str(), "INACTIVE");
    assert_eq!(ProjectStatus::Completed.as_str(), "COMPLETED");
    assert_eq!(ProjectStatus::OnHold.as_str(), "ONHOLD");
}

#[test]
fn test_project_status_from_str() {
    for status in ProjectStatus::ALL {
        assert_eq!(ProjectStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(ProjectStatus::from_str("invalid").is_err());
    assert!(ProjectStatus::from_str("").is_err());
}

#[test]
fn test_project_status_from_str_ignores_case() {
    assert_eq!(
        ProjectStatus::from_str("onHold").unwrap(),
        ProjectStatus::OnHold
    );
    assert_eq!(
        ProjectStatus::from_str("inactive").unwrap(),
        ProjectStatus::Inactive
    );
}

#[test]
fn test_project_status_default() {
    assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
}

#[test]
fn test_project_status_serde_uses_upper_case() {
    assert_eq!(
        serde_json::to_string(&ProjectStatus::OnHold).unwrap(),
        "\"ONHOLD\""
    );
    let parsed: ProjectStatus = serde_json::from_str("\"COMPLETED\"").unwrap();
    assert_eq!(parsed, ProjectStatus::Completed);
}
