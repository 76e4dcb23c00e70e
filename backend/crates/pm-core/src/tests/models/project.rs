use crate::{NewProject, Project, ProjectChanges, ProjectId, ProjectStatus};

use chrono::{Duration, NaiveDate, Utc};

fn sample_project() -> Project {
    let created = Utc::now() - Duration::days(1);
    Project {
        id: ProjectId::from_number(1).unwrap(),
        name: "Payroll".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 6, 30),
        description: Some("Payroll rewrite".to_string()),
        team_members: Some("Asha, Ravi".to_string()),
        created_by: Some("admin".to_string()),
        created_date: created,
        updated_by: None,
        updated_date: created,
        status: ProjectStatus::Active,
    }
}

#[test]
fn test_apply_changes_only_overwrites_present_fields() {
    let mut project = sample_project();
    let before = project.clone();
    let now = Utc::now();

    project.apply_changes(
        ProjectChanges {
            name: Some("Payroll v2".to_string()),
            updated_by: Some("ravi".to_string()),
            ..ProjectChanges::default()
        },
        now,
    );

    assert_eq!(project.name, "Payroll v2");
    assert_eq!(project.updated_by.as_deref(), Some("ravi"));
    assert_eq!(project.updated_date, now);
    assert_eq!(project.description, before.description);
    assert_eq!(project.team_members, before.team_members);
    assert_eq!(project.start_date, before.start_date);
    assert_eq!(project.end_date, before.end_date);
    assert_eq!(project.created_by, before.created_by);
    assert_eq!(project.created_date, before.created_date);
    assert_eq!(project.status, before.status);
    assert_eq!(project.id, before.id);
}

#[test]
fn test_apply_empty_changes_only_touches_updated_date() {
    let mut project = sample_project();
    let before = project.clone();
    let now = Utc::now();

    let changes = ProjectChanges::default();
    assert!(changes.is_empty());
    project.apply_changes(changes, now);

    assert_eq!(
        Project {
            updated_date: before.updated_date,
            ..project.clone()
        },
        before
    );
    assert_eq!(project.updated_date, now);
}

#[test]
fn test_set_status_keeps_updated_by_when_not_given() {
    let mut project = sample_project();
    project.updated_by = Some("asha".to_string());
    let now = Utc::now();

    project.set_status(ProjectStatus::OnHold, None, now);

    assert_eq!(project.status, ProjectStatus::OnHold);
    assert_eq!(project.updated_by.as_deref(), Some("asha"));
    assert_eq!(project.updated_date, now);
}

#[test]
fn test_validate_schedule_rejects_end_before_start() {
    let mut project = sample_project();
    assert!(project.validate_schedule().is_ok());

    project.end_date = NaiveDate::from_ymd_opt(2024, 12, 31);
    assert!(project.validate_schedule().is_err());
}

#[test]
fn test_validate_schedule_allows_open_ranges() {
    let mut new_project = NewProject::new("Open ended");
    new_project.start_date = NaiveDate::from_ymd_opt(2025, 3, 1);
    assert!(new_project.validate_schedule().is_ok());

    new_project.end_date = new_project.start_date;
    assert!(new_project.validate_schedule().is_ok());
}

#[test]
fn test_new_project_defaults_to_active() {
    let new_project = NewProject::new("Intranet");

    assert_eq!(new_project.name, "Intranet");
    assert_eq!(new_project.status, ProjectStatus::Active);
    assert!(new_project.created_by.is_none());
}
