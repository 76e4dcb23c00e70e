use crate::{ApiError, CreateProjectRequest, ProjectValidator, UpdateProjectRequest};

use pm_config::ValidationConfig;
use pm_core::ProjectStatus;

use chrono::NaiveDate;
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, ok, some};

fn small_limits() -> ValidationConfig {
    ValidationConfig {
        max_name_length: 10,
        max_description_length: 20,
    }
}

fn field_of(error: ApiError) -> Option<String> {
    match error {
        ApiError::Validation { field, .. } => field,
        _ => None,
    }
}

#[test]
fn given_name_with_padding_when_validate_name_then_trimmed() {
    // Given
    let config = small_limits();
    let validator = ProjectValidator::new(&config);

    // When
    let result = validator.validate_name(Some("  Apollo  "));

    // Then
    assert_that!(result, ok(eq("Apollo")));
}

#[test]
fn given_missing_or_blank_name_when_validate_name_then_name_field_error() {
    // Given
    let config = small_limits();
    let validator = ProjectValidator::new(&config);

    // When
    let missing = validator.validate_name(None).unwrap_err();
    let blank = validator.validate_name(Some("   ")).unwrap_err();

    // Then
    assert_that!(field_of(missing), some(eq("name")));
    assert_that!(field_of(blank), some(eq("name")));
}

#[test]
fn given_name_at_limit_when_validate_name_then_ok() {
    // Given
    let config = small_limits();
    let validator = ProjectValidator::new(&config);

    // When / Then
    assert_that!(validator.validate_name(Some("abcdefghij")), ok(anything()));
    assert_that!(validator.validate_name(Some("abcdefghijk")), err(anything()));
}

#[test]
fn given_multibyte_name_when_validate_name_then_counts_characters() {
    // Given
    let config = small_limits();
    let validator = ProjectValidator::new(&config);

    // When: ten characters, more than ten bytes
    let result = validator.validate_name(Some("éééééééééé"));

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
fn given_long_description_when_validate_description_then_description_field_error() {
    // Given
    let config = small_limits();
    let validator = ProjectValidator::new(&config);

    // When
    let error = validator
        .validate_description(Some("this description is too long"))
        .unwrap_err();

    // Then
    assert_that!(field_of(error), some(eq("description")));
}

#[test]
fn given_create_request_without_status_when_converted_then_active_and_user_fallback() {
    // Given
    let config = ValidationConfig::default();
    let validator = ProjectValidator::new(&config);
    let req = CreateProjectRequest {
        name: Some("Apollo".into()),
        ..CreateProjectRequest::default()
    };

    // When
    let new = req
        .into_new_project(&validator, Some("alice".into()))
        .unwrap();

    // Then
    assert_that!(new.status, eq(ProjectStatus::Active));
    assert_that!(new.created_by.as_deref(), some(eq("alice")));
}

#[test]
fn given_create_request_with_created_by_when_converted_then_body_wins() {
    // Given
    let config = ValidationConfig::default();
    let validator = ProjectValidator::new(&config);
    let req = CreateProjectRequest {
        name: Some("Apollo".into()),
        created_by: Some("bob".into()),
        status: Some("onhold".into()),
        ..CreateProjectRequest::default()
    };

    // When
    let new = req
        .into_new_project(&validator, Some("alice".into()))
        .unwrap();

    // Then
    assert_that!(new.created_by.as_deref(), some(eq("bob")));
    assert_that!(new.status, eq(ProjectStatus::OnHold));
}

#[test]
fn given_inverted_dates_when_create_converted_then_end_date_error() {
    // Given
    let config = ValidationConfig::default();
    let validator = ProjectValidator::new(&config);
    let req = CreateProjectRequest {
        name: Some("Apollo".into()),
        start_date: NaiveDate::from_ymd_opt(2026, 5, 1),
        end_date: NaiveDate::from_ymd_opt(2026, 4, 1),
        ..CreateProjectRequest::default()
    };

    // When
    let error = req.into_new_project(&validator, None).unwrap_err();

    // Then
    assert_that!(field_of(error), some(eq("endDate")));
}

#[test]
fn given_empty_update_request_when_converted_then_only_fallback_user_set() {
    // Given
    let config = ValidationConfig::default();
    let validator = ProjectValidator::new(&config);

    // When
    let changes = UpdateProjectRequest::default()
        .into_changes(&validator, Some("alice".into()))
        .unwrap();

    // Then
    assert_that!(changes.name, none());
    assert_that!(changes.status, none());
    assert_that!(changes.updated_by.as_deref(), some(eq("alice")));
}

#[test]
fn given_update_with_bad_status_when_converted_then_status_field_error() {
    // Given
    let config = ValidationConfig::default();
    let validator = ProjectValidator::new(&config);
    let req = UpdateProjectRequest {
        status: Some("ARCHIVED".into()),
        ..UpdateProjectRequest::default()
    };

    // When
    let error = req.into_changes(&validator, None).unwrap_err();

    // Then
    assert_that!(field_of(error), some(eq("status")));
}

#[test]
fn given_update_with_blank_name_when_converted_then_name_field_error() {
    // Given
    let config = ValidationConfig::default();
    let validator = ProjectValidator::new(&config);
    let req = UpdateProjectRequest {
        name: Some("".into()),
        ..UpdateProjectRequest::default()
    };

    // When
    let error = req.into_changes(&validator, None).unwrap_err();

    // Then
    assert_that!(field_of(error), some(eq("name")));
}
