use crate::ApiError;

use pm_core::{CoreError, ProjectId, ProjectStatus};
use pm_db::DbError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Project Sanvii-007 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Project Sanvii-007 not found");
    assert!(json["error"].get("field").is_none());
}

#[test]
fn test_not_found_records_the_calling_line() {
    let line = line!() + 1;
    let error = ApiError::not_found("Project Sanvii-009 not found");

    let ApiError::NotFound { location, .. } = error else {
        panic!("Expected NotFound");
    };
    assert_eq!(location.file, file!());
    assert_eq!(location.line, line);
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("name is required", "name");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Failed to parse the request body as JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_invalid_status_converts_to_validation_on_status_field() {
    let core_err = "ARCHIVED".parse::<ProjectStatus>().unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { message, field, .. } => {
            assert!(message.contains("ARCHIVED"));
            assert_eq!(field.as_deref(), Some("status"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_invalid_project_id_converts_to_validation_on_project_id_field() {
    let core_err = "Project-1".parse::<ProjectId>().unwrap_err();
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("projectId"));
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_core_validation_keeps_field() {
    let core_err = CoreError::Validation {
        message: "endDate is before startDate".into(),
        field: Some("endDate".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let api_err: ApiError = core_err.into();

    match api_err {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("endDate")),
        _ => panic!("Expected Validation error"),
    }
}

#[tokio::test]
async fn test_db_error_hides_details() {
    let db_err = DbError::from(sqlx::Error::PoolTimedOut);
    let api_err: ApiError = db_err.into();

    let (status, json) = body_json(api_err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], "Database operation failed");
}

#[test]
fn test_row_not_found_converts_to_not_found() {
    let db_err = DbError::from(sqlx::Error::RowNotFound);
    let api_err: ApiError = db_err.into();

    assert!(matches!(api_err, ApiError::NotFound { .. }));
}
