//! Project REST API handlers
//!
//! Paths and parameter names follow what the web front end already calls,
//! including the mixed-case `/project/UpdateStatus`.

use crate::{
    ApiError, ApiResult, AppState, CreateProjectRequest, ProjectDto, ProjectIdQuery,
    ProjectValidator, StatusUpdateQuery, UpdateProjectRequest, UserId,
};

use pm_core::{ProjectId, ProjectStatus};
use pm_db::ProjectRepository;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use chrono::Utc;
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /project/create
///
/// Create a project. The identifier, audit timestamps and (by default)
/// the ACTIVE status are assigned here, never taken from the body.
pub async fn create_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Json(req) = payload?;

    let validator = ProjectValidator::new(&state.validation);
    let new = req.into_new_project(&validator, user_id)?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo.create(&new, Utc::now()).await?;

    info!(
        "Created project {} '{}' ({})",
        project.id, project.name, project.status
    );

    Ok(Json(project.into()))
}

/// PUT /project/update?projectId=
///
/// Partial update: only fields present in the body overwrite stored values.
pub async fn update_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    query: Result<Query<ProjectIdQuery>, QueryRejection>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Query(query) = query?;
    let Json(req) = payload?;

    apply_update(&state, &query.project_id, user_id, req).await
}

/// PUT /project/update/{id}
pub async fn update_project_by_path(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = path?;
    let Json(req) = payload?;

    apply_update(&state, &id, user_id, req).await
}

/// GET /project/all
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDto>>> {
    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_all().await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// GET /project/{id}
pub async fn get_project(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = path?;
    let project_id: ProjectId = id.parse()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| project_not_found(project_id))?;

    Ok(Json(project.into()))
}

/// PUT /project/UpdateStatus?projectId=&status=
pub async fn update_project_status(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    query: Result<Query<StatusUpdateQuery>, QueryRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Query(query) = query?;
    let status: ProjectStatus = query.status.parse()?;

    change_status(&state, &query.project_id, status, user_id).await
}

/// GET /project/getByStatus/{status}
pub async fn list_projects_by_status(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Vec<ProjectDto>>> {
    let Path(status) = path?;
    let status: ProjectStatus = status.parse()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let projects = repo.find_by_status(status).await?;

    Ok(Json(projects.into_iter().map(ProjectDto::from).collect()))
}

/// PATCH /project/activate/{id}
pub async fn activate_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = path?;
    change_status(&state, &id, ProjectStatus::Active, user_id).await
}

/// PATCH /project/deactivate/{id}
pub async fn deactivate_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<ProjectDto>> {
    let Path(id) = path?;
    change_status(&state, &id, ProjectStatus::Inactive, user_id).await
}

// =============================================================================
// Helpers
// =============================================================================

async fn apply_update(
    state: &AppState,
    id: &str,
    user_id: Option<String>,
    req: UpdateProjectRequest,
) -> ApiResult<Json<ProjectDto>> {
    let project_id: ProjectId = id.parse()?;

    let validator = ProjectValidator::new(&state.validation);
    let changes = req.into_changes(&validator, user_id)?;
    if changes.is_empty() {
        debug!("Update of {} carries no field changes", project_id);
    }

    let repo = ProjectRepository::new(state.pool.clone());
    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| project_not_found(project_id))?;

    project.apply_changes(changes, Utc::now());
    // Dates may come from different requests, so check the merged record
    project.validate_schedule()?;

    repo.update(&project).await?;
    info!("Updated project {}", project.id);

    Ok(Json(project.into()))
}

async fn change_status(
    state: &AppState,
    id: &str,
    status: ProjectStatus,
    user_id: Option<String>,
) -> ApiResult<Json<ProjectDto>> {
    let project_id: ProjectId = id.parse()?;

    let repo = ProjectRepository::new(state.pool.clone());
    let mut project = repo
        .find_by_id(project_id)
        .await?
        .ok_or_else(|| project_not_found(project_id))?;

    let previous = project.status;
    project.set_status(status, user_id, Utc::now());
    repo.update(&project).await?;

    info!("Project {} status {} -> {}", project.id, previous, status);

    Ok(Json(project.into()))
}

#[track_caller]
fn project_not_found(project_id: ProjectId) -> ApiError {
    ApiError::not_found(format!("Project {} not found", project_id))
}
