pub mod api;
pub mod app_state;
pub mod cors;
pub mod error;
pub mod health;
pub mod request_logging;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::UserId,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        project_query::{ProjectIdQuery, StatusUpdateQuery},
        projects::{
            activate_project, create_project, deactivate_project, get_project,
            list_projects, list_projects_by_status, update_project, update_project_by_path,
            update_project_status,
        },
        update_project_request::UpdateProjectRequest,
    },
    validation::ProjectValidator,
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;
