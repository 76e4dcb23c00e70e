pub mod create_project_request;
pub mod optional_date;
pub mod project_dto;
pub mod project_query;
#[allow(clippy::module_inception)]
pub mod projects;
pub mod update_project_request;
