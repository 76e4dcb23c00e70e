pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::new_project::NewProject;
pub use models::project::Project;
pub use models::project_changes::ProjectChanges;
pub use models::project_id::{PROJECT_ID_PREFIX, ProjectId};
pub use models::project_status::ProjectStatus;
