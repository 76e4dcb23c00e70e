pub mod new_project;
pub mod project;
pub mod project_changes;
pub mod project_id;
pub mod project_status;
