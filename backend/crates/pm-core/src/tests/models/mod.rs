mod project;
mod project_id;
mod project_status;
