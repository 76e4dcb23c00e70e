use pm_core::{Project, ProjectStatus};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Project as it appears on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub project_id: String,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub team_members: Option<String>,
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: DateTime<Utc>,
    pub status: ProjectStatus,
}

impl From<Project> for ProjectDto {
    fn from(p: Project) -> Self {
        Self {
            project_id: p.id.to_string(),
            name: p.name,
            start_date: p.start_date,
            end_date: p.end_date,
            description: p.description,
            team_members: p.team_members,
            created_by: p.created_by,
            created_date: p.created_date,
            updated_by: p.updated_by,
            updated_date: p.updated_date,
            status: p.status,
        }
    }
}
