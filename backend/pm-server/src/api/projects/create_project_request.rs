use crate::api::projects::optional_date;
use crate::{ApiResult, ProjectValidator};

use pm_core::{NewProject, ProjectStatus};

use chrono::NaiveDate;
use serde::Deserialize;

/// Body of `POST /project/create`.
///
/// Server-owned fields a client might echo back (`projectId`,
/// `createdDate`, `updatedDate`) are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Required; optional here so a missing name is reported as a field error
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "optional_date::deserialize")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "optional_date::deserialize")]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub team_members: Option<String>,

    #[serde(default)]
    pub created_by: Option<String>,

    /// Defaults to ACTIVE
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateProjectRequest {
    /// Validate and turn into the insert payload. `fallback_user` fills
    /// `createdBy` when the body leaves it out.
    pub fn into_new_project(
        self,
        validator: &ProjectValidator<'_>,
        fallback_user: Option<String>,
    ) -> ApiResult<NewProject> {
        let name = validator.validate_name(self.name.as_deref())?;
        validator.validate_description(self.description.as_deref())?;

        let status = match self.status {
            Some(ref s) => s.parse::<ProjectStatus>()?,
            None => ProjectStatus::default(),
        };

        let new = NewProject {
            name,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            team_members: self.team_members,
            created_by: self.created_by.or(fallback_user),
            status,
        };
        new.validate_schedule()?;

        Ok(new)
    }
}
