use crate::api::projects::optional_date;
use crate::{ApiResult, ProjectValidator};

use pm_core::{ProjectChanges, ProjectStatus};

use chrono::NaiveDate;
use serde::Deserialize;

/// Body of `PUT /project/update`. Absent or null fields are left untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
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

    #[serde(default)]
    pub updated_by: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateProjectRequest {
    /// Validate the fields that are present. `fallback_user` fills
    /// `updatedBy` when the body leaves it out.
    pub fn into_changes(
        self,
        validator: &ProjectValidator<'_>,
        fallback_user: Option<String>,
    ) -> ApiResult<ProjectChanges> {
        let name = self
            .name
            .as_deref()
            .map(|name| validator.validate_name(Some(name)))
            .transpose()?;
        validator.validate_description(self.description.as_deref())?;

        let status = self
            .status
            .as_deref()
            .map(str::parse::<ProjectStatus>)
            .transpose()?;

        Ok(ProjectChanges {
            name,
            start_date: self.start_date,
            end_date: self.end_date,
            description: self.description,
            team_members: self.team_members,
            created_by: self.created_by,
            updated_by: self.updated_by.or(fallback_user),
            status,
        })
    }
}
