use crate::models::project::validate_schedule;
use crate::{ProjectStatus, Result as CoreErrorResult};

use chrono::NaiveDate;

/// Everything needed to insert a project except the fields the store
/// assigns itself (identifier and audit timestamps).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewProject {
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub team_members: Option<String>,
    pub created_by: Option<String>,
    pub status: ProjectStatus,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[track_caller]
    pub fn validate_schedule(&self) -> CoreErrorResult<()> {
        validate_schedule(self.start_date, self.end_date)
    }
}
