//! Project entity - the tracked unit of work.

use crate::{CoreError, ProjectChanges, ProjectId, ProjectStatus, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;

/// A project as stored. The store assigns identifiers on insert; see
/// [`crate::NewProject`] for the insert shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    /// Free text, typically a comma separated list of names
    pub team_members: Option<String>,
    pub created_by: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_by: Option<String>,
    pub updated_date: DateTime<Utc>,
    pub status: ProjectStatus,
}

impl Project {
    /// Overwrite every field present in `changes`, leaving the rest untouched.
    ///
    /// `updated_date` is refreshed even when `changes` is empty.
    pub fn apply_changes(&mut self, changes: ProjectChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(start_date) = changes.start_date {
            self.start_date = Some(start_date);
        }
        if let Some(end_date) = changes.end_date {
            self.end_date = Some(end_date);
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(team_members) = changes.team_members {
            self.team_members = Some(team_members);
        }
        if let Some(created_by) = changes.created_by {
            self.created_by = Some(created_by);
        }
        if let Some(updated_by) = changes.updated_by {
            self.updated_by = Some(updated_by);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_date = now;
    }

    /// Status-only transition.
    pub fn set_status(
        &mut self,
        status: ProjectStatus,
        updated_by: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.status = status;
        if updated_by.is_some() {
            self.updated_by = updated_by;
        }
        self.updated_date = now;
    }

    /// Check that the schedule is not inverted.
    #[track_caller]
    pub fn validate_schedule(&self) -> CoreErrorResult<()> {
        validate_schedule(self.start_date, self.end_date)
    }
}

/// An end date before the start date is rejected; open ranges are fine.
#[track_caller]
pub fn validate_schedule(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> CoreErrorResult<()> {
    if let (Some(start), Some(end)) = (start_date, end_date)
        && end < start
    {
        return Err(CoreError::Validation {
            message: format!("endDate {} is before startDate {}", end, start),
            field: Some("endDate".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
