use crate::ProjectStatus;

use chrono::NaiveDate;

/// Partial update. `None` means "leave as is"; there is no way to clear an
/// optional field through a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectChanges {
    pub name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub team_members: Option<String>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl ProjectChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
