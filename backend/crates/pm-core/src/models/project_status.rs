use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    /// Project is running
    #[default]
    Active,
    /// Project was switched off and is hidden from the default views
    Inactive,
    /// Project reached its end date with all work delivered
    Completed,
    /// Project is paused
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::Inactive,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Completed => "COMPLETED",
            Self::OnHold => "ONHOLD",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::InvalidProjectStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
