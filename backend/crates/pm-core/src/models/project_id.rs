//! Human-readable project identifier.
//!
//! Identifiers look like `Sanvii-001`: a fixed prefix, a dash and a decimal
//! sequence number zero-padded to three digits. Numbers past 999 simply grow
//! wider (`Sanvii-1000`). The number is the storage key, so ordering is
//! always numeric even though the wire form is a string. Parsing accepts
//! only that canonical form; `Sanvii-5` and `Sanvii-0005` are rejected.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const PROJECT_ID_PREFIX: &str = "Sanvii";

/// Minimum digits in the formatted sequence number
const SEQUENCE_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId(u32);

impl ProjectId {
    /// Build an identifier from its sequence number.
    #[track_caller]
    pub fn from_number(number: i64) -> CoreErrorResult<Self> {
        u32::try_from(number)
            .ok()
            .filter(|n| *n > 0)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidProjectId {
                value: number.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Sequence number (the numeric suffix)
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl FromStr for ProjectId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        let invalid = || CoreError::InvalidProjectId {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        let digits = s
            .strip_prefix(PROJECT_ID_PREFIX)
            .and_then(|rest| rest.strip_prefix('-'))
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(invalid)?;

        // Only the canonical spelling is accepted: one string per project
        match digits.parse::<u32>() {
            Ok(n) if n > 0 && Self(n).to_string() == s => Ok(Self(n)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for ProjectId {
    type Error = CoreError;

    fn try_from(value: String) -> CoreErrorResult<Self> {
        value.parse()
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.to_string()
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{:0width$}",
            PROJECT_ID_PREFIX,
            self.0,
            width = SEQUENCE_WIDTH
        )
    }
}
