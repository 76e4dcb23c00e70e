//! Field limits applied to project payloads before they reach the store.

use crate::{ApiError, ApiResult};

use pm_config::ValidationConfig;

pub struct ProjectValidator<'a> {
    config: &'a ValidationConfig,
}

impl<'a> ProjectValidator<'a> {
    pub fn new(config: &'a ValidationConfig) -> Self {
        Self { config }
    }

    /// Name is required, trimmed, and at most `max_name_length` characters.
    #[track_caller]
    pub fn validate_name(&self, name: Option<&str>) -> ApiResult<String> {
        let name = name.map(str::trim).unwrap_or_default();

        if name.is_empty() {
            return Err(ApiError::validation("name is required", "name"));
        }

        let len = name.chars().count();
        if len > self.config.max_name_length {
            return Err(ApiError::validation(
                format!(
                    "name must be at most {} characters, got {}",
                    self.config.max_name_length, len
                ),
                "name",
            ));
        }

        Ok(name.to_string())
    }

    #[track_caller]
    pub fn validate_description(&self, description: Option<&str>) -> ApiResult<()> {
        let Some(description) = description else {
            return Ok(());
        };

        let len = description.chars().count();
        if len > self.config.max_description_length {
            return Err(ApiError::validation(
                format!(
                    "description must be at most {} characters, got {}",
                    self.config.max_description_length, len
                ),
                "description",
            ));
        }

        Ok(())
    }
}
