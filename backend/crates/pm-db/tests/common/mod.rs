#![allow(dead_code)]

use pm_core::{NewProject, ProjectStatus};

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    pm_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool")
}

/// Creates a NewProject with sensible defaults
pub fn create_test_new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 1, 6),
        end_date: NaiveDate::from_ymd_opt(2025, 12, 19),
        description: Some(format!("{} description", name)),
        team_members: Some("Asha, Ravi, Meera".to_string()),
        created_by: Some("admin".to_string()),
        status: ProjectStatus::Active,
    }
}

/// Creates a NewProject with the given status
pub fn create_test_new_project_with_status(name: &str, status: ProjectStatus) -> NewProject {
    NewProject {
        status,
        ..create_test_new_project(name)
    }
}
