//! Project repository: ID allocation, persistence and status lookup.
//!
//! ## Identifier allocation
//!
//! Identifiers are `Sanvii-NNN`, where NNN is one more than the highest
//! number issued so far. The number is computed inside the `INSERT` itself,
//! so reading the last identifier and writing the next one happen under the
//! same write lock. Two concurrent creates can never be handed the same
//! identifier, and the primary key would reject it if they were.

use crate::{DbError, Result as DbErrorResult};

use pm_core::{NewProject, Project, ProjectId, ProjectStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const SELECT_COLUMNS: &str = r#"
    SELECT project_number, name, start_date, end_date, description, team_members,
        created_by, created_date, updated_by, updated_date, status
    FROM pm_projects
"#;

pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a project under the next free identifier and return it.
    ///
    /// `created_date` and `updated_date` are both set to `now`.
    pub async fn create(&self, new: &NewProject, now: DateTime<Utc>) -> DbErrorResult<Project> {
        let timestamp = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO pm_projects (
                    project_number, name, start_date, end_date, description, team_members,
                    created_by, created_date, updated_by, updated_date, status
                ) VALUES (
                    (SELECT COALESCE(MAX(project_number), 0) + 1 FROM pm_projects),
                    ?, ?, ?, ?, ?, ?, ?, NULL, ?, ?
                )
            "#,
        )
        .bind(&new.name)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(&new.description)
        .bind(&new.team_members)
        .bind(&new.created_by)
        .bind(timestamp)
        .bind(timestamp)
        .bind(new.status.as_str())
        .execute(&self.pool)
        .await?;

        // project_number is an INTEGER PRIMARY KEY, i.e. the rowid
        let id = ProjectId::from_number(result.last_insert_rowid()).map_err(|e| {
            DbError::Initialization {
                message: format!("Allocated project number is invalid: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let stored_at = timestamp_to_datetime(timestamp, "created_date")?;

        Ok(Project {
            id,
            name: new.name.clone(),
            start_date: new.start_date,
            end_date: new.end_date,
            description: new.description.clone(),
            team_members: new.team_members.clone(),
            created_by: new.created_by.clone(),
            created_date: stored_at,
            updated_by: None,
            updated_date: stored_at,
            status: new.status,
        })
    }

    pub async fn find_by_id(&self, id: ProjectId) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(&format!(
            "{SELECT_COLUMNS} WHERE project_number = ?"
        ))
        .bind(i64::from(id.number()))
        .fetch_optional(&self.pool)
        .await?;

        row.map(Project::try_from).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "{SELECT_COLUMNS} ORDER BY project_number"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn find_by_status(&self, status: ProjectStatus) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "{SELECT_COLUMNS} WHERE status = ? ORDER BY project_number"
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Highest identifier issued so far, `None` on an empty table.
    pub async fn last_project_id(&self) -> DbErrorResult<Option<ProjectId>> {
        let last: Option<i64> = sqlx::query_scalar("SELECT MAX(project_number) FROM pm_projects")
            .fetch_one(&self.pool)
            .await?;

        last.map(|n| {
            ProjectId::from_number(n).map_err(|e| DbError::Initialization {
                message: format!("Invalid project_number in pm_projects: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
        })
        .transpose()
    }

    /// Persist every mutable column of `project`. Identifier and
    /// `created_date` are never rewritten.
    pub async fn update(&self, project: &Project) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE pm_projects
                SET name = ?, start_date = ?, end_date = ?, description = ?,
                    team_members = ?, created_by = ?, updated_by = ?,
                    updated_date = ?, status = ?
                WHERE project_number = ?
            "#,
        )
        .bind(&project.name)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(&project.description)
        .bind(&project.team_members)
        .bind(&project.created_by)
        .bind(&project.updated_by)
        .bind(project.updated_date.timestamp())
        .bind(project.status.as_str())
        .bind(i64::from(project.id.number()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[derive(FromRow)]
struct ProjectRow {
    project_number: i64,
    name: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    description: Option<String>,
    team_members: Option<String>,
    created_by: Option<String>,
    created_date: i64,
    updated_by: Option<String>,
    updated_date: i64,
    status: String,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: ProjectRow) -> DbErrorResult<Self> {
        Ok(Project {
            id: ProjectId::from_number(r.project_number).map_err(|e| {
                DbError::Initialization {
                    message: format!("Invalid project_number in pm_projects: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
            name: r.name,
            start_date: r.start_date,
            end_date: r.end_date,
            description: r.description,
            team_members: r.team_members,
            created_by: r.created_by,
            created_date: timestamp_to_datetime(r.created_date, "created_date")?,
            updated_by: r.updated_by,
            updated_date: timestamp_to_datetime(r.updated_date, "updated_date")?,
            status: ProjectStatus::from_str(&r.status).map_err(|e| DbError::Initialization {
                message: format!("Invalid ProjectStatus in pm_projects.status: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
        })
    }
}

#[track_caller]
fn timestamp_to_datetime(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in pm_projects.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
