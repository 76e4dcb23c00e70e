use crate::ProjectFields;

use clap::{Args, Subcommand};

/// Optional project fields shared by `create` and `update`
#[derive(Args, Debug, Default)]
pub struct ProjectFieldArgs {
    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Free text, e.g. "alice, bob"
    #[arg(long)]
    pub team_members: Option<String>,
    /// ACTIVE, INACTIVE, COMPLETED or ONHOLD
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Create a project; the server assigns the ID
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        created_by: Option<String>,
        #[command(flatten)]
        fields: ProjectFieldArgs,
    },
    /// Update only the given fields of a project
    Update {
        /// Project ID (e.g. Sanvii-001)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        created_by: Option<String>,
        #[arg(long)]
        updated_by: Option<String>,
        #[command(flatten)]
        fields: ProjectFieldArgs,
    },
    /// List projects, optionally filtered by status
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a project by ID
    Get {
        /// Project ID (e.g. Sanvii-001)
        id: String,
    },
    /// Set a project's status
    SetStatus {
        /// Project ID (e.g. Sanvii-001)
        id: String,
        /// ACTIVE, INACTIVE, COMPLETED or ONHOLD
        status: String,
    },
    /// Mark a project ACTIVE
    Activate { id: String },
    /// Mark a project INACTIVE
    Deactivate { id: String },
}

impl ProjectFieldArgs {
    /// Borrow as a request payload with the given name and audit fields
    pub fn as_fields<'a>(
        &'a self,
        name: Option<&'a str>,
        created_by: Option<&'a str>,
        updated_by: Option<&'a str>,
    ) -> ProjectFields<'a> {
        ProjectFields {
            name,
            start_date: self.start_date.as_deref(),
            end_date: self.end_date.as_deref(),
            description: self.description.as_deref(),
            team_members: self.team_members.as_deref(),
            created_by,
            updated_by,
            status: self.status.as_deref(),
        }
    }
}
