//! pm - Sanvii project tracker CLI
//!
//! Talks to the gateway (or the project service directly) and prints the
//! JSON responses.
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! pm project list --pretty
//!
//! # Create a project
//! pm project create --name "Apollo" --start-date 2026-01-05 --team-members "alice, bob"
//!
//! # Complete it
//! pm project set-status Sanvii-001 COMPLETED
//! ```

use pm_cli::{Client, cli::Cli, commands::Commands, project_commands::ProjectCommands};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let client = Client::new(&cli.server, cli.user_id.as_deref());

    let result = match cli.command {
        Commands::Project { action } => match action {
            ProjectCommands::Create {
                name,
                created_by,
                fields,
            } => {
                let body = fields.as_fields(Some(name.as_str()), created_by.as_deref(), None);
                client.create_project(&body).await
            }
            ProjectCommands::Update {
                id,
                name,
                created_by,
                updated_by,
                fields,
            } => {
                let body = fields.as_fields(
                    name.as_deref(),
                    created_by.as_deref(),
                    updated_by.as_deref(),
                );
                client.update_project(&id, &body).await
            }
            ProjectCommands::List { status } => match status {
                Some(status) => client.list_projects_by_status(&status).await,
                None => client.list_projects().await,
            },
            ProjectCommands::Get { id } => client.get_project(&id).await,
            ProjectCommands::SetStatus { id, status } => {
                client.update_project_status(&id, &status).await
            }
            ProjectCommands::Activate { id } => client.activate_project(&id).await,
            ProjectCommands::Deactivate { id } => client.deactivate_project(&id).await,
        },
    };

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
