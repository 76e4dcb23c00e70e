use crate::{client::DEFAULT_SERVER_URL, commands::Commands};

use clap::Parser;

#[derive(Parser)]
#[command(name = "pm")]
#[command(about = "Command-line client for the Sanvii project tracker")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Gateway or project service URL
    #[arg(long, global = true, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Sent as X-User-Id; recorded as createdBy / updatedBy when not given
    #[arg(long, global = true)]
    pub user_id: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
