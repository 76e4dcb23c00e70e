//! pm-cli library
//!
//! Exports the HTTP client and the clap command tree used by the `pm` binary.

pub mod cli;
pub(crate) mod client;
pub mod commands;
pub mod project_commands;

#[cfg(test)]
mod tests;

pub use client::{CliClientResult, Client, ClientError, DEFAULT_SERVER_URL, ProjectFields};
