pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod project_fields;

pub use client::{Client, DEFAULT_SERVER_URL};
pub use error::{ClientError, Result as CliClientResult};
pub use project_fields::ProjectFields;
