pub mod error;
pub mod extractors;
pub mod projects;
pub mod validation;
