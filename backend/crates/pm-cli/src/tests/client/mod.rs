#[allow(clippy::module_inception)]
mod client;
mod project_fields;
