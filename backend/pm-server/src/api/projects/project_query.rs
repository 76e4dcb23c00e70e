use serde::Deserialize;

/// `?projectId=` on update
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdQuery {
    pub project_id: String,
}

/// `?projectId=&status=` on status change
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateQuery {
    pub project_id: String,
    pub status: String,
}
