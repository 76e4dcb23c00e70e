use crate::{Client, DEFAULT_SERVER_URL};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8082/", None);
    assert_eq!(client.base_url, "http://localhost:8082");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8082", None);
    assert_eq!(client.base_url, "http://localhost:8082");
}

#[test]
fn test_user_id_stored() {
    let client = Client::new("http://localhost:8082", Some("alice"));
    assert_eq!(client.user_id, Some("alice".to_string()));
}

#[test]
fn test_user_id_none() {
    let client = Client::new("http://localhost:8082", None);
    assert!(client.user_id.is_none());
}

#[test]
fn test_default_server_is_gateway() {
    assert_eq!(DEFAULT_SERVER_URL, "http://127.0.0.1:8082");
}

#[tokio::test]
async fn test_invalid_base_url_is_reported() {
    let client = Client::new("not a url", None);

    let err = client.list_projects().await.unwrap_err();

    assert!(err.to_string().contains("Invalid server URL"));
}

#[tokio::test]
async fn test_dot_segment_ids_are_rejected_before_sending() {
    let client = Client::new("http://127.0.0.1:9", None);

    for id in ["..", ".", ""] {
        let err = client.get_project(id).await.unwrap_err();

        assert!(
            err.to_string().contains("invalid path segment"),
            "expected {id:?} to be rejected, got {err}"
        );
    }
}
