//! Tests for the GitHub contents client against a mock API
//!
//! These tests verify that the client:
//! 1. Sends the expected path, `ref` query, `Accept` and `Authorization` headers
//! 2. Maps upstream status codes to content errors
//! 3. Distinguishes file objects from directory arrays
//! 4. Enforces the file size and directory entry limits

mod common;

use common::*;
use mockito::Matcher;
use readme_mcp::contents::{
    ContentError, ErrorKind, GithubClient, GithubConfig, MAX_DIRECTORY_ENTRIES,
    MAX_FILE_SIZE_BYTES, NodeType, RepositoryReference,
};
use secrecy::SecretString;
use serde_json::json;

fn flask() -> RepositoryReference {
    RepositoryReference::parse("https://github.com/pallets/flask").unwrap()
}

#[tokio::test]
async fn test_fetch_readme_sends_ref_and_accept() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/pallets/flask/readme")
        .match_query(Matcher::UrlEncoded("ref".into(), "2.3.x".into()))
        .match_header("accept", ACCEPT)
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(file_body("README.md", "# Flask\n").to_string())
        .create_async()
        .await;

    let node = client_for(&server)
        .fetch_readme(&flask(), "2.3.x", None)
        .await
        .expect("README should be fetched");

    assert_eq!(node.name, "README.md");
    assert_eq!(node.node_type, NodeType::File);
    assert_eq!(node.encoding.as_deref(), Some("base64"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_readme_not_found() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/nonexistent/repo/readme")
        .match_query(Matcher::UrlEncoded("ref".into(), "main".into()))
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create_async()
        .await;

    let reference = RepositoryReference::parse("https://github.com/nonexistent/repo").unwrap();
    let err = client_for(&server)
        .fetch_readme(&reference, "main", None)
        .await
        .unwrap_err();

    assert_eq!(err, ContentError::NotFound("README not found".to_string()));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_token_is_sent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/pallets/flask/readme")
        .match_query(Matcher::Any)
        .match_header("authorization", "token request-token")
        .with_status(200)
        .with_body(file_body("README.md", "hi").to_string())
        .create_async()
        .await;

    let token = SecretString::from("request-token".to_string());
    client_with_default_token(&server, "server-token")
        .fetch_readme(&flask(), "main", Some(&token))
        .await
        .expect("request token should take precedence");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_default_token_is_used_without_request_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/pallets/flask/readme")
        .match_query(Matcher::Any)
        .match_header("authorization", "token server-token")
        .with_status(200)
        .with_body(file_body("README.md", "hi").to_string())
        .create_async()
        .await;

    client_with_default_token(&server, "server-token")
        .fetch_readme(&flask(), "main", None)
        .await
        .expect("default token should be sent");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_upstream_error_keeps_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/pallets/flask/readme")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"message": "Bad credentials"}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_readme(&flask(), "main", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.upstream_status(), Some(401));
}

#[tokio::test]
async fn test_transport_failure_is_upstream_without_status() {
    // Nothing listens on port 1
    let client = GithubClient::new(GithubConfig::default().with_api_base_url("http://127.0.0.1:1"))
        .unwrap();

    let err = client.fetch_readme(&flask(), "main", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert_eq!(err.upstream_status(), None);
}

#[tokio::test]
async fn test_malformed_body_is_internal() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/pallets/flask/readme")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_readme(&flask(), "main", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_fetch_path_returns_file() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/pallets/flask/contents/src/flask/app.py")
        .match_query(Matcher::UrlEncoded("ref".into(), "main".into()))
        .with_status(200)
        .with_body(file_body("src/flask/app.py", "import os\n").to_string())
        .create_async()
        .await;

    let node = client_for(&server)
        .fetch_path(&flask(), "src/flask/app.py", "main", None)
        .await
        .unwrap();

    assert_eq!(node.path, "src/flask/app.py");
    assert_eq!(node.name, "app.py");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_path_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/pallets/flask/contents/nonexistent_file.txt")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_path(&flask(), "nonexistent_file.txt", "main", None)
        .await
        .unwrap_err();

    assert_eq!(err, ContentError::NotFound("File not found".to_string()));
}

#[tokio::test]
async fn test_fetch_path_on_directory_is_conflict() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/pallets/flask/contents/src")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!([listing_entry("src/flask", "dir")]).to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_path(&flask(), "src", "main", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ContentError::Conflict("Path is a directory, not a file".to_string())
    );
}

#[tokio::test]
async fn test_fetch_path_on_non_file_object_is_conflict() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/pallets/flask/contents/vendor/lib")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(listing_entry("vendor/lib", "submodule").to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch_path(&flask(), "vendor/lib", "main", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn test_fetch_path_size_boundary() {
    let mut server = mockito::Server::new_async().await;
    let _at_limit = server
        .mock("GET", "/repos/pallets/flask/contents/at-limit.txt")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(file_body_with_size("at-limit.txt", "x", MAX_FILE_SIZE_BYTES).to_string())
        .create_async()
        .await;
    let _over_limit = server
        .mock("GET", "/repos/pallets/flask/contents/over-limit.txt")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            file_body_with_size("over-limit.txt", "x", MAX_FILE_SIZE_BYTES + 1).to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);

    let node = client
        .fetch_path(&flask(), "at-limit.txt", "main", None)
        .await
        .expect("a file of exactly 102400 bytes is allowed");
    assert_eq!(node.size, Some(102_400));

    let err = client
        .fetch_path(&flask(), "over-limit.txt", "main", None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ContentError::TooLarge("File too large (max 100kB)".to_string())
    );
}

#[tokio::test]
async fn test_list_root_uses_contents_endpoint() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/repos/pallets/flask/contents")
        .match_query(Matcher::UrlEncoded("ref".into(), "main".into()))
        .with_status(200)
        .with_body(
            json!([
                listing_entry("src", "dir"),
                listing_entry("README.md", "file"),
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let nodes = client_for(&server)
        .list_path(&flask(), "", "main", None)
        .await
        .unwrap();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].name, "src");
    assert_eq!(nodes[1].name, "README.md");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_path_on_file_is_conflict() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/pallets/flask/contents/README.md")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(file_body("README.md", "# Flask").to_string())
        .create_async()
        .await;

    let err = client_for(&server)
        .list_path(&flask(), "README.md", "main", None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ContentError::Conflict("Path is a file, not a directory".to_string())
    );
}

#[tokio::test]
async fn test_list_path_not_found() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/repos/pallets/flask/contents/missing")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let err = client_for(&server)
        .list_path(&flask(), "missing", "main", None)
        .await
        .unwrap_err();

    assert_eq!(err, ContentError::NotFound("Directory not found".to_string()));
}

#[tokio::test]
async fn test_list_path_entry_boundary() {
    let mut server = mockito::Server::new_async().await;
    let _at_limit = server
        .mock("GET", "/repos/pallets/flask/contents/full")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(listing_of("full", MAX_DIRECTORY_ENTRIES).to_string())
        .create_async()
        .await;
    let _over_limit = server
        .mock("GET", "/repos/pallets/flask/contents/overflow")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(listing_of("overflow", MAX_DIRECTORY_ENTRIES + 1).to_string())
        .create_async()
        .await;

    let client = client_for(&server);

    let nodes = client
        .list_path(&flask(), "full", "main", None)
        .await
        .expect("a listing of exactly 1000 entries is allowed");
    assert_eq!(nodes.len(), 1000);

    let err = client
        .list_path(&flask(), "overflow", "main", None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ContentError::TooLarge("Directory too large (max 1,000 entries)".to_string())
    );
}
