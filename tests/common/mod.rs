//! Shared fixtures for tests running against a mock GitHub API

#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use readme_mcp::contents::{GithubClient, GithubConfig};
use serde_json::{Value, json};

pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Client pointed at a mock server
pub fn client_for(server: &mockito::ServerGuard) -> GithubClient {
    GithubClient::new(GithubConfig::default().with_api_base_url(server.url()))
        .expect("Failed to build GitHub client")
}

pub fn client_with_default_token(server: &mockito::ServerGuard, token: &str) -> GithubClient {
    GithubClient::new(
        GithubConfig::default()
            .with_api_base_url(server.url())
            .with_default_token(Some(token.to_string())),
    )
    .expect("Failed to build GitHub client")
}

pub fn sha(seed: char) -> String {
    seed.to_string().repeat(40)
}

/// Base64 the way GitHub sends it, wrapped at 60 columns
pub fn github_base64(text: &str) -> String {
    STANDARD
        .encode(text)
        .as_bytes()
        .chunks(60)
        .map(|chunk| std::str::from_utf8(chunk).expect("base64 is ASCII"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single-file response body with `text` as its content
pub fn file_body(path: &str, text: &str) -> Value {
    file_body_with_size(path, text, text.len() as u64)
}

pub fn file_body_with_size(path: &str, text: &str, size: u64) -> Value {
    let name = path.rsplit('/').next().unwrap_or(path);
    json!({
        "name": name,
        "path": path,
        "sha": sha('a'),
        "size": size,
        "type": "file",
        "encoding": "base64",
        "content": github_base64(text),
        "download_url": format!("https://raw.githubusercontent.com/pallets/flask/main/{}", path),
    })
}

/// Directory-entry object as it appears in a listing
pub fn listing_entry(path: &str, entry_type: &str) -> Value {
    let name = path.rsplit('/').next().unwrap_or(path);
    match entry_type {
        "dir" => json!({
            "name": name,
            "path": path,
            "sha": sha('b'),
            "size": 0,
            "type": "dir",
            "download_url": null,
        }),
        _ => json!({
            "name": name,
            "path": path,
            "sha": sha('c'),
            "size": 128,
            "type": entry_type,
            "download_url": format!("https://raw.githubusercontent.com/pallets/flask/main/{}", path),
        }),
    }
}

/// Listing of `count` files named `file-<n>.txt` under `dir`
pub fn listing_of(dir: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|n| listing_entry(&format!("{}/file-{}.txt", dir, n), "file"))
            .collect(),
    )
}
