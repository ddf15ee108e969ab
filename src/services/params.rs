use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Branch used when a request names no ref
pub const DEFAULT_REF: &str = "main";

/// Request for a repository README
///
/// # Examples
///
/// ```
/// use readme_mcp::services::params::ReadmeRequest;
///
/// let request: ReadmeRequest =
///     serde_json::from_str(r#"{"repo_url": "https://github.com/pallets/flask"}"#).unwrap();
/// assert_eq!(request.ref_name(), "main");
/// ```
#[derive(Clone, schemars::JsonSchema, Serialize, Deserialize)]
pub struct ReadmeRequest {
    /// Repository URL of the form `https://github.com/<owner>/<name>`
    pub repo_url: String,

    /// Branch, tag or commit SHA. Defaults to `main`
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,

    /// GitHub token, passed through to the API and never stored
    #[serde(default)]
    pub token: Option<String>,
}

/// Request for a single file
#[derive(Clone, schemars::JsonSchema, Serialize, Deserialize)]
pub struct FileRequest {
    pub repo_url: String,

    /// Path of the file inside the repository, e.g. `src/lib.rs`
    pub path: String,

    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,

    #[serde(default)]
    pub token: Option<String>,
}

/// Request for a directory listing
#[derive(Clone, schemars::JsonSchema, Serialize, Deserialize)]
pub struct DirectoryRequest {
    pub repo_url: String,

    /// Directory inside the repository; empty for the root
    #[serde(default)]
    pub dir: String,

    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,

    #[serde(default)]
    pub token: Option<String>,
}

macro_rules! impl_request_common {
    ($($request:ty),+) => {
        $(
            impl $request {
                /// Requested ref, falling back to [`DEFAULT_REF`] when absent or empty
                pub fn ref_name(&self) -> &str {
                    resolve_ref(self.git_ref.as_deref())
                }
            }

            impl std::fmt::Debug for $request {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.debug_struct(stringify!($request))
                        .field("repo_url", &self.repo_url)
                        .field("ref", &self.ref_name())
                        .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
                        .finish_non_exhaustive()
                }
            }
        )+
    };
}

impl_request_common!(ReadmeRequest, FileRequest, DirectoryRequest);

fn resolve_ref(git_ref: Option<&str>) -> &str {
    match git_ref {
        Some(r) if !r.trim().is_empty() => r,
        _ => DEFAULT_REF,
    }
}
