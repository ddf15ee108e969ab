use std::time::Duration;

use secrecy::SecretString;

/// Environment variable holding the server-wide fallback token
pub const GITHUB_TOKEN_ENV: &str = "README_MCP_GITHUB_TOKEN";

/// Environment variable overriding the GitHub API base address
pub const GITHUB_API_URL_ENV: &str = "README_MCP_GITHUB_API_URL";

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the GitHub contents client
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Base address of the REST API, without trailing slash
    pub api_base_url: String,

    pub user_agent: String,

    /// Upper bound for a whole upstream request, connect included
    pub timeout: Duration,

    /// Used only for requests that carry no token of their own
    pub default_token: Option<SecretString>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_agent: format!("readme-mcp/{}", env!("CARGO_PKG_VERSION")),
            timeout: DEFAULT_TIMEOUT,
            default_token: None,
        }
    }
}

impl GithubConfig {
    /// Defaults overridden by `README_MCP_GITHUB_TOKEN` and `README_MCP_GITHUB_API_URL`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        GithubConfig {
            api_base_url: std::env::var(GITHUB_API_URL_ENV)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            default_token: std::env::var(GITHUB_TOKEN_ENV)
                .ok()
                .filter(|token| !token.is_empty())
                .map(SecretString::from),
            ..defaults
        }
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the fallback token; `None` leaves the current one in place
    pub fn with_default_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.default_token = Some(SecretString::from(token));
        }
        self
    }
}
