use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::ContentError;

const GITHUB_URL_PREFIX: &str = "https://github.com/";

static GITHUB_REPOSITORY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://github\.com/[\w\-.]+/[\w\-.]+$")
        .expect("repository URL pattern is a valid regex")
});

/// An (owner, repository name) pair identifying a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryReference {
    pub owner: String,
    pub name: String,
}

impl RepositoryReference {
    /// Parses a repository URL of the exact form `https://github.com/<owner>/<name>`
    ///
    /// Owner and name may only contain word characters, `-` and `.`. Trailing
    /// slashes, `.git` suffixes, sub-paths and other hosts are all rejected.
    /// No network access happens here.
    ///
    /// # Examples
    ///
    /// ```
    /// use readme_mcp::contents::RepositoryReference;
    ///
    /// let reference = RepositoryReference::parse("https://github.com/pallets/flask").unwrap();
    /// assert_eq!(reference.owner, "pallets");
    /// assert_eq!(reference.name, "flask");
    ///
    /// assert!(RepositoryReference::parse("https://example.com/invalid/repo").is_err());
    /// ```
    pub fn parse(repo_url: &str) -> Result<Self, ContentError> {
        if !GITHUB_REPOSITORY_URL.is_match(repo_url) {
            return Err(invalid_url());
        }

        let parts: Vec<&str> = repo_url
            .strip_prefix(GITHUB_URL_PREFIX)
            .ok_or_else(invalid_url)?
            .split('/')
            .collect();

        match parts.as_slice() {
            [owner, name] if is_component(owner) && is_component(name) => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(invalid_url()),
        }
    }
}

impl std::fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

// "." and ".." would be resolved as relative segments in the upstream URL.
fn is_component(segment: &str) -> bool {
    !segment.is_empty() && !segment.chars().all(|c| c == '.')
}

fn invalid_url() -> ContentError {
    ContentError::InvalidInput("Invalid GitHub repository URL format".to_string())
}
