use super::error::ContentError;

/// Upper bound on the number of characters in a repository path
pub const MAX_PATH_LENGTH: usize = 1000;

/// What kind of node a path is expected to address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMode {
    /// A single file. The path must be non-empty.
    File,
    /// A directory. The empty path denotes the repository root.
    Directory,
}

/// Normalizes and bounds-checks a path inside a repository
///
/// Rules are applied in order:
/// 1. leading and trailing `/` are trimmed
/// 2. in [`PathMode::Directory`] the empty path is accepted as the root
/// 3. paths containing `..` or starting with `/` are rejected
/// 4. in [`PathMode::File`] the empty path is rejected
/// 5. paths longer than [`MAX_PATH_LENGTH`] characters are rejected
///
/// # Examples
///
/// ```
/// use readme_mcp::contents::{validate_path, PathMode};
///
/// assert_eq!(validate_path("/src/lib.rs/", PathMode::File).unwrap(), "src/lib.rs");
/// assert_eq!(validate_path("/", PathMode::Directory).unwrap(), "");
/// assert!(validate_path("../../etc/passwd", PathMode::File).is_err());
/// ```
pub fn validate_path(raw: &str, mode: PathMode) -> Result<String, ContentError> {
    let path = raw.trim_matches('/');

    if mode == PathMode::Directory && path.is_empty() {
        return Ok(String::new());
    }

    if path.contains("..") || path.starts_with('/') {
        let message = match mode {
            PathMode::File => "Invalid path: path traversal not allowed",
            PathMode::Directory => "Invalid directory path: path traversal not allowed",
        };
        return Err(ContentError::InvalidInput(message.to_string()));
    }

    let length = path.chars().count();
    match mode {
        PathMode::File if path.is_empty() || length > MAX_PATH_LENGTH => {
            Err(ContentError::InvalidInput(format!(
                "Path must be between 1 and {} characters",
                MAX_PATH_LENGTH
            )))
        }
        PathMode::Directory if length > MAX_PATH_LENGTH => Err(ContentError::InvalidInput(
            format!(
                "Directory path must be at most {} characters",
                MAX_PATH_LENGTH
            ),
        )),
        _ => Ok(path.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::ErrorKind;

    #[test]
    fn test_trims_slashes() {
        assert_eq!(validate_path("README.md", PathMode::File).unwrap(), "README.md");
        assert_eq!(
            validate_path("//docs/index.md//", PathMode::File).unwrap(),
            "docs/index.md"
        );
        assert_eq!(validate_path("/src/", PathMode::Directory).unwrap(), "src");
    }

    #[test]
    fn test_directory_root() {
        assert_eq!(validate_path("", PathMode::Directory).unwrap(), "");
        assert_eq!(validate_path("///", PathMode::Directory).unwrap(), "");
    }

    #[test]
    fn test_rejects_traversal() {
        for raw in [
            "../../etc/passwd",
            "..",
            "src/../secret",
            "/..",
            "a..b",
            "docs/..",
        ] {
            for mode in [PathMode::File, PathMode::Directory] {
                let err = validate_path(raw, mode).expect_err(raw);
                assert_eq!(err.kind(), ErrorKind::InvalidInput);
                assert!(
                    err.to_string().contains("path traversal not allowed"),
                    "unexpected message for {:?}: {}",
                    raw,
                    err
                );
            }
        }
    }

    #[test]
    fn test_file_requires_path() {
        for raw in ["", "/", "////"] {
            let err = validate_path(raw, PathMode::File).expect_err(raw);
            assert_eq!(err.kind(), ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn test_length_bounds() {
        let at_limit = "a".repeat(MAX_PATH_LENGTH);
        let over_limit = "a".repeat(MAX_PATH_LENGTH + 1);

        assert_eq!(validate_path(&at_limit, PathMode::File).unwrap(), at_limit);
        assert_eq!(validate_path(&at_limit, PathMode::Directory).unwrap(), at_limit);

        assert_eq!(
            validate_path(&over_limit, PathMode::File).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            validate_path(&over_limit, PathMode::Directory)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_length_counts_characters_after_trimming() {
        let padded = format!("/{}/", "é".repeat(MAX_PATH_LENGTH));
        assert_eq!(
            validate_path(&padded, PathMode::File).unwrap().chars().count(),
            MAX_PATH_LENGTH
        );
    }
}
