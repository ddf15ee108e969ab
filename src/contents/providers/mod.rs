pub mod github;

pub use github::{GithubClient, GithubConfig, MAX_DIRECTORY_ENTRIES, MAX_FILE_SIZE_BYTES};
