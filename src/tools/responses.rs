//! Text responses for the MCP tools
//!
//! MCP clients read tool output as plain text, so the tools return the decoded
//! file content directly and render directory listings as one line per entry:
//!
//! ```text
//! Directory listing for src (2 entries):
//!
//! 📁 bin
//! 📄 lib.rs (1024 bytes)
//! ```

use crate::contents::{ContentError, DirectoryResult, NodeType};

/// Renders a directory listing for display to an agent
pub fn format_directory_listing(listing: &DirectoryResult) -> String {
    let location = if listing.path.is_empty() {
        "root"
    } else {
        listing.path.as_str()
    };

    let lines: Vec<String> = listing
        .entries
        .iter()
        .map(|entry| match entry.entry_type {
            NodeType::Dir => format!("📁 {}", entry.name),
            NodeType::File => format!("📄 {} ({} bytes)", entry.name, entry.size.unwrap_or(0)),
            _ => format!("📄 {}", entry.name),
        })
        .collect();

    format!(
        "Directory listing for {} ({} entries):\n\n{}",
        location,
        listing.total_count,
        lines.join("\n")
    )
}

/// Tool error text, prefixed with the machine-checkable error code
pub fn format_tool_error(err: &ContentError) -> String {
    match err.upstream_status() {
        Some(status) => format!("{} ({}): {}", err.kind(), status, err),
        None => format!("{}: {}", err.kind(), err),
    }
}
