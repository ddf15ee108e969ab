use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::error::ContentError;
use super::models::UpstreamNode;

/// Returns the text of a fetched node
///
/// `base64` content is decoded and interpreted as UTF-8; GitHub wraps the
/// encoded payload at 60 columns, so whitespace is stripped first. Any other
/// encoding is passed through unchanged. A node without content yields an
/// empty string.
pub fn decode_content(node: &UpstreamNode) -> Result<String, ContentError> {
    let content = node.content.as_deref().unwrap_or_default();

    match node.encoding.as_deref() {
        Some("base64") => decode_base64_text(content),
        _ => Ok(content.to_string()),
    }
}

fn decode_base64_text(encoded: &str) -> Result<String, ContentError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| ContentError::Internal(format!("Failed to decode base64 content: {}", e)))?;

    String::from_utf8(bytes)
        .map_err(|e| ContentError::Internal(format!("Invalid UTF-8 in file content: {}", e)))
}
