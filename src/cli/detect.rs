//! Saved-trie format detection

use super::args::SerializationFormat;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Format implied by a file extension, if any.
pub fn format_from_extension(path: &Path) -> Option<SerializationFormat> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Some(SerializationFormat::Json),
        Some("bin") => Some(SerializationFormat::Bincode),
        _ => None,
    }
}

/// Determine the format of a saved trie.
///
/// An explicit format wins, then the file extension. Otherwise the file
/// is JSON if its first non-whitespace byte opens an object, bincode if
/// not.
pub fn detect_format(path: &Path, user_format: Option<SerializationFormat>) -> Result<SerializationFormat> {
    if let Some(format) = user_format {
        return Ok(format);
    }
    if let Some(format) = format_from_extension(path) {
        return Ok(format);
    }

    let mut head = [0u8; 64];
    let read = File::open(path)
        .and_then(|mut f| f.read(&mut head))
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let looks_like_json = head[..read]
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .map_or(false, |&b| b == b'{');

    let format = if looks_like_json {
        SerializationFormat::Json
    } else {
        SerializationFormat::Bincode
    };
    log::debug!("detected {} format for {}", format, path.display());
    Ok(format)
}
