//! Path utilities for segment and artifact names.
//!
//! Names travel from search results into URLs and request bodies, so they
//! are checked for path traversal before any request is built.

use crate::error::{Error, Result};

/// Extension of stored broadcast segments.
const SEGMENT_EXTENSION: &str = "ts";

/// Extension of merged artifacts.
const ARTIFACT_EXTENSION: &str = "mp4";

/// Return the last path component, accepting both `/` and `\` separators.
///
/// # Examples
///
/// ```
/// use clipstitch_common::paths::file_name;
///
/// assert_eq!(file_name("canales/c5n/c5n_20250905_234106.ts"), "c5n_20250905_234106.ts");
/// assert_eq!(file_name(r"C:\videos\tn_20250101_000000.ts"), "tn_20250101_000000.ts");
/// assert_eq!(file_name("plain.ts"), "plain.ts");
/// ```
pub fn file_name(path: &str) -> &str {
    match path.rsplit(['/', '\\']).next() {
        Some(last) if !last.is_empty() => last,
        _ => path,
    }
}

/// Strip the last extension from a file name.
///
/// # Examples
///
/// ```
/// use clipstitch_common::paths::strip_extension;
///
/// assert_eq!(strip_extension("c5n_20250905_234106.ts"), "c5n_20250905_234106");
/// assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
/// assert_eq!(strip_extension("no_extension"), "no_extension");
/// ```
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}

/// File stem of a path: last component without its extension.
pub fn file_stem(path: &str) -> &str {
    strip_extension(file_name(path))
}

/// Check if a name carries the stored segment extension.
///
/// # Examples
///
/// ```
/// use clipstitch_common::paths::is_segment_file;
///
/// assert!(is_segment_file("c5n_20250905_234106.ts"));
/// assert!(is_segment_file("C5N_20250905_234106.TS"));
/// assert!(!is_segment_file("clip.mp4"));
/// ```
pub fn is_segment_file(name: &str) -> bool {
    has_extension(name, SEGMENT_EXTENSION)
}

/// Check if a name carries the merged artifact extension.
pub fn is_artifact_file(name: &str) -> bool {
    has_extension(name, ARTIFACT_EXTENSION)
}

fn has_extension(name: &str, ext: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, e)| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

fn contains_traversal(value: &str) -> bool {
    value.contains("..") || value.contains('/') || value.contains('\\')
}

/// Validate a channel name before it is used in a request.
///
/// # Examples
///
/// ```
/// use clipstitch_common::paths::validate_channel;
///
/// assert!(validate_channel("c5n").is_ok());
/// assert!(validate_channel("../etc").is_err());
/// assert!(validate_channel("  ").is_err());
/// ```
pub fn validate_channel(channel: &str) -> Result<()> {
    if channel.trim().is_empty() {
        return Err(Error::invalid_input("channel name is empty"));
    }
    if contains_traversal(channel) {
        return Err(Error::invalid_input(format!(
            "channel name contains invalid characters: {channel}"
        )));
    }
    Ok(())
}

/// Validate a segment or artifact file name before it is used in a request.
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_input("file name is empty"));
    }
    if contains_traversal(name) {
        return Err(Error::invalid_input(format!(
            "file name contains invalid characters: {name}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_edge_cases() {
        assert_eq!(file_name("dir/"), "dir/");
        assert_eq!(file_name(""), "");
        assert_eq!(file_name("a/b\\c.ts"), "c.ts");
    }

    #[test]
    fn test_strip_extension_edge_cases() {
        assert_eq!(strip_extension("trailing."), "trailing.");
        assert_eq!(strip_extension(".hidden"), "");
        assert_eq!(file_stem("x/y/c5n_20250905_234106.ts"), "c5n_20250905_234106");
    }

    #[test]
    fn test_artifact_extension() {
        assert!(is_artifact_file("clip_c5n_1.mp4"));
        assert!(!is_artifact_file("clip_c5n_1.ts"));
        assert!(!is_artifact_file("mp4"));
    }

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("c5n_20250905_234106.ts").is_ok());
        assert!(validate_file_name("..ts").is_err());
        assert!(validate_file_name("a/b.ts").is_err());
        assert!(validate_file_name("a\\b.ts").is_err());
        assert!(validate_file_name("").is_err());
    }

    #[test]
    fn test_validate_channel_messages() {
        let err = validate_channel("a/b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: channel name contains invalid characters: a/b"
        );
    }
}
