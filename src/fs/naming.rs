//! Filename validation and generation.

use std::path::Path;

use crate::error::{Error, Result};

/// Validate and sanitize a filename by replacing reserved characters.
///
/// Returns an error if the filename contains path traversal patterns,
/// separators or null bytes.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Name a download after its short code, keeping the default file's extension.
///
/// `("C3xYz_12", "video.mp4")` gives `"C3xYz_12.mp4"`.
pub fn short_code_file_name(short_code: &str, default_name: &str) -> Result<String> {
    let stem = sanitize_filename(short_code)?;
    match Path::new(default_name).extension().and_then(|e| e.to_str()) {
        Some(ext) => Ok(format!("{}.{}", stem, ext)),
        None => Ok(stem),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("video.mp4").unwrap(), "video.mp4");
        assert_eq!(sanitize_filename("file:name.mp4").unwrap(), "file_name.mp4");
        assert_eq!(
            sanitize_filename("file*with?special.mp4").unwrap(),
            "file_with_special.mp4"
        );
    }

    #[test]
    fn test_sanitize_filename_path_traversal() {
        assert!(sanitize_filename("../etc/passwd").is_err());
        assert!(sanitize_filename("..\\windows\\system32").is_err());
    }

    #[test]
    fn test_sanitize_filename_path_separators() {
        assert!(sanitize_filename("path/to/video.mp4").is_err());
        assert!(sanitize_filename("path\\to\\video.mp4").is_err());
    }

    #[test]
    fn test_sanitize_filename_null_bytes() {
        assert!(sanitize_filename("file\0name.mp4").is_err());
    }

    #[test]
    fn test_sanitize_filename_empty() {
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }

    #[test]
    fn test_short_code_file_name() {
        assert_eq!(
            short_code_file_name("C3xYz_12", "video.mp4").unwrap(),
            "C3xYz_12.mp4"
        );
        assert_eq!(short_code_file_name("abc-12", "video").unwrap(), "abc-12");
    }
}
