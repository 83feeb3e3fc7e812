//! Upload candidate validation
//!
//! Runs before any bytes are decoded. Rules are checked in order and
//! the first failure wins:
//!
//! 1. filename is non-empty and free of control and reserved characters
//! 2. extension is one of jpg, jpeg, png, webp
//! 3. size is non-zero and at most 5 MiB
//! 4. the declared MIME type is rejected only when it is unmistakably
//!    non-image; an empty or generic declaration is tolerated
//!
//! On acceptance the canonical content type is re-derived from the
//! extension. The browser-declared type is never stored or trusted.

use thiserror::Error;

/// Maximum file size (5 MiB)
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Accepted file extensions (case-insensitive)
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Characters never allowed in an uploaded filename
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadRejection {
    #[error("Filename must not be empty")]
    EmptyName,

    #[error("Filename contains forbidden character")]
    ForbiddenCharacter,

    #[error("Unsupported file extension '{0}'. Supported: jpg, jpeg, png, webp")]
    UnsupportedExtension(String),

    #[error("Empty file")]
    EmptyFile,

    #[error("File too large: {0} bytes, maximum is {MAX_FILE_SIZE}")]
    TooLarge(u64),

    #[error("Declared content type '{0}' is not an image")]
    NonImageMime(String),
}

/// Accepted upload with its canonical content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidUpload {
    /// Lowercased extension from the filename
    pub extension: String,
    /// Content type re-derived from the extension
    pub content_type: &'static str,
}

fn canonical_content_type(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => unreachable!("extension was checked against the allow-list"),
    }
}

/// Validate an upload candidate from its metadata alone
pub fn validate_upload_candidate(
    name: &str,
    mime_type: Option<&str>,
    size_bytes: u64,
) -> Result<ValidUpload, UploadRejection> {
    if name.trim().is_empty() {
        return Err(UploadRejection::EmptyName);
    }
    if name
        .chars()
        .any(|c| c.is_control() || RESERVED_CHARS.contains(&c))
    {
        return Err(UploadRejection::ForbiddenCharacter);
    }

    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(UploadRejection::UnsupportedExtension(extension));
    }

    if size_bytes == 0 {
        return Err(UploadRejection::EmptyFile);
    }
    if size_bytes > MAX_FILE_SIZE {
        return Err(UploadRejection::TooLarge(size_bytes));
    }

    // Browsers routinely declare nothing or application/octet-stream
    // for perfectly good images, so only a definite mismatch rejects.
    if let Some(mime) = mime_type {
        let mime = mime.trim();
        if !mime.is_empty()
            && !mime.eq_ignore_ascii_case("application/octet-stream")
            && !mime.to_ascii_lowercase().starts_with("image/")
        {
            return Err(UploadRejection::NonImageMime(mime.to_string()));
        }
    }

    Ok(ValidUpload {
        content_type: canonical_content_type(&extension),
        extension,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_image_names() {
        let v = validate_upload_candidate("party.jpg", Some("image/jpeg"), 1024).unwrap();
        assert_eq!(v.extension, "jpg");
        assert_eq!(v.content_type, "image/jpeg");
    }

    #[test]
    fn extension_is_case_insensitive() {
        let v = validate_upload_candidate("PHOTO.PNG", None, 1024).unwrap();
        assert_eq!(v.extension, "png");
        assert_eq!(v.content_type, "image/png");
    }

    #[test]
    fn canonical_type_overrides_declared_type() {
        // Misdeclared but plausible: the extension wins
        let v = validate_upload_candidate("photo.webp", Some("image/png"), 1024).unwrap();
        assert_eq!(v.content_type, "image/webp");
    }

    #[test]
    fn rejects_empty_and_reserved_names() {
        assert_eq!(
            validate_upload_candidate("", None, 100),
            Err(UploadRejection::EmptyName)
        );
        assert_eq!(
            validate_upload_candidate("   ", None, 100),
            Err(UploadRejection::EmptyName)
        );
        assert_eq!(
            validate_upload_candidate("a/b.jpg", None, 100),
            Err(UploadRejection::ForbiddenCharacter)
        );
        assert_eq!(
            validate_upload_candidate("ab\u{0007}.jpg", None, 100),
            Err(UploadRejection::ForbiddenCharacter)
        );
    }

    #[test]
    fn rejects_unsupported_extensions() {
        assert!(matches!(
            validate_upload_candidate("report.pdf", None, 100),
            Err(UploadRejection::UnsupportedExtension(_))
        ));
        assert!(matches!(
            validate_upload_candidate("noextension", None, 100),
            Err(UploadRejection::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn size_boundaries() {
        assert_eq!(
            validate_upload_candidate("a.jpg", None, 0),
            Err(UploadRejection::EmptyFile)
        );
        assert!(validate_upload_candidate("a.jpg", None, MAX_FILE_SIZE).is_ok());
        assert_eq!(
            validate_upload_candidate("a.jpg", None, MAX_FILE_SIZE + 1),
            Err(UploadRejection::TooLarge(MAX_FILE_SIZE + 1))
        );
    }

    #[test]
    fn mime_tolerance() {
        assert!(validate_upload_candidate("a.jpg", None, 100).is_ok());
        assert!(validate_upload_candidate("a.jpg", Some(""), 100).is_ok());
        assert!(validate_upload_candidate("a.jpg", Some("application/octet-stream"), 100).is_ok());
        assert!(validate_upload_candidate("a.jpg", Some("image/jpeg"), 100).is_ok());
        assert_eq!(
            validate_upload_candidate("a.jpg", Some("text/html"), 100),
            Err(UploadRejection::NonImageMime("text/html".to_string()))
        );
    }

    #[test]
    fn name_check_runs_before_extension_check() {
        // First failing rule wins
        assert_eq!(
            validate_upload_candidate("bad|name.pdf", None, 0),
            Err(UploadRejection::ForbiddenCharacter)
        );
    }
}
