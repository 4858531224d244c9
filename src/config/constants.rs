//! Application-wide constants
//!
//! Literal defaults for session security, storage and upload handling.

// =============================================================================
// Session & Form Security
// =============================================================================

/// Default session signing secret (development only)
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key";

/// Default CSRF token secret (development only)
pub const DEFAULT_CSRF_SECRET_KEY: &str = "another-secret-key";

// =============================================================================
// Database
// =============================================================================

/// Scheme prefix for file-backed SQLite connection URIs
pub const SQLITE_URI_PREFIX: &str = "sqlite:///";

/// Database file created inside the base directory
pub const DATABASE_FILE_NAME: &str = "app.db";

/// ORM change tracking is off unless explicitly enabled
pub const DEFAULT_TRACK_MODIFICATIONS: bool = false;

// =============================================================================
// Uploads
// =============================================================================

/// Upload directory name inside the base directory
pub const UPLOAD_DIR_NAME: &str = "uploads";

/// File extensions accepted for upload
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "jpg", "png"];

/// Check if an extension is on the upload allow-list
pub fn is_allowed_extension(ext: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&ext)
}

// =============================================================================
// Environment Keys
// =============================================================================

/// Overrides the base directory the database and uploads live in
pub const ENV_BASE_DIR: &str = "APP_BASE_DIR";

/// Overrides the session signing secret
pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

/// Overrides the CSRF token secret
pub const ENV_CSRF_SECRET_KEY: &str = "WTF_CSRF_SECRET_KEY";

/// Enables or disables ORM change tracking
pub const ENV_TRACK_MODIFICATIONS: &str = "SQLALCHEMY_TRACK_MODIFICATIONS";

// =============================================================================
// Setting Names
// =============================================================================

/// Name reported for database URI errors
pub const SETTING_DATABASE_URI: &str = "SQLALCHEMY_DATABASE_URI";

/// Name reported for upload folder errors
pub const SETTING_UPLOAD_FOLDER: &str = "UPLOAD_FOLDER";

/// Name reported for allow-list errors
pub const SETTING_ALLOWED_EXTENSIONS: &str = "ALLOWED_EXTENSIONS";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list_is_exact() {
        assert_eq!(ALLOWED_EXTENSIONS.len(), 4);
        for ext in ["pdf", "docx", "jpg", "png"] {
            assert!(is_allowed_extension(ext));
        }
    }

    #[test]
    fn test_allow_list_is_case_sensitive() {
        assert!(!is_allowed_extension("PDF"));
        assert!(!is_allowed_extension("Jpg"));
        assert!(!is_allowed_extension(".pdf"));
        assert!(!is_allowed_extension("jpeg"));
    }
}
