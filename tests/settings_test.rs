//! Integration tests for settings loading and upload handling.

use std::collections::BTreeSet;
use std::path::PathBuf;

use cnpm_config::config::{settings, Settings, ALLOWED_EXTENSIONS, SQLITE_URI_PREFIX};
use cnpm_config::AppError;

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_database_uri_scheme_and_location() {
    let settings = Settings::for_base_dir("/opt/cnpm");

    assert!(settings.database_uri.starts_with(SQLITE_URI_PREFIX));
    let db_path = settings.database_path().unwrap();
    assert_eq!(db_path.parent().unwrap(), settings.base_dir.as_path());
}

#[test]
fn test_upload_folder_is_uploads_subdir() {
    let settings = Settings::for_base_dir("/opt/cnpm");

    assert_eq!(settings.upload_folder.parent().unwrap(), settings.base_dir.as_path());
    assert_eq!(settings.upload_folder.file_name().unwrap(), "uploads");
}

#[test]
fn test_allowed_extensions_exact() {
    let settings = Settings::for_base_dir("/opt/cnpm");
    let expected: BTreeSet<String> = ["pdf", "docx", "jpg", "png"]
        .iter()
        .map(|e| e.to_string())
        .collect();

    assert_eq!(settings.allowed_extensions, expected);
    assert_eq!(ALLOWED_EXTENSIONS.len(), expected.len());
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_repeated_loads_identical() {
    let lookup = |key: &str| {
        Ok(match key {
            "APP_BASE_DIR" => Some("/opt/cnpm".to_string()),
            "SECRET_KEY" => Some("prod-secret".to_string()),
            _ => None,
        })
    };

    let first = Settings::from_lookup(lookup).unwrap();
    let second = Settings::from_lookup(lookup).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_global_settings_singleton() {
    let first = settings().unwrap();
    let second = settings().unwrap();

    assert!(std::ptr::eq(first, second));
    assert!(first.database_uri.starts_with(SQLITE_URI_PREFIX));
}

// =============================================================================
// Uploads
// =============================================================================

#[test]
fn test_ensure_upload_folder_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::for_base_dir(dir.path());

    assert!(!settings.upload_folder.exists());
    let folder = settings.ensure_upload_folder().unwrap();
    assert!(folder.is_dir());

    // Second call is a no-op
    assert!(settings.ensure_upload_folder().is_ok());
}

#[test]
fn test_upload_path_within_folder() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::for_base_dir(dir.path());

    let path = settings.upload_path("lecture.pdf").unwrap();
    assert_eq!(path, dir.path().join("uploads").join("lecture.pdf"));
}

#[test]
fn test_upload_path_rejection_is_validation_error() {
    let settings = Settings::for_base_dir(PathBuf::from("/opt/cnpm"));

    match settings.upload_path("../../etc/passwd.png") {
        Err(AppError::Validation(msg)) => assert!(msg.contains("path separators")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
