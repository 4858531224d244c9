//! Upload allow-list checks and storage paths.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::Settings;
use crate::errors::{AppError, AppResult};

/// Extension of a file name: the text after the last dot.
///
/// Returns `None` when there is no dot or nothing follows it.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

impl Settings {
    /// Check a file name against the upload allow-list (case-sensitive).
    pub fn allowed_file(&self, filename: &str) -> bool {
        extension_of(filename)
            .map(|ext| self.allowed_extensions.contains(ext))
            .unwrap_or(false)
    }

    /// Resolve where an upload named `filename` is stored.
    ///
    /// Only bare file names are accepted; anything that could escape the
    /// upload folder is rejected.
    pub fn upload_path(&self, filename: &str) -> AppResult<PathBuf> {
        if filename.trim().is_empty() {
            return Err(AppError::validation("File name is required"));
        }

        let mut components = Path::new(filename).components();
        let is_bare = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !is_bare || filename.contains('\\') {
            return Err(AppError::validation(format!(
                "File name '{}' must not contain path separators",
                filename
            )));
        }

        if !self.allowed_file(filename) {
            return Err(AppError::validation(format!(
                "File type not allowed: '{}'",
                filename
            )));
        }

        Ok(self.upload_folder.join(filename))
    }

    /// Create the upload folder and its parents if missing.
    pub fn ensure_upload_folder(&self) -> AppResult<&Path> {
        if !self.upload_folder.is_dir() {
            tracing::info!(path = %self.upload_folder.display(), "Creating upload folder");
            fs::create_dir_all(&self.upload_folder)?;
        }
        Ok(&self.upload_folder)
    }
}
