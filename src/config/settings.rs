//! Application settings resolved from a base directory and environment overrides.

use std::collections::BTreeSet;
use std::env;
use std::path::{Component, Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Serialize;
use validator::{Validate, ValidationErrors};

use super::constants::{
    ALLOWED_EXTENSIONS, DATABASE_FILE_NAME, DEFAULT_CSRF_SECRET_KEY, DEFAULT_SECRET_KEY,
    DEFAULT_TRACK_MODIFICATIONS, ENV_BASE_DIR, ENV_CSRF_SECRET_KEY, ENV_SECRET_KEY,
    ENV_TRACK_MODIFICATIONS, SETTING_ALLOWED_EXTENSIONS, SETTING_DATABASE_URI,
    SETTING_UPLOAD_FOLDER, SQLITE_URI_PREFIX, UPLOAD_DIR_NAME,
};
use crate::errors::{AppError, AppResult};

static SETTINGS: OnceCell<Settings> = OnceCell::new();

/// Process-wide settings, loaded from the environment on first access.
///
/// Every call after a successful load returns the same instance.
pub fn settings() -> AppResult<&'static Settings> {
    SETTINGS.get_or_try_init(Settings::from_env)
}

/// Application settings
#[derive(Clone, PartialEq, Eq, Serialize, Validate)]
pub struct Settings {
    pub base_dir: PathBuf,
    #[serde(skip_serializing)]
    #[validate(length(min = 1, message = "must not be empty"))]
    secret_key: String,
    #[serde(skip_serializing)]
    #[validate(length(min = 1, message = "must not be empty"))]
    csrf_secret_key: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub database_uri: String,
    pub track_modifications: bool,
    pub upload_folder: PathBuf,
    pub allowed_extensions: BTreeSet<String>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("base_dir", &self.base_dir)
            .field("secret_key", &"[REDACTED]")
            .field("csrf_secret_key", &"[REDACTED]")
            .field("database_uri", &self.database_uri)
            .field("track_modifications", &self.track_modifications)
            .field("upload_folder", &self.upload_folder)
            .field("allowed_extensions", &self.allowed_extensions)
            .finish()
    }
}

impl Settings {
    /// Build the default settings rooted at `base_dir`.
    ///
    /// The database file and upload folder both live inside `base_dir`.
    pub fn for_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let database_uri = format!(
            "{}{}",
            SQLITE_URI_PREFIX,
            base_dir.join(DATABASE_FILE_NAME).display()
        );
        let upload_folder = base_dir.join(UPLOAD_DIR_NAME);

        Self {
            base_dir,
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            csrf_secret_key: DEFAULT_CSRF_SECRET_KEY.to_string(),
            database_uri,
            track_modifications: DEFAULT_TRACK_MODIFICATIONS,
            upload_folder,
            allowed_extensions: ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Directory the crate was built from, used when no base dir is configured.
    pub fn default_base_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    /// Build settings from a key lookup, falling back to defaults for missing keys.
    ///
    /// The database file and upload folder always follow the base directory.
    /// Does not validate; see [`Settings::validate`].
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> AppResult<Option<String>>,
    {
        let base_dir = match lookup(ENV_BASE_DIR)? {
            Some(dir) => absolutize(Path::new(&dir))?,
            None => Self::default_base_dir(),
        };

        let mut settings = Self::for_base_dir(base_dir);

        if let Some(key) = lookup(ENV_SECRET_KEY)? {
            settings.secret_key = key;
        }
        if let Some(key) = lookup(ENV_CSRF_SECRET_KEY)? {
            settings.csrf_secret_key = key;
        }
        if let Some(flag) = lookup(ENV_TRACK_MODIFICATIONS)? {
            settings.track_modifications = parse_flag(ENV_TRACK_MODIFICATIONS, &flag)?;
        }

        Ok(settings)
    }

    /// Load and validate settings from `.env` and the process environment.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let settings = Self::from_lookup(env_var)?;
        settings.validate()?;

        if settings.uses_default_secrets() {
            tracing::warn!("SECRET_KEY or WTF_CSRF_SECRET_KEY not set, using insecure defaults");
        }
        tracing::debug!(?settings, "Settings loaded");

        Ok(settings)
    }

    /// Check field rules, and that the database and uploads live inside `base_dir`.
    pub fn validate(&self) -> AppResult<()> {
        Validate::validate(self).map_err(first_field_error)?;

        if !self.database_uri.starts_with(SQLITE_URI_PREFIX) {
            return Err(AppError::config(
                SETTING_DATABASE_URI,
                format!("must start with {}", SQLITE_URI_PREFIX),
            ));
        }

        let inside_base = self
            .database_path()
            .map(|path| is_inside(&path, &self.base_dir))
            .unwrap_or(false);
        if !inside_base {
            return Err(AppError::config(
                SETTING_DATABASE_URI,
                format!("must point inside {}", self.base_dir.display()),
            ));
        }

        if self.upload_folder != self.base_dir.join(UPLOAD_DIR_NAME) {
            return Err(AppError::config(
                SETTING_UPLOAD_FOLDER,
                format!(
                    "must be {}",
                    self.base_dir.join(UPLOAD_DIR_NAME).display()
                ),
            ));
        }

        for ext in &self.allowed_extensions {
            if ext.is_empty() || ext.starts_with('.') || ext.chars().any(|c| c.is_uppercase()) {
                return Err(AppError::config(
                    SETTING_ALLOWED_EXTENSIONS,
                    format!("'{}' must be a lowercase extension without a dot", ext),
                ));
            }
        }

        Ok(())
    }

    /// Get session secret bytes for cookie signing.
    pub fn secret_key_bytes(&self) -> &[u8] {
        self.secret_key.as_bytes()
    }

    /// Get CSRF secret bytes for token generation.
    pub fn csrf_secret_key_bytes(&self) -> &[u8] {
        self.csrf_secret_key.as_bytes()
    }

    /// Whether either secret is still the built-in development value.
    pub fn uses_default_secrets(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY || self.csrf_secret_key == DEFAULT_CSRF_SECRET_KEY
    }

    /// File path of the SQLite database, if the URI is a SQLite URI.
    pub fn database_path(&self) -> Option<PathBuf> {
        self.database_uri
            .strip_prefix(SQLITE_URI_PREFIX)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
    }

    /// Return a copy with different secrets. Useful for tests and tooling.
    pub fn with_secrets(mut self, secret_key: impl Into<String>, csrf_secret_key: impl Into<String>) -> Self {
        self.secret_key = secret_key.into();
        self.csrf_secret_key = csrf_secret_key.into();
        self
    }
}

/// Read an environment variable; only an unset variable counts as missing.
fn env_var(key: &str) -> AppResult<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::config(key, "is not valid UTF-8")),
    }
}

fn is_inside(path: &Path, dir: &Path) -> bool {
    path.starts_with(dir)
        && path != dir
        && !path.components().any(|c| matches!(c, Component::ParentDir))
}

fn absolutize(path: &Path) -> AppResult<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

fn parse_flag(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(
            key,
            format!("expected a boolean, got '{}'", other),
        )),
    }
}

fn env_key_for(field: &str) -> &str {
    match field {
        "secret_key" => ENV_SECRET_KEY,
        "csrf_secret_key" => ENV_CSRF_SECRET_KEY,
        "database_uri" => SETTING_DATABASE_URI,
        other => other,
    }
}

fn first_field_error(errors: ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    match fields.first() {
        Some((field, errs)) => {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "is invalid".to_string());
            let field = field.to_string();
            AppError::config(env_key_for(&field), message)
        }
        None => AppError::config("settings", errors.to_string()),
    }
}
