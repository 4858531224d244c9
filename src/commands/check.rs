//! Check commands - Validate settings and upload file names.

use crate::cli::args::CheckFileArgs;
use crate::config::Settings;
use crate::errors::{AppError, AppResult};

/// Execute the check command
pub fn execute(settings: &Settings) -> AppResult<()> {
    settings.validate()?;

    if settings.uses_default_secrets() {
        tracing::warn!("Default secrets in use; set SECRET_KEY and WTF_CSRF_SECRET_KEY");
    }
    if !settings.upload_folder.is_dir() {
        tracing::warn!(
            path = %settings.upload_folder.display(),
            "Upload folder does not exist yet; run `init`"
        );
    }

    println!("Settings OK");
    Ok(())
}

/// Execute the check-file command
///
/// Fails when any of the names is rejected.
pub fn execute_files(args: CheckFileArgs, settings: &Settings) -> AppResult<()> {
    let mut rejected = 0usize;

    for filename in &args.filenames {
        match settings.upload_path(filename) {
            Ok(path) => println!("{}: allowed -> {}", filename, path.display()),
            Err(e) => {
                rejected += 1;
                println!("{}: rejected ({})", filename, e);
            }
        }
    }

    if rejected > 0 {
        return Err(AppError::validation(format!(
            "{} of {} file names rejected",
            rejected,
            args.filenames.len()
        )));
    }
    Ok(())
}
