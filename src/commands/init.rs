//! Init command - Prepare the upload folder.

use crate::config::Settings;
use crate::errors::AppResult;

/// Execute the init command
pub fn execute(settings: &Settings) -> AppResult<()> {
    let folder = settings.ensure_upload_folder()?;
    println!("Upload folder ready: {}", folder.display());
    Ok(())
}
