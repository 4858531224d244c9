//! Show command - Print the resolved settings.

use crate::cli::args::ShowArgs;
use crate::config::Settings;
use crate::errors::AppResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> AppResult<()> {
    println!("{}", render(&args, settings)?);
    Ok(())
}

/// Render settings as JSON or `KEY = value` lines. Secrets are never included.
pub fn render(args: &ShowArgs, settings: &Settings) -> AppResult<String> {
    if args.json {
        return Ok(serde_json::to_string_pretty(settings)?);
    }

    let extensions: Vec<&str> = settings.allowed_extensions.iter().map(String::as_str).collect();
    let lines = [
        format!("BASE_DIR = {}", settings.base_dir.display()),
        "SECRET_KEY = [REDACTED]".to_string(),
        "WTF_CSRF_SECRET_KEY = [REDACTED]".to_string(),
        format!("SQLALCHEMY_DATABASE_URI = {}", settings.database_uri),
        format!(
            "SQLALCHEMY_TRACK_MODIFICATIONS = {}",
            settings.track_modifications
        ),
        format!("UPLOAD_FOLDER = {}", settings.upload_folder.display()),
        format!("ALLOWED_EXTENSIONS = {}", extensions.join(", ")),
    ];

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_hides_secrets() {
        let settings = Settings::for_base_dir("/srv").with_secrets("s3cr3t", "c5rf");
        let out = render(&ShowArgs { json: false }, &settings).unwrap();

        assert!(out.contains("SQLALCHEMY_DATABASE_URI = sqlite:////srv/app.db"));
        assert!(out.contains("ALLOWED_EXTENSIONS = docx, jpg, pdf, png"));
        assert!(!out.contains("s3cr3t"));
        assert!(!out.contains("c5rf"));
    }

    #[test]
    fn test_render_json_hides_secrets() {
        let settings = Settings::for_base_dir("/srv").with_secrets("s3cr3t", "c5rf");
        let out = render(&ShowArgs { json: true }, &settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["database_uri"], "sqlite:////srv/app.db");
        assert_eq!(value["track_modifications"], false);
        assert!(value.get("secret_key").is_none());
        assert!(value.get("csrf_secret_key").is_none());
    }
}
