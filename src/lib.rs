//! CNPM settings - configuration for the document sharing backend
//!
//! This crate defines the process-wide settings the web backend reads at
//! startup: session and CSRF secrets, the SQLite database URI, ORM change
//! tracking, and the upload folder with its extension allow-list.
//!
//! # Layout
//!
//! - **config**: Constants and the `Settings` type
//! - **uploads**: Allow-list checks and upload paths
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the resolved settings
//! cargo run -- show --json
//!
//! # Validate settings and check an upload name
//! cargo run -- check
//! cargo run -- check-file slides.pdf
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod uploads;

// Re-export commonly used types at crate root
pub use config::{settings, Settings};
pub use errors::{AppError, AppResult};
pub use uploads::extension_of;
