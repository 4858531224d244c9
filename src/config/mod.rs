//! Application configuration module
//!
//! Handles environment overrides and application-wide constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::{settings, Settings};
