//! Configuration management for the Learnitor admin client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The backend base URL is resolved once, when the
//! API client is built, and never passed per call.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

/// Backend used when `LEARNITOR_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://learnitor.onrender.com";

/// Directory name below the platform data directory.
pub const APP_DIR: &str = "learnitor-admin";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the application directory if it does not exist. A missing `.env`
/// file is fine since every setting has a default; a file that exists but
/// cannot be parsed is reported as an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/learnitor-admin/.env`
/// - macOS: `~/Library/Application Support/learnitor-admin/.env`
/// - Windows: `%LOCALAPPDATA%/learnitor-admin/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The application directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let path = app_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Returns the backend base URL.
///
/// Reads `LEARNITOR_API_URL` and falls back to [`DEFAULT_API_URL`]. Trailing
/// slashes are removed so resource paths can always start with `/`.
///
/// # Example
///
/// ```
/// let url = api_base_url(); // e.g., "https://learnitor.onrender.com"
/// ```
pub fn api_base_url() -> String {
    let url = env::var("LEARNITOR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    url.trim_end_matches('/').to_string()
}

/// Returns the directory holding persisted client state.
///
/// `LEARNITOR_DATA_DIR` overrides the platform default, which is the
/// `learnitor-admin` folder inside the local data directory.
pub fn data_dir() -> PathBuf {
    match env::var("LEARNITOR_DATA_DIR") {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => app_dir(),
    }
}

fn app_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}
