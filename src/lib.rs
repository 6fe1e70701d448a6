//! Learnitor Admin Client Library
//!
//! This library provides the administrative client for the Learnitor learning
//! platform backend. It covers authenticated CRUD access to courses, categories,
//! topics, questions, answers and study materials, a persisted login session,
//! and the route guard that decides which screens a session may open.
//!
//! # Modules
//!
//! - `backend` - HTTP API client and per-resource REST modules
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy shared by the backend and session layers
//! - `management` - Session state machine, persisted storage and local collections
//! - `routes` - Route table and route guard
//! - `types` - Data structures and type definitions
//! - `utils` - Formula segmentation, filtering and sorting helpers
//! - `views` - Screen state bound to backend resources
//!
//! # Example
//!
//! ```
//! use learnitor_admin::{
//!     backend::{ApiClient, Credentials},
//!     config,
//!     management::{SessionManager, SessionStore},
//! };
//!
//! #[tokio::main]
//! async fn main() -> learnitor_admin::Res<()> {
//!     config::load_env().await?;
//!     let client = ApiClient::new(&config::api_base_url(), Credentials::default())?;
//!     let session = SessionManager::new(client, SessionStore::default_location());
//!     session.restore().await?;
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod routes;
pub mod types;
pub mod utils;
pub mod views;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI glue where errors of different layers meet. Library
/// layers return their own typed errors from [`error`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Restoring session...");
/// info!("Found {} courses", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Signed in as {}", email);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the CLI layer uses this macro. Library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// The backend modules report failed calls through this macro before handing
/// the error back to the caller, so it writes to stderr and never interferes
/// with table output.
///
/// # Example
///
/// ```
/// warning!("Failed to fetch topics for course {}: {}", id, err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
