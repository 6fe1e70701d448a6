//! # CLI Module
//!
//! This module provides the command-line interface layer of the Learnitor admin
//! client. Every user-facing command lives here and coordinates the session,
//! the route guard, the views and terminal output.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`login`] - Signs in with email and password and persists the session
//! - [`logout`] - Ends the session and forgets the stored credential
//! - [`whoami`] - Shows who the stored session belongs to
//!
//! ### Content Management
//!
//! - [`dashboard`] - Course, topic and question counters
//! - [`list_courses`], [`add_course`], [`update_course`], [`delete_course`]
//! - [`list_categories`], [`add_category`], [`rename_category`], [`delete_category`]
//! - [`list_topics`], [`add_topic`], [`update_topic`], [`delete_topic`]
//! - [`list_questions`], [`add_question`], [`update_question`], [`delete_question`]
//! - [`list_answers`], [`add_answer`], [`update_answer`], [`delete_answer`]
//! - [`list_materials`], [`add_material`], [`update_material`], [`delete_material`]
//!
//! ## Flow
//!
//! ```text
//! Command
//!     ↓
//! open(route): restore session (spinner) → route guard
//!     ↓
//! View (load / create / update / delete)
//!     ↓
//! Table or status message
//! ```
//!
//! A command that needs a signed-in administrator opens its [`Route`]
//! first. While the stored session is being checked a spinner is shown; if
//! the guard redirects to the login screen the command stops and asks the
//! user to sign in.
//!
//! ## Error Handling
//!
//! Backend modules already print a diagnostic for each failed call. Commands
//! add one line saying which operation failed and exit with status 1 through
//! [`crate::error!`]. Nothing is retried.

mod answers;
mod auth;
mod categories;
mod courses;
mod dashboard;
mod materials;
mod questions;
mod topics;

pub use answers::{add_answer, delete_answer, list_answers, update_answer};
pub use auth::{login, logout, whoami};
pub use categories::{add_category, delete_category, list_categories, rename_category};
pub use courses::{add_course, delete_course, list_courses, update_course};
pub use dashboard::dashboard;
pub use materials::{add_material, delete_material, list_materials, update_material};
pub use questions::{add_question, delete_question, list_questions, update_question};
pub use topics::{add_topic, delete_topic, list_topics, update_topic};

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    backend::{ApiClient, Credentials},
    config, error,
    management::{SessionManager, SessionStore},
    routes::{self, Gate, GuardPolicy, Route},
};

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Session manager for the configured backend, not yet restored.
fn connect() -> SessionManager {
    let client = match ApiClient::new(&config::api_base_url(), Credentials::default()) {
        Ok(c) => c,
        Err(e) => error!("Cannot create API client. Err: {}", e),
    };
    SessionManager::new(client, SessionStore::default_location())
}

/// Restores the stored session and lets the route guard decide about
/// `route`. Returns the session only when the route may be rendered.
async fn open(route: Route) -> SessionManager {
    let session = connect();

    let pb = spinner("Restoring session...");
    let restored = session.restore().await;
    pb.finish_and_clear();

    if let Err(e) = restored {
        error!("Cannot restore session. Err: {}", e);
    }

    match routes::guard(&session.snapshot(), route, &GuardPolicy::default()) {
        Gate::Render(_) => session,
        Gate::Redirect(Route::Login) => error!(
            "An administrator session is required. Please run {} login",
            env!("CARGO_PKG_NAME")
        ),
        Gate::Redirect(other) => error!("Cannot open {}, continue at {}", route, other),
        Gate::Loading => error!("Session is still being restored"),
    }
}

/// Runs a backend call behind a spinner.
async fn with_spinner<T, F>(message: &str, call: F) -> T
where
    F: Future<Output = T>,
{
    let pb = spinner(message);
    let result = call.await;
    pb.finish_and_clear();
    result
}
