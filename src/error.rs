//! Error types shared by the backend and session layers.
//!
//! Backend calls fail with an [`ApiError`] whose variant tells the caller what
//! kind of failure happened, so presentation code can react by kind instead
//! of parsing free text.

use reqwest::StatusCode;
use serde_json::Value;

/// Failure of a single backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Invalid credentials, or a missing or expired credential on a protected call.
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// The backend rejected the payload.
    #[error("Validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// The identifier does not exist (any more) on the backend.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response.
    #[error("Backend responded with {status}: {body}")]
    Server { status: u16, body: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-2xx response.
    ///
    /// `path` is only used to make not-found messages point at the stale
    /// identifier.
    pub fn from_response(status: StatusCode, path: &str, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth {
                status: status.as_u16(),
                message: detail_message(body).unwrap_or_else(|| body.trim().to_string()),
            },
            StatusCode::NOT_FOUND => ApiError::NotFound(path.to_string()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let (field, message) = first_field_error(body);
                ApiError::Validation { field, message }
            }
            _ => ApiError::Server {
                status: status.as_u16(),
                body: body.trim().to_string(),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }
}

/// Failure reading or writing persisted client state.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt session file: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failure of a session operation.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Failure of a view operation that needs local state to be in place first.
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Answers can only be changed while a question is open.
    #[error("No question is open")]
    NoQuestionOpen,
}

fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .or_else(|| value.get("error"))
        .and_then(message_of)
}

/// Extracts the first `field: [messages]` pair of a validation body.
///
/// Bodies look like `{"title": ["This field is required."]}`; bodies that are
/// not JSON objects are reported against the `non_field_errors` pseudo field.
fn first_field_error(body: &str) -> (String, String) {
    let fallback = || ("non_field_errors".to_string(), body.trim().to_string());

    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };

    map.iter()
        .find_map(|(field, value)| message_of(value).map(|m| (field.clone(), m)))
        .unwrap_or_else(fallback)
}

fn message_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(message_of),
        Value::Object(map) => map.values().find_map(message_of),
        _ => None,
    }
}
