use crate::{
    backend::ApiClient,
    error::ApiError,
    types::{LoginRequest, LoginResponse, UserProfile},
    warning,
};

pub const LOGIN_PATH: &str = "/api/login/";
pub const PROFILE_PATH: &str = "/api/user/";

/// Exchanges email and password for a credential and the user's profile.
///
/// Nothing is stored here; committing the result is the session manager's job.
pub async fn login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    client
        .post(LOGIN_PATH, &request)
        .await
        .inspect_err(|e| warning!("Login failed: {}", e))
}

/// Fetches the profile that belongs to the client's current credential.
pub async fn current_user(client: &ApiClient) -> Result<UserProfile, ApiError> {
    client
        .get(PROFILE_PATH)
        .await
        .inspect_err(|e| warning!("Failed to fetch current user: {}", e))
}
