use crate::{
    cli::{connect, spinner},
    error, info,
    routes::{self, Gate, GuardPolicy, Route},
    success, warning,
};

/// Signs in and persists the session for later commands.
///
/// When a valid administrator session already exists the login screen is
/// skipped, just as the route guard would send the user on to the dashboard.
pub async fn login(email: &str, password: &str) {
    let session = connect();
    let policy = GuardPolicy::default();

    let pb = spinner("Restoring session...");
    let restored = session.restore().await;
    pb.finish_and_clear();
    if let Err(e) = restored {
        warning!("Ignoring stored session. Err: {}", e);
    }

    let gate = routes::guard(&session.snapshot(), Route::Login, &policy);
    if let Gate::Redirect(Route::Dashboard) = gate {
        if let Some(profile) = session.snapshot().profile() {
            info!("Already signed in as {}", profile.display_name());
        }
        return;
    }

    let pb = spinner("Signing in...");
    let result = session.login(email, password).await;
    pb.finish_and_clear();

    let profile = match result {
        Ok(p) => p,
        Err(e) => error!("Failed to sign in. Err: {}", e),
    };

    success!("Signed in as {}", profile.display_name());
    if !policy.permits(&profile) {
        warning!(
            "The account has role '{}'; the admin screens stay locked for it.",
            profile.role
        );
    }
}

pub async fn logout() {
    let session = connect();
    match session.logout().await {
        Ok(()) => success!("Signed out."),
        Err(e) => error!("Failed to sign out cleanly. Err: {}", e),
    }
}

/// Shows who the stored session belongs to, checked against the backend.
pub async fn whoami() {
    let session = connect();

    let pb = spinner("Restoring session...");
    let restored = session.restore().await;
    pb.finish_and_clear();

    match restored {
        Ok(s) => match s.profile() {
            Some(profile) => {
                info!("Signed in as {}", profile.display_name());
                info!("Role: {}", profile.role);
                info!("Backend: {}", session.client().base_url());
            }
            None => warning!("Not signed in. Please run {} login", env!("CARGO_PKG_NAME")),
        },
        Err(e) => error!("Cannot restore session. Err: {}", e),
    }
}
