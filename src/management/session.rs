use std::sync::RwLock;

use tokio::sync::Mutex;

use crate::{
    backend::{ApiClient, Credentials, auth},
    error::{SessionError, StorageError},
    management::storage::{SessionStore, TOKEN_KEY, USER_KEY},
    types::UserProfile,
    warning,
};

/// Authentication state of the client.
///
/// A profile only exists together with the credential it was fetched with.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    /// A persisted credential is being checked against the backend.
    Restoring { credential: String },
    Authenticated {
        credential: String,
        profile: UserProfile,
    },
}

impl Session {
    pub fn credential(&self) -> Option<&str> {
        match self {
            Session::Unauthenticated => None,
            Session::Restoring { credential } | Session::Authenticated { credential, .. } => {
                Some(credential)
            }
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Session::Authenticated { profile, .. } => Some(profile),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Restoring { .. })
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}

/// Single owner of the login session.
///
/// The manager is the only writer of the persisted credential, the API
/// client's [`Credentials`] and the in-memory [`Session`]. Every transition
/// writes storage first and the credential header second, and transitions
/// never interleave with each other.
#[derive(Debug)]
pub struct SessionManager {
    client: ApiClient,
    store: SessionStore,
    state: RwLock<Session>,
    transitions: Mutex<()>,
}

impl SessionManager {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            state: RwLock::new(Session::Unauthenticated),
            transitions: Mutex::new(()),
        }
    }

    /// Client carrying this session's credential.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rebuilds the session from persisted state.
    ///
    /// Without a stored credential the session becomes `Unauthenticated`
    /// right away. An unreadable session file counts as no credential and is
    /// cleared. Otherwise it stays `Restoring` until the profile fetch
    /// settles. A failed fetch clears the credential everywhere and is not
    /// an error of `restore` itself: the resulting `Unauthenticated` state is
    /// the outcome.
    pub async fn restore(&self) -> Result<Session, SessionError> {
        let _transition = self.transitions.lock().await;

        let stored = match self.store.get(TOKEN_KEY).await {
            Ok(stored) => stored,
            Err(StorageError::Serde(e)) => {
                warning!("Stored session is unreadable: {}", e);
                self.clear().await?;
                return Ok(Session::Unauthenticated);
            }
            Err(e) => return Err(e.into()),
        };

        let Some(credential) = stored else {
            self.credentials().clear();
            self.set_state(Session::Unauthenticated);
            return Ok(Session::Unauthenticated);
        };

        self.credentials().set(credential.clone());
        self.set_state(Session::Restoring {
            credential: credential.clone(),
        });

        let profile = match auth::current_user(&self.client).await {
            Ok(profile) => profile,
            Err(e) => {
                warning!("Stored session is no longer valid: {}", e);
                self.clear().await?;
                return Ok(Session::Unauthenticated);
            }
        };

        if let Err(e) = self.persist_profile(&profile).await {
            self.credentials().clear();
            self.set_state(Session::Unauthenticated);
            return Err(e.into());
        }

        let session = Session::Authenticated { credential, profile };
        self.set_state(session.clone());
        Ok(session)
    }

    /// Signs in and commits the new session.
    ///
    /// On failure nothing is persisted and the current session stays as it
    /// was; the error is handed back for the caller to show.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, SessionError> {
        let _transition = self.transitions.lock().await;

        let response = auth::login(&self.client, email, password).await?;
        let user = serde_json::to_string(&response.user).map_err(StorageError::from)?;

        self.store
            .set_all(&[(TOKEN_KEY, response.token.as_str()), (USER_KEY, user.as_str())])
            .await?;
        self.credentials().set(response.token.clone());
        self.set_state(Session::Authenticated {
            credential: response.token,
            profile: response.user.clone(),
        });

        Ok(response.user)
    }

    /// Ends the session. Calling it while signed out is a no-op.
    ///
    /// The in-memory session is cleared even when the stored copy cannot be
    /// removed; that failure is still reported.
    pub async fn logout(&self) -> Result<(), SessionError> {
        let _transition = self.transitions.lock().await;
        self.clear().await
    }

    async fn clear(&self) -> Result<(), SessionError> {
        let removed = self.store.remove_all(&[TOKEN_KEY, USER_KEY]).await;
        self.credentials().clear();
        self.set_state(Session::Unauthenticated);
        removed.map_err(SessionError::from)
    }

    async fn persist_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let user = serde_json::to_string(profile)?;
        self.store.set(USER_KEY, &user).await
    }

    fn credentials(&self) -> &Credentials {
        self.client.credentials()
    }

    fn set_state(&self, session: Session) {
        *self
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = session;
    }
}
