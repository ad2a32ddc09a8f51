//! The session client: the only writer of the in-memory session and of its
//! persisted record.

use crate::api_client::RegisterRequest;
use crate::{
    ApiClient, KeyValueStore, LoadResult, Result as SessionResult, Session, SessionError,
    TOKEN_KEY, USER_KEY,
};

use mp_core::{AuthResponse, Identity, ProfileUpdate, Role};

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use reqwest::{Method, RequestBuilder};

/// Authentication state for one running application.
///
/// Construct one at startup with [`SessionClient::load`] and share it (e.g. in an
/// `Arc`) with whatever needs the current identity.
///
/// Every mutating call is all-or-nothing: on error the in-memory session and the
/// persisted record are exactly as they were before the call. Calls are not
/// serialized against each other; if two overlap, the one that finishes last
/// decides the final state.
pub struct SessionClient {
    api: ApiClient,
    store: Arc<dyn KeyValueStore>,
    session: RwLock<Option<Session>>,
    load_result: LoadResult,
}

impl SessionClient {
    /// Restore the session from `store`.
    ///
    /// A record that is partial (only one key present), not text, or whose identity
    /// does not parse is treated as signed out: both keys are removed and the reason
    /// is reported in [`LoadResult::corruption_error`].
    ///
    /// # Errors
    ///
    /// Returns an error if the store itself cannot be read.
    pub fn load(api: ApiClient, store: Arc<dyn KeyValueStore>) -> SessionResult<Self> {
        let user = Self::read_record(store.as_ref(), USER_KEY)?;
        let token = Self::read_record(store.as_ref(), TOKEN_KEY)?;

        let restored = match (user, token) {
            (Err(reason), _) | (_, Err(reason)) => Err(reason),
            (Ok(user), Ok(token)) => Self::restore(user, token),
        };

        let (session, load_result) = match restored {
            Ok(session) => {
                if let Some(session) = &session {
                    info!(
                        "Restored session: {} ({})",
                        session.identity.id, session.identity.role
                    );
                }
                let user = session.as_ref().map(|s| s.identity.clone());
                (
                    session,
                    LoadResult {
                        user,
                        corruption_error: None,
                    },
                )
            }
            Err(reason) => {
                warn!("Stored session discarded: {reason}");
                Self::clear_store(store.as_ref());
                (
                    None,
                    LoadResult {
                        user: None,
                        corruption_error: Some(reason),
                    },
                )
            }
        };

        Ok(Self {
            api,
            store,
            session: RwLock::new(session),
            load_result,
        })
    }

    /// Interpret the two stored values; `Err` carries why the record is unusable.
    fn restore(user: Option<String>, token: Option<String>) -> Result<Option<Session>, String> {
        match (user, token) {
            (None, None) => {
                info!("No stored session (signed out)");
                Ok(None)
            }
            (Some(_), None) => Err(format!("'{USER_KEY}' present without '{TOKEN_KEY}'")),
            (None, Some(_)) => Err(format!("'{TOKEN_KEY}' present without '{USER_KEY}'")),
            (Some(user), Some(token)) => match serde_json::from_str::<Identity>(&user) {
                Ok(_) if token.trim().is_empty() => Err(format!("'{TOKEN_KEY}' is empty")),
                Ok(identity) => Ok(Some(Session::new(identity, token))),
                Err(e) => Err(format!("'{USER_KEY}' is not a valid identity: {e}")),
            },
        }
    }

    /// A value that is not text counts as a corrupt record rather than a storage failure
    fn read_record(
        store: &dyn KeyValueStore,
        key: &str,
    ) -> SessionResult<Result<Option<String>, String>> {
        match store.get(key) {
            Ok(value) => Ok(Ok(value)),
            Err(SessionError::Malformed { .. }) => {
                Ok(Err(format!("'{key}' is not valid UTF-8")))
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_result(&self) -> &LoadResult {
        &self.load_result
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn current_identity(&self) -> Option<Identity> {
        self.read().as_ref().map(|s| s.identity.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    pub fn is_vendor(&self) -> bool {
        self.read()
            .as_ref()
            .is_some_and(|s| s.identity.role == Role::Vendor)
    }

    /// `Bearer <token>` while signed in
    pub fn authorization_header(&self) -> Option<String> {
        self.read().as_ref().map(Session::authorization_header)
    }

    /// Build an API request carrying the current credential, if any.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let token = self.read().as_ref().map(|s| s.token.clone());
        self.api.request(method, path, token.as_deref())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create an account and sign in as it.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
        role: Role,
        phone: Option<&str>,
    ) -> SessionResult<Identity> {
        debug!("Registering {email} as {role}");

        let body = RegisterRequest {
            name,
            email,
            password,
            password_confirmation,
            role,
            phone,
        };
        let auth = self.api.register(&body).await?;

        self.sign_in(auth)
    }

    /// Sign in with an email or username.
    pub async fn login(&self, login: &str, password: &str) -> SessionResult<Identity> {
        debug!("Signing in as {login}");

        let auth = self.api.login(login, password).await?;

        self.sign_in(auth)
    }

    /// Sign out.
    ///
    /// Does nothing when no session is active. Otherwise the server is notified on a
    /// best-effort basis and the local session is cleared whatever the outcome.
    pub async fn logout(&self) {
        let Some(token) = self.read().as_ref().map(|s| s.token.clone()) else {
            debug!("Logout requested without an active session");
            return;
        };

        if let Err(e) = self.api.logout(&token).await {
            warn!("Server-side logout failed, signing out locally anyway: {e}");
        }

        *self.write() = None;
        Self::clear_store(self.store.as_ref());
        info!("Signed out");
    }

    /// Send a partial profile update; the server's answer replaces the identity.
    ///
    /// # Errors
    ///
    /// [`SessionError::Unauthenticated`] without making a request when signed out.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> SessionResult<Identity> {
        let Some((id, token)) = self
            .read()
            .as_ref()
            .map(|s| (s.identity.id.clone(), s.token.clone()))
        else {
            return Err(SessionError::unauthenticated("update_profile"));
        };

        let updated = self.api.update_user(&id, update, &token).await?;

        self.persist(&updated, None)?;

        let kept = match self.write().as_mut() {
            Some(current) => {
                current.identity = updated.clone();
                true
            }
            None => false,
        };

        if !kept {
            // Signed out while the update was in flight; storage must stay empty.
            Self::clear_store(self.store.as_ref());
            warn!("Profile updated after sign-out; update not kept locally");
            return Ok(updated);
        }

        info!("Profile updated: {}", updated.id);
        Ok(updated)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn sign_in(&self, auth: AuthResponse) -> SessionResult<Identity> {
        let AuthResponse { user, token } = auth;

        if token.trim().is_empty() {
            return Err(SessionError::from_json(serde::de::Error::custom(
                "auth response carried an empty token",
            )));
        }

        self.persist(&user, Some(&token))?;

        info!("Signed in: {} ({})", user.id, user.role);
        *self.write() = Some(Session::new(user.clone(), token));

        Ok(user)
    }

    /// Write the record; on failure put back what the current session implies.
    fn persist(&self, identity: &Identity, token: Option<&str>) -> SessionResult<()> {
        let user = serde_json::to_string(identity)?;

        let written = self.store.set(USER_KEY, &user).and_then(|()| match token {
            Some(token) => self.store.set(TOKEN_KEY, token),
            None => Ok(()),
        });

        if let Err(e) = written {
            warn!("Failed to persist session, restoring previous record: {e}");
            self.restore_store();
            return Err(e);
        }

        Ok(())
    }

    fn restore_store(&self) {
        let current = self.read().clone();

        let restored = match current {
            Some(session) => serde_json::to_string(&session.identity)
                .map_err(SessionError::from_json)
                .and_then(|user| self.store.set(USER_KEY, &user))
                .and_then(|()| self.store.set(TOKEN_KEY, &session.token)),
            None => {
                Self::clear_store(self.store.as_ref());
                Ok(())
            }
        };

        if let Err(e) = restored {
            warn!("Failed to restore previous session record: {e}");
        }
    }

    fn clear_store(store: &dyn KeyValueStore) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = store.remove(key) {
                warn!("Failed to remove '{key}' from storage: {e}");
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Session>> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Session>> {
        self.session.write().unwrap_or_else(PoisonError::into_inner)
    }
}
