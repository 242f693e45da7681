//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the app shell to decide between a loading screen,
//! a redirect to `/login` or `/unauthorized`, and the requested page.
//!
//! DESIGN
//! ======
//! Authentication is an explicit phase rather than a set of booleans. The
//! post-login redirect is the `AuthenticatedJustNow -> Authenticated`
//! transition, so it can fire at most once per login.
//!
//! [`SessionManager`] owns the repository and the state together. It has no
//! reactive dependencies; `auth_context` mirrors its state into a signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::permissions::{PermissionEntry, PermissionSet};
use super::session::{CachedField, Session, SessionRecord, SessionRepository, SessionStore, StoredSession};
use crate::net::api::ApiClient;
use crate::net::error::LoginError;
use crate::net::transport::Transport;
use crate::net::types::LoginGrant;

/// Where the current user stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Stored session not read yet; no access decision may be made.
    #[default]
    Bootstrapping,
    Anonymous,
    Authenticated(Session),
    /// Logged in during this page lifetime; the landing redirect is pending.
    AuthenticatedJustNow(Session),
}

/// Authentication state derived from the persisted session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub phase: AuthPhase,
    /// Permission tree as granted, used to build navigation.
    pub menu: Vec<PermissionEntry>,
    pub permissions: PermissionSet,
    /// Cached persona id of the logged-in resident or staff member.
    pub user_id: Option<String>,
}

impl AuthState {
    /// State after reading the store at bootstrap.
    pub fn from_stored(stored: StoredSession, user_id: Option<String>) -> Self {
        match stored {
            StoredSession::Valid(record) => Self::with_record(AuthPhase::Authenticated(record.session), record.menu, user_id),
            StoredSession::Missing | StoredSession::Corrupt => Self::signed_out(),
        }
    }

    /// State right after a successful login.
    pub fn logged_in(record: SessionRecord, user_id: Option<String>) -> Self {
        Self::with_record(AuthPhase::AuthenticatedJustNow(record.session), record.menu, user_id)
    }

    pub fn signed_out() -> Self {
        Self { phase: AuthPhase::Anonymous, ..Self::default() }
    }

    fn with_record(phase: AuthPhase, menu: Vec<PermissionEntry>, user_id: Option<String>) -> Self {
        let permissions = PermissionSet::from_tree(&menu);
        if permissions.is_empty() {
            leptos::logging::warn!("session carries no permissions; every guarded section will be refused");
        }
        Self { phase, menu, permissions, user_id }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AuthPhase::Bootstrapping)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.phase {
            AuthPhase::Authenticated(session) | AuthPhase::AuthenticatedJustNow(session) => Some(session),
            AuthPhase::Bootstrapping | AuthPhase::Anonymous => None,
        }
    }

    pub fn user_name(&self) -> Option<&str> {
        self.session().map(|s| s.user_name.as_str())
    }

    pub fn user_role(&self) -> Option<&str> {
        self.session().map(|s| s.role.as_str())
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(|s| s.token.as_str())
    }

    /// Exact-match permission check; always false when not authenticated.
    pub fn has_permission(&self, required: &str) -> bool {
        self.is_authenticated() && self.permissions.allows(required)
    }

    /// Consume the one-shot post-login redirect. Returns `true` exactly once
    /// after each successful login.
    pub fn acknowledge_login(&mut self) -> bool {
        let phase = std::mem::take(&mut self.phase);
        match phase {
            AuthPhase::AuthenticatedJustNow(session) => {
                self.phase = AuthPhase::Authenticated(session);
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }
}

/// Non-reactive session manager: the single writer of the session store.
#[derive(Clone, Debug)]
pub struct SessionManager<S> {
    repo: SessionRepository<S>,
    state: AuthState,
    validated: bool,
}

impl<S: SessionStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            repo: SessionRepository::new(store),
            state: AuthState::default(),
            validated: false,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn repository(&self) -> &SessionRepository<S> {
        &self.repo
    }

    /// Read the stored session once. Later calls are no-ops.
    ///
    /// A token without role or user name is cleared and treated as no session.
    pub fn validate_session(&mut self) -> &AuthState {
        if self.validated {
            return &self.state;
        }
        self.validated = true;

        let stored = self.repo.load();
        if stored == StoredSession::Corrupt {
            leptos::logging::warn!("stored session incomplete, clearing");
            self.repo.clear();
        }
        let user_id = self.repo.cached(CachedField::PersonaId);
        self.state = AuthState::from_stored(stored, user_id);
        &self.state
    }

    /// Send credentials and commit the session on success.
    ///
    /// # Errors
    ///
    /// Propagates the classified [`LoginError`]; the store is left untouched.
    pub async fn login<T: Transport>(
        &mut self,
        api: &ApiClient<T>,
        identifier: &str,
        secret: &str,
    ) -> Result<(), LoginError> {
        let outcome = api.login(identifier, secret).await;
        self.complete_login(outcome)
    }

    /// Commit the result of a login request. All fields are written or none.
    ///
    /// # Errors
    ///
    /// Returns the rejection unchanged.
    pub fn complete_login(&mut self, outcome: Result<LoginGrant, LoginError>) -> Result<(), LoginError> {
        let grant = outcome?;
        self.repo.save(&grant.record);
        self.repo.cache(CachedField::PersonaId, grant.persona_id.as_deref());
        self.repo.cache(CachedField::Photo, grant.photo.as_deref());
        self.state = AuthState::logged_in(grant.record, grant.persona_id);
        leptos::logging::log!(
            "session started for {} with {} permissions",
            self.state.user_name().unwrap_or_default(),
            self.state.permissions.len()
        );
        self.validated = true;
        Ok(())
    }

    /// Drop the session. Safe to call when already signed out.
    pub fn logout(&mut self) {
        self.repo.clear();
        self.state = AuthState::signed_out();
        self.validated = true;
    }

    /// Same effect as [`SessionManager::logout`], triggered by a 401 or by
    /// the token disappearing from storage.
    pub fn expire(&mut self) {
        if self.state.is_authenticated() {
            leptos::logging::warn!("session expired");
        }
        self.logout();
    }

    pub fn acknowledge_login(&mut self) -> bool {
        self.state.acknowledge_login()
    }
}
