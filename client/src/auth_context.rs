//! Reactive auth façade provided to the whole component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthContext`] wraps the non-reactive [`SessionManager`] and mirrors its
//! state into a signal after every transition. Guards, the shell and pages
//! read that signal; only the context writes the session store.
//!
//! The API client behind [`AuthContext::fetch_json`] carries a 401 hook that
//! expires the session, so any page whose request is rejected sends the user
//! back to `/login` through the shell.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config;
use crate::net::api::{ApiClient, UnauthorizedHook};
use crate::net::error::{ApiError, LoginError, SessionErrorKind};
use crate::net::transport::BrowserTransport;
use crate::state::auth::{AuthState, SessionManager};
use crate::state::session::{BrowserStore, CachedField};

pub type BrowserApi = ApiClient<BrowserTransport>;

/// Copyable handle to the app-wide session.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    manager: StoredValue<SessionManager<BrowserStore>>,
    api: StoredValue<BrowserApi>,
}

impl AuthContext {
    fn new() -> Self {
        let state = RwSignal::new(AuthState::default());
        let manager = StoredValue::new(SessionManager::new(BrowserStore));
        let hook: UnauthorizedHook = Arc::new(move || {
            manager.update_value(SessionManager::expire);
            sync(manager, state);
        });
        let api = StoredValue::new(ApiClient::new(config::api_base_url(), BrowserTransport).with_unauthorized_hook(hook));
        Self { state, manager, api }
    }

    /// Read-only view of the auth state (phase, permission tree, persona id)
    /// for guards and components.
    pub fn state(&self) -> Signal<AuthState> {
        self.state.into()
    }

    pub fn user_name(&self) -> Option<String> {
        self.state.with(|s| s.user_name().map(str::to_owned))
    }

    pub fn user_role(&self) -> Option<String> {
        self.state.with(|s| s.user_role().map(str::to_owned))
    }

    /// Cached profile photo returned at login, if any.
    pub fn photo(&self) -> Option<String> {
        self.manager
            .with_value(|m| m.repository().cached(CachedField::Photo))
    }

    /// Read the persisted session. Runs once per context.
    pub fn validate_session(&self) {
        self.manager.update_value(|m| {
            m.validate_session();
        });
        sync(self.manager, self.state);
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns the classified [`LoginError`]; nothing is persisted on error.
    pub async fn login(self, identifier: String, secret: String) -> Result<(), LoginError> {
        let api = self.api.get_value();
        let outcome = api.login(&identifier, &secret).await;
        let committed = self
            .manager
            .try_update_value(|m| m.complete_login(outcome))
            .unwrap_or_else(|| Err(LoginError::of_kind(SessionErrorKind::Unknown)));
        sync(self.manager, self.state);
        committed
    }

    /// Clear the session. Callers navigate to `/login`; the shell also
    /// redirects once the state turns anonymous.
    pub fn logout(&self) {
        self.manager.update_value(SessionManager::logout);
        sync(self.manager, self.state);
    }

    /// End the session without user action: a 401, or a token that vanished
    /// from storage.
    pub fn expire(&self) {
        self.manager.update_value(SessionManager::expire);
        sync(self.manager, self.state);
    }

    /// Consume the one-shot post-login redirect.
    pub fn take_login_redirect(&self) -> bool {
        let fired = self
            .manager
            .try_update_value(SessionManager::acknowledge_login)
            .unwrap_or(false);
        if fired {
            sync(self.manager, self.state);
        }
        fired
    }

    /// API client whose 401 replies expire this session.
    fn api(&self) -> BrowserApi {
        self.api.get_value()
    }

    /// Authenticated `GET` with the current token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] when there is no session or the server
    /// rejects it; see [`ApiClient::get_json`] for the rest.
    pub async fn fetch_json(self, path: &str) -> Result<serde_json::Value, ApiError> {
        let Some(token) = self.state.with_untracked(|s| s.token().map(str::to_owned)) else {
            return Err(ApiError::Unauthorized);
        };
        self.api().get_json(path, &token).await
    }
}

fn sync(manager: StoredValue<SessionManager<BrowserStore>>, state: RwSignal<AuthState>) {
    if let Some(next) = manager.try_with_value(|m| m.state().clone()) {
        state.set(next);
    }
}

/// Create the context, provide it, and schedule session validation.
pub fn provide_auth_context() -> AuthContext {
    let auth = AuthContext::new();
    provide_context(auth);
    Effect::new(move || auth.validate_session());
    auth
}

pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
