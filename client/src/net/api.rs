//! REST API client for the building-management backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page talks to the backend through [`ApiClient`]. Authenticated calls
//! carry the bearer token, and a 401 from any of them runs the registered
//! unauthorized hook, which expires the session for the whole app. Pages do
//! not need their own 401 handling.
//!
//! ERROR HANDLING
//! ==============
//! `login` returns a [`LoginError`] tagged with a [`SessionErrorKind`];
//! everything else returns an [`ApiError`]. Neither path panics.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use super::error::{ApiError, LoginError, SessionErrorKind};
use super::transport::{ApiReply, ApiRequest, Method, Transport};
use super::types::{ApiErrorBody, LoginGrant, LoginIdentifier, LoginReply, LoginRequest};

/// Called once per 401 observed on an authenticated request.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client bound to one API base URL.
#[derive(Clone)]
pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            transport,
            on_unauthorized: None,
        }
    }

    /// Register the session-expiry hook run on 401 replies.
    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    /// Absolute URL for an API path such as `/login` or `reservas`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /login`. Exactly one request, no retry.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginError`] whose kind distinguishes unknown user, locked
    /// account, bad credentials, validation failures, transport failures and
    /// anything else.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<LoginGrant, LoginError> {
        let payload = LoginRequest {
            identifier: LoginIdentifier::parse(identifier),
            password: secret.to_owned(),
        };
        let body = serde_json::to_value(&payload)
            .map_err(|e| LoginError::new(SessionErrorKind::Validation, e.to_string()))?;
        let request = ApiRequest {
            method: Method::Post,
            url: self.endpoint("/login"),
            bearer: None,
            body: Some(body),
        };
        match self.transport.send(request).await {
            Ok(reply) => login_outcome(&reply),
            Err(e) => {
                leptos::logging::warn!("login request failed: {e}");
                Err(LoginError::of_kind(SessionErrorKind::Network))
            }
        }
    }

    /// Authenticated `GET` returning the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] after running the unauthorized hook
    /// on 401, and `Status`/`Network`/`Decode` for the other failure modes.
    pub async fn get_json(&self, path: &str, token: &str) -> Result<serde_json::Value, ApiError> {
        let request = ApiRequest {
            method: Method::Get,
            url: self.endpoint(path),
            bearer: Some(token.to_owned()),
            body: None,
        };
        let reply = self.send_authorized(request).await?;
        serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_authorized(&self, request: ApiRequest) -> Result<ApiReply, ApiError> {
        let reply = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if reply.status == 401 {
            leptos::logging::warn!("401 from API, expiring session");
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
            return Err(ApiError::Unauthorized);
        }
        if !reply.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&reply.body)
                .ok()
                .and_then(|b| b.message);
            return Err(ApiError::Status { status: reply.status, message });
        }
        Ok(reply)
    }
}

/// Classify a `/login` reply.
///
/// # Errors
///
/// Non-2xx replies map to a kind via the body's `code`, falling back to the
/// status. A 2xx reply that is unreadable or incomplete is `Unknown`.
pub fn login_outcome(reply: &ApiReply) -> Result<LoginGrant, LoginError> {
    if reply.is_success() {
        let parsed: LoginReply = serde_json::from_str(&reply.body).map_err(|e| {
            leptos::logging::warn!("unreadable login reply: {e}");
            LoginError::of_kind(SessionErrorKind::Unknown)
        })?;
        return parsed.into_grant();
    }

    let body: ApiErrorBody = serde_json::from_str(&reply.body).unwrap_or_default();
    let kind = body
        .code
        .as_deref()
        .and_then(SessionErrorKind::from_code)
        .unwrap_or_else(|| SessionErrorKind::from_status(reply.status));
    let message = body
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| kind.default_message().to_owned());
    Err(LoginError::new(kind, message))
}
