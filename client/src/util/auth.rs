//! Access decisions shared by route guards and the app shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route applies the same rules, so the rules are plain functions over
//! [`AuthState`] and the current path. Components in `components::guards`
//! and `components::app_shell` only turn a decision into a view.
//!
//! Decisions are recomputed on every navigation; nothing is cached between
//! route entries. None of them can fail; lack of access is a redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::routes;
use crate::state::auth::{AuthPhase, AuthState};

/// Where a guard sends the user instead of the requested page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Unauthorized,
    Dashboard,
}

impl RedirectTarget {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => routes::LOGIN,
            Self::Unauthorized => routes::UNAUTHORIZED,
            Self::Dashboard => routes::DASHBOARD,
        }
    }
}

/// Outcome of a guard for one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Auth still bootstrapping; show a placeholder and decide later.
    Pending,
    Allow,
    Redirect(RedirectTarget),
}

/// Storage-only pre-filter: a session token must exist.
pub fn coarse_gate(has_token: bool) -> GateDecision {
    if has_token {
        GateDecision::Allow
    } else {
        GateDecision::Redirect(RedirectTarget::Login)
    }
}

/// Storage lost its token while the in-memory session still counts as signed
/// in (logout in another tab, storage cleared by hand). The session must be
/// expired before redirecting, or `/login` would bounce the user straight
/// back.
pub fn session_out_of_sync(has_token: bool, state: &AuthState) -> bool {
    !has_token && state.is_authenticated()
}

/// Permission gate for a route that may declare a required permission.
///
/// Matches the requirement against every menu and submenu name, exactly and
/// case-sensitively.
pub fn fine_gate(state: &AuthState, required: Option<&str>) -> GateDecision {
    if state.is_loading() {
        return GateDecision::Pending;
    }
    if !state.is_authenticated() {
        return GateDecision::Redirect(RedirectTarget::Login);
    }
    match required {
        None => GateDecision::Allow,
        Some(permission) if state.has_permission(permission) => GateDecision::Allow,
        Some(_) => GateDecision::Redirect(RedirectTarget::Unauthorized),
    }
}

/// Whole-app decision taken above the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShellView {
    Loading,
    RedirectToLogin,
    Render {
        /// Sidebar and mobile navigation visible.
        chrome: bool,
    },
}

pub fn shell_view(state: &AuthState, path: &str) -> ShellView {
    if state.is_loading() {
        return ShellView::Loading;
    }
    if !state.is_authenticated() && !is_login_path(path) {
        return ShellView::RedirectToLogin;
    }
    ShellView::Render { chrome: shows_chrome(path) }
}

/// Navigation chrome is hidden on `/` and `/login` whatever the auth state.
pub fn shows_chrome(path: &str) -> bool {
    let path = normalize(path);
    path != routes::ROOT && path != routes::LOGIN
}

/// Target for `/` and unknown paths.
pub fn landing_decision(state: &AuthState) -> GateDecision {
    if state.is_loading() {
        GateDecision::Pending
    } else if state.is_authenticated() {
        GateDecision::Redirect(RedirectTarget::Dashboard)
    } else {
        GateDecision::Redirect(RedirectTarget::Login)
    }
}

/// What the login page does with the current auth phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginPageAction {
    /// Anonymous or still loading: show the form.
    Stay,
    /// A login just succeeded; navigate only if the one-shot redirect is
    /// still unclaimed.
    FinishLogin,
    /// Session restored from storage; `/login` has nothing to offer.
    LeaveSignedIn,
}

impl LoginPageAction {
    /// Both ways off the login page land on the dashboard.
    pub fn target(self) -> Option<RedirectTarget> {
        match self {
            Self::Stay => None,
            Self::FinishLogin | Self::LeaveSignedIn => Some(RedirectTarget::Dashboard),
        }
    }
}

pub fn login_page_action(state: &AuthState) -> LoginPageAction {
    match state.phase {
        AuthPhase::AuthenticatedJustNow(_) => LoginPageAction::FinishLogin,
        AuthPhase::Authenticated(_) => LoginPageAction::LeaveSignedIn,
        AuthPhase::Bootstrapping | AuthPhase::Anonymous => LoginPageAction::Stay,
    }
}

/// Whether the login page navigates for `action`. `redirect_claimed` is
/// the result of consuming the one-shot redirect and is only asked for
/// [`LoginPageAction::FinishLogin`].
pub fn login_page_navigates(action: LoginPageAction, redirect_claimed: impl FnOnce() -> bool) -> bool {
    match action {
        LoginPageAction::Stay => false,
        LoginPageAction::FinishLogin => redirect_claimed(),
        LoginPageAction::LeaveSignedIn => true,
    }
}

fn is_login_path(path: &str) -> bool {
    normalize(path) == routes::LOGIN
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { routes::ROOT } else { trimmed }
}
