//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent gates wrap every protected route:
//! - [`SessionGate`] only checks that a session token is stored. It reads
//!   storage directly and may briefly disagree with the auth context.
//! - [`PermissionGate`] waits for the auth context to finish loading, then
//!   checks the route's required permission against the granted tree.
//!
//! The decisions themselves live in `util::auth`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth_context::use_auth;
use crate::state::session::{BrowserStore, SessionRepository};
use crate::util::auth::{GateDecision, coarse_gate, fine_gate, landing_decision, session_out_of_sync};

/// Placeholder shown while an access decision is pending.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading" role="status">
            <span class="loading__spinner"></span>
            <span class="loading__label">"Cargando..."</span>
        </div>
    }
}

/// Coarse gate: redirect to `/login` when no session token is stored.
///
/// Runs as an effect so server rendering and hydration produce the same
/// markup; until the browser has checked storage the children render. A
/// token missing under a signed-in context expires the session first.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let location = use_location();
    let checked = RwSignal::new(None::<GateDecision>);

    Effect::new(move || {
        location.pathname.track();
        let has_token = SessionRepository::new(BrowserStore).has_token();
        if auth.state().with_untracked(|s| session_out_of_sync(has_token, s)) {
            leptos::logging::warn!("session token missing from storage, expiring session");
            auth.expire();
        }
        let decision = coarse_gate(has_token);
        checked.set(Some(decision));
        if let GateDecision::Redirect(target) = decision {
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match checked.get() {
        Some(GateDecision::Redirect(_)) => ().into_any(),
        Some(GateDecision::Allow | GateDecision::Pending) | None => children().into_any(),
    }
}

/// Fine-grained gate: loading placeholder, `/login`, `/unauthorized`, or the
/// wrapped route.
#[component]
pub fn PermissionGate(permission: Option<&'static str>, children: ChildrenFn) -> impl IntoView {
    let state = use_auth().state();
    let decision = Memo::new(move |_| fine_gate(&state.get(), permission));
    move || match decision.get() {
        GateDecision::Pending => view! { <LoadingIndicator/> }.into_any(),
        GateDecision::Allow => children().into_any(),
        GateDecision::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
    }
}

/// `/` and unknown paths: dashboard when signed in, otherwise `/login`.
#[component]
pub fn LandingRedirect() -> impl IntoView {
    let state = use_auth().state();
    let decision = Memo::new(move |_| landing_decision(&state.get()));
    move || match decision.get() {
        GateDecision::Redirect(target) => view! { <Redirect path=target.path()/> }.into_any(),
        GateDecision::Pending | GateDecision::Allow => view! { <LoadingIndicator/> }.into_any(),
    }
}
