//! Application shell: whole-app auth gating plus navigation chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits between the router and the route table. While the session is still
//! bootstrapping nothing but a loading indicator renders; once loaded,
//! anonymous users are sent to `/login` from anywhere else. The sidebar and
//! mobile toggle are a pure function of the path.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::auth_context::use_auth;
use crate::components::guards::LoadingIndicator;
use crate::components::sidebar::{NavToggle, Sidebar};
use crate::config::routes;
use crate::util::auth::{ShellView, shell_view};

#[component]
pub fn AppShell(children: ChildrenFn) -> impl IntoView {
    let state = use_auth().state();
    let location = use_location();
    let view_kind = Memo::new(move |_| shell_view(&state.get(), &location.pathname.get()));

    move || match view_kind.get() {
        ShellView::Loading => view! {
            <div class="app-shell app-shell--loading">
                <LoadingIndicator/>
            </div>
        }
        .into_any(),
        ShellView::RedirectToLogin => view! { <Redirect path=routes::LOGIN/> }.into_any(),
        ShellView::Render { chrome: true } => view! {
            <div class="app-shell">
                <NavToggle/>
                <Sidebar/>
                <main class="app-shell__content">{children()}</main>
            </div>
        }
        .into_any(),
        ShellView::Render { chrome: false } => view! {
            <div class="app-shell app-shell--bare">
                <main class="app-shell__content">{children()}</main>
            </div>
        }
        .into_any(),
    }
}
