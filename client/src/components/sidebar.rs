//! Sidebar navigation and its mobile toggle.
//!
//! Lists only the sections the granted permissions open, plus the user's
//! name, role and a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth_context::use_auth;
use crate::config::routes;
use crate::state::sections::permitted_sections;
use crate::state::ui::UiState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let sections = move || state.with(|s| permitted_sections(&s.permissions));
    let close_nav = move |_| ui.update(UiState::close_nav);
    let on_logout = move |_| {
        auth.logout();
        ui.update(UiState::close_nav);
        navigate(routes::LOGIN, NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <aside class=move || if ui.get().nav_open { "sidebar sidebar--open" } else { "sidebar" }>
            <div class="sidebar__user">
                <span class="sidebar__name">{move || auth.user_name().unwrap_or_default()}</span>
                <span class="sidebar__role">{move || auth.user_role().unwrap_or_default()}</span>
            </div>
            <nav class="sidebar__nav">
                <a class="sidebar__link" href=routes::DASHBOARD on:click=close_nav>
                    "Inicio"
                </a>
                {move || {
                    sections()
                        .into_iter()
                        .map(|section| {
                            view! {
                                <a class="sidebar__link" href=section.path() on:click=close_nav>
                                    {section.title()}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            <button class="sidebar__logout" type="button" on:click=on_logout>
                "Cerrar sesión"
            </button>
        </aside>
    }
}

/// Hamburger button shown on narrow screens.
#[component]
pub fn NavToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <button
            class="nav-toggle"
            type="button"
            aria-label="Menú"
            aria-expanded=move || ui.get().nav_open.to_string()
            on:click=move |_| ui.update(UiState::toggle_nav)
        >
            "☰"
        </button>
    }
}
