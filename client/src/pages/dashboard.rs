//! Dashboard: the default landing page for authenticated users.
//!
//! SYSTEM CONTEXT
//! ==============
//! Greets the user and links every console section their permissions open.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::auth_context::use_auth;
use crate::state::sections::permitted_sections;

pub(crate) fn greeting(user_name: Option<&str>) -> String {
    match user_name.map(str::trim) {
        Some(name) if !name.is_empty() => format!("Hola, {name}"),
        _ => "Hola".to_owned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();

    let title = move || state.with(|s| greeting(s.user_name()));
    let role = move || auth.user_role().unwrap_or_default();
    let photo = auth.photo();
    let sections = move || state.with(|s| permitted_sections(&s.permissions));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                {photo.map(|src| view! { <img class="dashboard-header__photo" src=src alt=""/> })}
                <div>
                    <h1>{title}</h1>
                    <p class="dashboard-header__role">{role}</p>
                </div>
            </header>
            <Show
                when=move || !sections().is_empty()
                fallback=|| view! { <p class="dashboard-empty">"Su usuario no tiene secciones habilitadas."</p> }
            >
                <ul class="dashboard-grid">
                    {move || {
                        sections()
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <li class="dashboard-card">
                                        <a href=section.path()>{section.title()}</a>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
