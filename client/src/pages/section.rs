//! Generic list page for a console section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches the section's collection through the auth context, so a 401 here
//! expires the session like anywhere else. Forms, filters and exports for
//! each section are not part of this page.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::state::sections::Section;
use crate::util::table::Table;

/// Load state of the section's list.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListState {
    Loading,
    Ready(Table),
    Failed(String),
}

/// Message for a failed list request. `None` when the session expired and
/// the shell is already redirecting.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn list_error_message(err: &ApiError) -> Option<String> {
    match err {
        ApiError::Unauthorized => None,
        ApiError::Status { message: Some(message), .. } => Some(message.clone()),
        ApiError::Status { status, message: None } => Some(format!("El servidor respondió {status}.")),
        ApiError::Network(_) => Some("No se pudo conectar con el servidor.".to_owned()),
        ApiError::Decode(_) => Some("Respuesta inesperada del servidor.".to_owned()),
    }
}

#[component]
pub fn SectionPage(section: Section) -> impl IntoView {
    let list = RwSignal::new(ListState::Loading);

    #[cfg(feature = "hydrate")]
    {
        let auth = crate::auth_context::use_auth();
        leptos::task::spawn_local(async move {
            match auth.fetch_json(section.endpoint()).await {
                Ok(value) => list.set(ListState::Ready(crate::util::table::table_from_json(&value))),
                Err(e) => {
                    leptos::logging::warn!("list {} failed: {e}", section.endpoint());
                    if let Some(message) = list_error_message(&e) {
                        list.set(ListState::Failed(message));
                    }
                }
            }
        });
    }

    view! {
        <div class="section-page">
            <h1>{section.title()}</h1>
            {move || match list.get() {
                ListState::Loading => view! { <p class="section-page__status">"Cargando..."</p> }.into_any(),
                ListState::Failed(message) => view! { <p class="section-page__error">{message}</p> }.into_any(),
                ListState::Ready(table) if table.is_empty() => {
                    view! { <p class="section-page__status">"Sin registros."</p> }.into_any()
                }
                ListState::Ready(table) => view! { <DataTable table/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn DataTable(table: Table) -> impl IntoView {
    let Table { columns, rows } = table;
    view! {
        <table class="data-table">
            <thead>
                <tr>{columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}</tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! { <tr>{row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}</tr> })
                    .collect_view()}
            </tbody>
        </table>
    }
}
