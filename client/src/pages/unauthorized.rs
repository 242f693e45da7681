//! Shown when an authenticated user opens a section they were not granted.

use leptos::prelude::*;

use crate::config::routes;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Acceso denegado"</h1>
            <p>"Su usuario no tiene permiso para ver esta sección."</p>
            <a class="unauthorized-page__back" href=routes::DASHBOARD>
                "Volver al inicio"
            </a>
        </div>
    }
}
