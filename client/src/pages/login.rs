//! Login page: e-mail or DNI plus password.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field checks run before any request so the server only sees well-formed
//! identifiers. Rejections come back as a [`LoginError`](crate::net::error::LoginError) and are shown as-is;
//! a successful login claims the one-shot redirect to the dashboard, and a
//! session restored from storage leaves the page as well.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::auth_context::use_auth;
use crate::net::types::LoginIdentifier;
use crate::util::auth::{login_page_action, login_page_navigates};

const MISSING_FIELDS: &str = "Ingrese su email o DNI y su contraseña.";
const INVALID_EMAIL: &str = "Ingrese un email válido.";
const INVALID_DNI: &str = "Ingrese un DNI válido (7 u 8 dígitos).";

/// Trim and check the login form. Returns `(identifier, password)` with the
/// identifier exactly as it will be sent.
pub(crate) fn validate_login_input(identifier: &str, password: &str) -> Result<(String, String), &'static str> {
    if identifier.trim().is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    let identifier = match LoginIdentifier::parse(identifier) {
        LoginIdentifier::Email(email) if looks_like_email(&email) => email,
        LoginIdentifier::Email(_) => return Err(INVALID_EMAIL),
        LoginIdentifier::Dni(dni) if looks_like_dni(&dni) => dni,
        LoginIdentifier::Dni(_) => return Err(INVALID_DNI),
    };
    Ok((identifier, password.to_owned()))
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
}

fn looks_like_dni(digits: &str) -> bool {
    (7..=8).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Runs until it has navigated once; the one-shot claim below flips the
    // phase to `Authenticated`, which must not trigger a second navigation.
    let action = Memo::new(move |_| auth.state().with(login_page_action));
    Effect::new(move |navigated: Option<bool>| {
        if navigated == Some(true) {
            return true;
        }
        let action = action.get();
        let go = login_page_navigates(action, || auth.take_login_redirect());
        if let (true, Some(target)) = (go, action.target()) {
            navigate(target.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        go
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (id_value, secret) = match validate_login_input(&identifier.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Ingresando...".to_owned());

        leptos::task::spawn_local(async move {
            match auth.login(id_value, secret).await {
                Ok(()) => info.set(String::new()),
                Err(e) => {
                    password.set(String::new());
                    info.set(e.message);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Conserje"</h1>
                <p class="login-card__subtitle">"Administración del edificio"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Email o DNI"
                        prop:value=move || identifier.get()
                        on:input=move |ev| identifier.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Ingresar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
