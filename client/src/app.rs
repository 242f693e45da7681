//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth_context::provide_auth_context;
use crate::components::app_shell::AppShell;
use crate::components::guards::{LandingRedirect, PermissionGate, SessionGate};
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, section::SectionPage, unauthorized::UnauthorizedPage,
};
use crate::state::sections::Section;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Protected route body for a console section: session gate, then the
/// section's permission.
fn section_route(section: Section) -> impl IntoView {
    view! {
        <SessionGate>
            <PermissionGate permission=Some(section.required_permission())>
                <SectionPage section/>
            </PermissionGate>
        </SessionGate>
    }
}

/// Root application component.
///
/// Provides the auth and UI contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_context();
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/conserje.css"/>
        <Title text="Conserje"/>

        <Router>
            <AppShell>
                <Routes fallback=|| view! { <LandingRedirect/> }>
                    <Route path=StaticSegment("") view=LandingRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <SessionGate>
                                    <PermissionGate permission=None>
                                        <DashboardPage/>
                                    </PermissionGate>
                                </SessionGate>
                            }
                        }
                    />
                    <Route path=StaticSegment("usuarios") view=|| section_route(Section::Usuarios)/>
                    <Route path=StaticSegment("movimientos") view=|| section_route(Section::Movimientos)/>
                    <Route path=StaticSegment("paquetes") view=|| section_route(Section::Paquetes)/>
                    <Route path=StaticSegment("reservas") view=|| section_route(Section::Reservas)/>
                    <Route path=StaticSegment("visitas") view=|| section_route(Section::Visitas)/>
                    <Route
                        path=StaticSegment("visitas-programadas")
                        view=|| section_route(Section::VisitasProgramadas)
                    />
                    <Route path=StaticSegment("menus") view=|| section_route(Section::Menus)/>
                </Routes>
            </AppShell>
        </Router>
    }
}
