//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::pages::dashboard::DashboardPage;
use crate::pages::doctor::DoctorDashboard;
use crate::pages::landing::LandingPage;
use crate::pages::patient::PatientDashboard;
use crate::pages::super_admin::SuperAdminDashboard;
use crate::state::role::Role;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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

/// Rebuild the session from the credential store. Outside the browser
/// there is nothing to rebuild from.
fn initial_session() -> SessionState {
    #[cfg(feature = "hydrate")]
    {
        crate::state::resolver::resolve_session(&crate::util::credentials::browser())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionState::default()
    }
}

/// Root application component.
///
/// Provides the session context, kicks off best-effort profile
/// enrichment, and sets up client-side routing with role-gated guards.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(initial_session());
    provide_context(session);

    // Profile enrichment is fire-and-forget: failure logs and keeps the
    // already-resolved session.
    #[cfg(feature = "hydrate")]
    {
        let resolved = session.get_untracked();
        if let (Some(token), Some(user)) = (resolved.token, resolved.user) {
            leptos::task::spawn_local(async move {
                match crate::net::api::fetch_profile(&token, user.role, user.id).await {
                    Some(profile) => {
                        session.update(|s| {
                            if let Some(u) = &mut s.user {
                                u.merge_profile(profile);
                            }
                        });
                    }
                    None => {
                        leptos::logging::warn!("profile enrichment unavailable, keeping cached record");
                    }
                }
            });
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/clinic-client.css"/>
        <Title text="Serenity Psychiatric Center"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <DashboardPage/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("super-admin")
                    view=|| {
                        view! {
                            <RouteGuard allowed=vec![Role::SuperAdmin]>
                                <SuperAdminDashboard/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("doctor")
                    view=|| {
                        view! {
                            <RouteGuard allowed=vec![Role::Doctor]>
                                <DoctorDashboard/>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("patient")
                    view=|| {
                        view! {
                            <RouteGuard allowed=vec![Role::Patient]>
                                <PatientDashboard/>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
