//! Role-dispatched dashboard shell.
//!
//! Mounts exactly one of the three dashboard variants for the resolved
//! role. Reached through a `RouteGuard` without an allow-list, so an
//! absent user has already been redirected; rendering nothing here only
//! covers the instant before that redirect lands.

use leptos::prelude::*;

use crate::pages::doctor::DoctorDashboard;
use crate::pages::patient::PatientDashboard;
use crate::pages::super_admin::SuperAdminDashboard;
use crate::state::role::Role;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        {move || match session.get().role() {
            None => ().into_any(),
            Some(Role::SuperAdmin) => view! { <SuperAdminDashboard/> }.into_any(),
            Some(Role::Doctor) => view! { <DoctorDashboard/> }.into_any(),
            Some(Role::Patient) => view! { <PatientDashboard/> }.into_any(),
        }}
    }
}
