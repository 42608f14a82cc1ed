//! Super Admin dashboard frame.
//!
//! The management tabs call the backend's CRUD endpoints directly; their
//! bodies are static placeholders here.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn SuperAdminDashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <Navbar/>
            <header class="dashboard__header">
                <h1>"Super Admin Dashboard"</h1>
            </header>
            <div class="dashboard__grid">
                <section class="dashboard__card">
                    <h2>"Doctors"</h2>
                    <p>"Add, edit, and deactivate doctor accounts."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Patients"</h2>
                    <p>"Review registered patients and their records."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Appointments"</h2>
                    <p>"Oversee scheduling across the clinic."</p>
                </section>
            </div>
        </div>
    }
}
