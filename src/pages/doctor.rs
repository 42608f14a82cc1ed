//! Doctor dashboard frame.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn DoctorDashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <Navbar/>
            <header class="dashboard__header">
                <h1>"Doctor Dashboard"</h1>
            </header>
            <div class="dashboard__grid">
                <section class="dashboard__card">
                    <h2>"My Patients"</h2>
                    <p>"Patients assigned to you and their histories."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Appointments"</h2>
                    <p>"Your upcoming and past appointments."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"Treatments"</h2>
                    <p>"Medications and treatment plans you manage."</p>
                </section>
            </div>
        </div>
    }
}
