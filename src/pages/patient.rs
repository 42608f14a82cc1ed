//! Patient dashboard frame.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn PatientDashboard() -> impl IntoView {
    view! {
        <div class="dashboard">
            <Navbar/>
            <header class="dashboard__header">
                <h1>"Patient Dashboard"</h1>
            </header>
            <div class="dashboard__grid">
                <section class="dashboard__card">
                    <h2>"My Appointments"</h2>
                    <p>"Book and review appointments with your doctor."</p>
                </section>
                <section class="dashboard__card">
                    <h2>"My Medications"</h2>
                    <p>"Current prescriptions and dosage schedules."</p>
                </section>
            </div>
        </div>
    }
}
