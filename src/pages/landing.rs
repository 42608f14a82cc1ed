//! Public landing page with the login and signup entry points.

use leptos::prelude::*;

use crate::components::login_dialog::LoginDialog;
use crate::components::navbar::Navbar;
use crate::components::signup_dialog::SignupDialog;

#[component]
pub fn LandingPage() -> impl IntoView {
    let show_login = RwSignal::new(false);
    let show_signup = RwSignal::new(false);

    let open_login = Callback::new(move |()| show_login.set(true));
    let open_signup = Callback::new(move |()| show_signup.set(true));
    let close_login = Callback::new(move |()| show_login.set(false));
    let close_signup = Callback::new(move |()| show_signup.set(false));

    view! {
        <div class="landing-page">
            <Navbar on_login=open_login on_signup=open_signup/>

            <section class="landing-page__hero">
                <h1>"Care that starts with listening"</h1>
                <p>
                    "Serenity Psychiatric Center connects patients, doctors, and "
                    "administrators in one place. Book appointments, manage "
                    "treatment plans, and keep your care team in sync."
                </p>
                <button class="btn btn--primary" on:click=move |_| show_signup.set(true)>
                    "Get Started"
                </button>
            </section>

            <Show when=move || show_login.get()>
                <LoginDialog on_close=close_login/>
            </Show>
            <Show when=move || show_signup.get()>
                <SignupDialog on_close=close_signup/>
            </Show>
        </div>
    }
}
