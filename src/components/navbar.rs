//! Top navigation bar: identity display plus login/signup entry points on
//! the public page and logout everywhere else.

use leptos::prelude::*;

use crate::state::session::{self, SessionState};

#[component]
pub fn Navbar(
    #[prop(optional, into)] on_login: Option<Callback<()>>,
    #[prop(optional, into)] on_signup: Option<Callback<()>>,
) -> impl IntoView {
    let session_signal = expect_context::<RwSignal<SessionState>>();

    let user_name = move || {
        session_signal
            .get()
            .user
            .map_or_else(String::new, |u| u.full_name)
    };
    let logged_in = move || session_signal.get().user.is_some();

    let on_logout = move |_| {
        session::logout(session_signal);
        // Leave via window.location for a clean state on the public page.
        #[cfg(feature = "hydrate")]
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href("/");
        }
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                "Serenity Psychiatric Center"
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=logged_in
                fallback=move || {
                    view! {
                        {on_login
                            .map(|cb| {
                                view! {
                                    <button class="btn" on:click=move |_| cb.run(())>
                                        "Login"
                                    </button>
                                }
                            })}
                        {on_signup
                            .map(|cb| {
                                view! {
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| cb.run(())
                                    >
                                        "Sign Up"
                                    </button>
                                }
                            })}
                    }
                }
            >
                <span class="navbar__user">{user_name}</span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
