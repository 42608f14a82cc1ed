//! Login dialog.
//!
//! Submits through the session context and branches on the outcome:
//! verified logins navigate to the role's dashboard, unverified ones get
//! an inline prompt to finish email verification, failures show the
//! backend's message. Submission is disabled while an auth operation is
//! in flight.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn LoginDialog(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let loading = move || session.get().loading;

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = Callback::new(move |()| {
        if email.get().trim().is_empty() || password.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let email_value = email.get();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, &email_value, &password_value).await {
                    Ok(outcome) if outcome.verified => {
                        error.set(None);
                        on_close.run(());
                        navigate(
                            outcome.user.role.dashboard_route(),
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Ok(_) => {
                        error.set(Some(
                            "Your account is not verified yet. Enter the code we emailed you."
                                .to_owned(),
                        ));
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                    }
                }
            });
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Login"</h2>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                {move || {
                    error
                        .get()
                        .map(|msg| view! { <p class="dialog__error">{msg}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=loading
                        on:click=move |_| submit.run(())
                    >
                        {move || if loading() { "Logging in..." } else { "Login" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
