//! Email verification dialog: submits the emailed code for the account
//! created during signup.

use leptos::prelude::*;

use crate::state::session::SessionState;

#[component]
pub fn EmailVerificationDialog(
    email: String,
    user_type: String,
    on_complete: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let loading = move || session.get().loading;

    let email_display = email.clone();
    let email = StoredValue::new(email);
    let user_type = StoredValue::new(user_type);

    let submit = Callback::new(move |()| {
        if code.get().trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let email_value = email.get_value();
            let user_type_value = user_type.get_value();
            let code_value = code.get();
            leptos::task::spawn_local(async move {
                match crate::state::session::verify_email(
                    session,
                    &email_value,
                    &code_value,
                    &user_type_value,
                )
                .await
                {
                    Ok(()) => {
                        error.set(None);
                        on_complete.run(());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, user_type, on_complete);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Verify Your Email"</h2>
                <p class="dialog__hint">
                    "We sent a verification code to " <strong>{email_display}</strong>
                    ". Enter it below to activate your account."
                </p>
                <label class="dialog__label">
                    "Verification Code"
                    <input
                        class="dialog__input"
                        type="text"
                        maxlength="6"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
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
                        {move || if loading() { "Verifying..." } else { "Verify Email" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
