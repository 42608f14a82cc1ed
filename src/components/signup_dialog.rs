//! Signup dialog.
//!
//! Collects registration data for one of the three user types and opens
//! the email-verification step on success. A successful signup never
//! persists a session; the account stays unverified until the emailed
//! code is accepted.

use leptos::prelude::*;

use crate::components::verify_dialog::EmailVerificationDialog;
#[cfg(feature = "hydrate")]
use crate::net::types::SignupForm;
use crate::state::session::SessionState;

#[component]
pub fn SignupDialog(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let specialization = RwSignal::new(String::new());
    let user_type = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let verifying = RwSignal::new(false);

    let loading = move || session.get().loading;
    let is_doctor = move || user_type.get() == "doctor";

    let submit = Callback::new(move |()| {
        if user_type.get().is_empty() {
            error.set(Some("Please select a user type".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let form = SignupForm {
                full_name: full_name.get(),
                email: email.get(),
                password: password.get(),
                phone: phone.get(),
                specialization: if is_doctor() && !specialization.get().trim().is_empty() {
                    Some(specialization.get())
                } else {
                    None
                },
            };
            let user_type_value = user_type.get();
            leptos::task::spawn_local(async move {
                match crate::state::session::signup(session, &form, &user_type_value).await {
                    Ok(()) => {
                        error.set(None);
                        verifying.set(true);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    });

    let on_verified = Callback::new(move |()| {
        verifying.set(false);
        on_close.run(());
    });
    let on_verify_close = Callback::new(move |()| verifying.set(false));

    view! {
        <Show
            when=move || verifying.get()
            fallback=move || {
                view! {
                    <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Sign Up"</h2>
                            <label class="dialog__label">
                                "User Type"
                                <select
                                    class="dialog__input"
                                    prop:value=move || user_type.get()
                                    on:change=move |ev| user_type.set(event_target_value(&ev))
                                >
                                    <option value="">"Select user type"</option>
                                    <option value="admin">"Super Admin"</option>
                                    <option value="doctor">"Doctor"</option>
                                    <option value="patient">"Patient"</option>
                                </select>
                            </label>
                            <label class="dialog__label">
                                "Full Name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    prop:value=move || full_name.get()
                                    on:input=move |ev| full_name.set(event_target_value(&ev))
                                />
                            </label>
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
                                />
                            </label>
                            <label class="dialog__label">
                                "Phone"
                                <input
                                    class="dialog__input"
                                    type="tel"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                            <Show when=is_doctor>
                                <label class="dialog__label">
                                    "Specialization"
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || specialization.get()
                                        on:input=move |ev| {
                                            specialization.set(event_target_value(&ev))
                                        }
                                    />
                                </label>
                            </Show>
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
                                    {move || if loading() { "Signing up..." } else { "Sign Up" }}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }
        >
            <EmailVerificationDialog
                email=email.get_untracked()
                user_type=user_type.get_untracked()
                on_complete=on_verified
                on_close=on_verify_close
            />
        </Show>
    }
}
