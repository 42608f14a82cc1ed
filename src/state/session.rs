//! Auth session context.
//!
//! `SessionState` is provided to the tree as `RwSignal<SessionState>` by
//! `app`; the async operations here are the only writers of that signal
//! and of the credential store. None of them navigate; routing is the
//! caller's responsibility.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AuthError, SignupForm, User};
use crate::state::role::Role;

/// The in-memory session: current user, bearer token, and whether an auth
/// operation is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl SessionState {
    /// Install a freshly obtained token and user record.
    pub fn apply_login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop token and user together.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}

/// Result of a login attempt that the backend accepted.
///
/// `verified` is false for an account still pending email verification;
/// that is a successful outcome the caller must branch on, not an error.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginOutcome {
    pub verified: bool,
    pub user: User,
}

/// Holds `loading` for the lifetime of one auth operation, releasing it
/// on every exit path including early `?` returns.
struct LoadingGuard(RwSignal<SessionState>);

impl LoadingGuard {
    fn acquire(session: RwSignal<SessionState>) -> Self {
        session.update(|s| s.loading = true);
        Self(session)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let _ = self.0.try_update(|s| s.loading = false);
    }
}

/// Log in against the backend.
///
/// On success the token and user are persisted to the credential store
/// before this future resolves, so caller-triggered navigation reads a
/// consistent session. Unverified accounts resolve with
/// `verified = false`.
///
/// # Errors
///
/// [`AuthError`] with the backend's message (or a generic fallback) when
/// the request fails or is rejected; nothing is persisted in that case.
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AuthError> {
    let _loading = LoadingGuard::acquire(session);
    let resp = api::login(email, password).await?;

    #[cfg(feature = "hydrate")]
    crate::util::credentials::browser().save(&resp.token, &resp.user);

    let outcome = LoginOutcome {
        verified: resp.user.is_active,
        user: resp.user.clone(),
    };
    session.update(|s| s.apply_login(resp.token, resp.user));
    Ok(outcome)
}

/// Register a new account. Persists no session; the account stays
/// unverified until the emailed code is submitted.
///
/// # Errors
///
/// [`AuthError`] with the backend's message when registration fails.
pub async fn signup(
    session: RwSignal<SessionState>,
    form: &SignupForm,
    user_type: &str,
) -> Result<(), AuthError> {
    let _loading = LoadingGuard::acquire(session);
    api::signup(form, user_type).await
}

/// Submit the emailed verification code to activate an account.
///
/// # Errors
///
/// [`AuthError`] with the backend's message when the code is rejected.
pub async fn verify_email(
    session: RwSignal<SessionState>,
    email: &str,
    code: &str,
    user_type: &str,
) -> Result<(), AuthError> {
    let _loading = LoadingGuard::acquire(session);
    api::verify_email(email, code, user_type).await
}

/// Clear the in-memory session and the credential store. The token is
/// stateless, so no backend call is made.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::clear);

    #[cfg(feature = "hydrate")]
    crate::util::credentials::browser().clear();
}
