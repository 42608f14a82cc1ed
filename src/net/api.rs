//! REST helpers for the backend auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): inert stubs, since authentication only happens in
//! the browser.
//!
//! The payload builders are plain functions compiled everywhere so the
//! alias-normalization rules stay unit-testable without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::{AuthError, LoginResponse, Profile, SignupForm};
use crate::state::role::Role;

/// Signup endpoint path. The URL keeps the caller's raw user type; only
/// the payload's `userType` field is normalized.
pub fn signup_path(user_type: &str) -> String {
    format!("/api/auth/signup/{user_type}")
}

/// Canonical role label for an outgoing `userType` field. Unknown aliases
/// pass through untouched for the backend to reject.
pub fn normalized_user_type(user_type: &str) -> String {
    Role::from_signup_alias(user_type)
        .map_or_else(|| user_type.to_owned(), |role| role.as_str().to_owned())
}

/// Registration payload with the `userType` alias normalized
/// (`admin` becomes `SuperAdmin`).
pub fn signup_payload(form: &SignupForm, user_type: &str) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "full_name": form.full_name,
        "email": form.email,
        "password": form.password,
        "phone": form.phone,
        "userType": normalized_user_type(user_type),
    });
    if let Some(specialization) = &form.specialization {
        payload["specialization"] = serde_json::Value::String(specialization.clone());
    }
    payload
}

/// Email-verification payload, normalized the same way as signup.
pub fn verify_payload(email: &str, code: &str, user_type: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "code": code,
        "userType": normalized_user_type(user_type),
    })
}

/// POST `/api/auth/login`.
///
/// # Errors
///
/// [`AuthError::Rejected`] with the backend's message on a non-2xx
/// response, [`AuthError::Transport`] when the request or body fails.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = post_json(&crate::net::config::api_url("/api/auth/login"), &body).await?;
        if !resp.ok() {
            return Err(rejected(resp, "Login failed").await);
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(AuthError::Transport("not available outside the browser".to_owned()))
    }
}

/// POST `/api/auth/signup/{userType}`.
///
/// # Errors
///
/// Same taxonomy as [`login`].
pub async fn signup(form: &SignupForm, user_type: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url(&signup_path(user_type));
        let resp = post_json(&url, &signup_payload(form, user_type)).await?;
        if !resp.ok() {
            return Err(rejected(resp, "Signup failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, user_type);
        Err(AuthError::Transport("not available outside the browser".to_owned()))
    }
}

/// POST `/api/auth/verify-email`.
///
/// # Errors
///
/// Same taxonomy as [`login`].
pub async fn verify_email(email: &str, code: &str, user_type: &str) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url("/api/auth/verify-email");
        let resp = post_json(&url, &verify_payload(email, code, user_type)).await?;
        if !resp.ok() {
            return Err(rejected(resp, "Verification failed").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code, user_type);
        Err(AuthError::Transport("not available outside the browser".to_owned()))
    }
}

/// Fetch presentation fields from the role-scoped profile endpoint.
/// Best-effort: any failure returns `None` and the caller keeps the
/// unenriched session.
pub async fn fetch_profile(token: &str, role: Role, id: i64) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let url = crate::net::config::api_url(&role.profile_path(id));
        let resp = gloo_net::http::Request::get(&url)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, role, id);
        None
    }
}

#[cfg(feature = "hydrate")]
async fn post_json(
    url: &str,
    body: &serde_json::Value,
) -> Result<gloo_net::http::Response, AuthError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| AuthError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn rejected(resp: gloo_net::http::Response, fallback: &str) -> AuthError {
    let body = resp.text().await.unwrap_or_default();
    AuthError::Rejected(crate::net::types::error_message(&body, fallback))
}
