#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use crate::state::role::Role;

/// Authenticated user record as the backend returns it on login and as the
/// credential store caches it between page loads.
///
/// `role` deserializes through the closed [`Role`] enum, so a record with
/// an unknown role string fails to parse and is handled as corrupted.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Merge presentation fields from a role-scoped profile fetch.
    ///
    /// Identity and authorization fields (`id`, `email`, `role`,
    /// `is_active`) stay as the login response asserted them.
    pub fn merge_profile(&mut self, profile: Profile) {
        if let Some(full_name) = profile.full_name {
            self.full_name = full_name;
        }
        if profile.profile_picture.is_some() {
            self.profile_picture = profile.profile_picture;
        }
        if profile.phone.is_some() {
            self.phone = profile.phone;
        }
    }
}

/// Successful body of `POST /api/auth/login`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Presentation fields returned by the role-scoped profile endpoints.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Registration form data for `POST /api/auth/signup/{userType}`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    /// Doctors only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

/// Failure of an auth operation.
///
/// Both transport failures and non-2xx responses surface here with a
/// human-readable message; callers present the message and may re-submit.
/// An unverified account is not an error (see `LoginOutcome`).
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Backend rejected the request (non-2xx), message taken from the
    /// response body when present.
    #[error("{0}")]
    Rejected(String),
    /// Request never completed or the response body was unreadable.
    #[error("network error: {0}")]
    Transport(String),
}

/// Extract the backend's `message` field from an error body, falling back
/// to a generic description when the body is missing or not JSON.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| fallback.to_owned())
}
