//! Startup session resolution.
//!
//! Rebuilds the in-memory session from the credential store without any
//! network call. The invariant is all-or-nothing: either the stored token
//! and cached user record both resolve, or every credential key is
//! cleared, so downstream code never sees a token without a resolvable
//! user. Profile enrichment happens separately and is best-effort (see
//! `app`).

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::net::types::User;
use crate::state::session::SessionState;
use crate::util::credentials::{CredentialStore, StorageBackend};

/// Resolve a session from whatever the store holds.
///
/// - No token: empty session, store untouched.
/// - Token plus parsable cached user: populated session.
/// - Token with a missing or corrupted cached record (bad JSON, missing
///   field, unknown role): the store is cleared and the session resolves
///   empty. Recovery is local; it is logged, never surfaced as an error.
pub fn resolve_session<B: StorageBackend>(store: &CredentialStore<B>) -> SessionState {
    let stored = store.load();

    let Some(token) = stored.token else {
        return SessionState::default();
    };

    let parsed = stored
        .user
        .as_deref()
        .and_then(|raw| serde_json::from_str::<User>(raw).ok());

    match parsed {
        Some(user) => SessionState {
            token: Some(token),
            user: Some(user),
            loading: false,
        },
        None => {
            leptos::logging::warn!("discarding unreadable stored session");
            store.clear();
            SessionState::default()
        }
    }
}
