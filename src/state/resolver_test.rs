use super::*;
use crate::state::role::Role;
use crate::util::credentials::{MemoryBackend, StorageBackend, TOKEN_KEY, USER_KEY};

fn store() -> CredentialStore<MemoryBackend> {
    CredentialStore::new(MemoryBackend::default())
}

fn store_with(entries: &[(&str, &str)]) -> CredentialStore<MemoryBackend> {
    let backend = MemoryBackend::default();
    for (key, value) in entries {
        backend.set(key, value);
    }
    CredentialStore::new(backend)
}

fn patient() -> User {
    User {
        id: 5,
        full_name: "Pat Ngo".to_owned(),
        email: "pat@example.com".to_owned(),
        role: Role::Patient,
        is_active: true,
        profile_picture: None,
        phone: None,
    }
}

#[test]
fn empty_store_resolves_to_empty_session() {
    let session = resolve_session(&store());
    assert_eq!(session, SessionState::default());
}

#[test]
fn saved_session_resolves_from_cache_alone() {
    let store = store();
    store.save("tok-xyz", &patient());

    let session = resolve_session(&store);
    assert_eq!(session.token.as_deref(), Some("tok-xyz"));
    assert_eq!(session.user, Some(patient()));
    assert!(!session.loading);
}

#[test]
fn corrupted_cached_user_clears_everything() {
    let store = store_with(&[(TOKEN_KEY, "tok-xyz"), (USER_KEY, "{not json")]);

    let session = resolve_session(&store);
    assert_eq!(session, SessionState::default());

    let creds = store.load();
    assert!(creds.token.is_none());
    assert!(creds.user.is_none());
    assert!(creds.user_id.is_none());
    assert!(creds.role.is_none());
}

#[test]
fn cached_user_missing_required_field_clears_everything() {
    let store = store_with(&[
        (TOKEN_KEY, "tok-xyz"),
        (USER_KEY, r#"{"id":5,"full_name":"Pat"}"#),
    ]);

    let session = resolve_session(&store);
    assert_eq!(session, SessionState::default());
    assert!(store.load().token.is_none());
}

#[test]
fn unknown_role_in_cache_clears_everything() {
    let store = store_with(&[
        (TOKEN_KEY, "tok-xyz"),
        (
            USER_KEY,
            r#"{"id":5,"full_name":"Pat","email":"pat@example.com","role":"Visitor","is_active":true}"#,
        ),
    ]);

    let session = resolve_session(&store);
    assert!(session.user.is_none());
    assert!(session.token.is_none());
    assert!(store.load().token.is_none());
}

#[test]
fn token_without_cached_user_clears_everything() {
    let store = store_with(&[(TOKEN_KEY, "tok-orphan")]);

    let session = resolve_session(&store);
    assert_eq!(session, SessionState::default());
    assert!(store.load().token.is_none());
}
