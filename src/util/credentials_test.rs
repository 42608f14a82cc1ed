use super::*;
use crate::state::role::Role;

fn store() -> CredentialStore<MemoryBackend> {
    CredentialStore::new(MemoryBackend::default())
}

fn sample_user() -> User {
    User {
        id: 42,
        full_name: "Sam Ode".to_owned(),
        email: "sam@example.com".to_owned(),
        role: Role::SuperAdmin,
        is_active: true,
        profile_picture: None,
        phone: Some("555-0100".to_owned()),
    }
}

#[test]
fn load_on_empty_store_returns_nothing() {
    let creds = store().load();
    assert_eq!(creds, StoredCredentials::default());
}

#[test]
fn save_writes_all_four_keys() {
    let store = store();
    store.save("tok-abc", &sample_user());

    let creds = store.load();
    assert_eq!(creds.token.as_deref(), Some("tok-abc"));
    assert_eq!(creds.user_id.as_deref(), Some("42"));
    assert_eq!(creds.role.as_deref(), Some("SuperAdmin"));

    let cached: User = serde_json::from_str(creds.user.as_deref().unwrap()).unwrap();
    assert_eq!(cached, sample_user());
}

#[test]
fn save_is_last_write_wins() {
    let store = store();
    store.save("tok-1", &sample_user());
    let mut other = sample_user();
    other.id = 7;
    other.role = Role::Doctor;
    store.save("tok-2", &other);

    let creds = store.load();
    assert_eq!(creds.token.as_deref(), Some("tok-2"));
    assert_eq!(creds.user_id.as_deref(), Some("7"));
    assert_eq!(creds.role.as_deref(), Some("Doctor"));
}

#[test]
fn clear_removes_everything() {
    let store = store();
    store.save("tok-abc", &sample_user());
    store.clear();

    let creds = store.load();
    assert!(creds.token.is_none());
    assert!(creds.user.is_none());
    assert!(creds.user_id.is_none());
    assert!(creds.role.is_none());
}

#[test]
fn clear_on_empty_store_is_a_no_op() {
    let store = store();
    store.clear();
    store.clear();
    assert_eq!(store.load(), StoredCredentials::default());
}
