//! Durable credential storage.
//!
//! Persists the bearer token and the cached user record across page loads
//! under four `localStorage` keys. The token is stored in cleartext; that
//! is a constraint of the browser storage model, and the backend remains
//! the sole authority for access control.
//!
//! Storage access goes through the [`StorageBackend`] trait so tests (and
//! non-browser builds) construct isolated stores over [`MemoryBackend`]
//! instead of sharing process-global state.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::types::User;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const USER_ID_KEY: &str = "user_id";
pub const ROLE_KEY: &str = "role";

/// Minimal key/value persistence seam.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.localStorage` backend. Absent storage (blocked cookies,
/// detached window) degrades to misses rather than errors.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default)]
pub struct LocalStorageBackend;

#[cfg(feature = "hydrate")]
impl LocalStorageBackend {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Raw stored state: whatever subset of the four keys is present.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredCredentials {
    pub token: Option<String>,
    pub user: Option<String>,
    pub user_id: Option<String>,
    pub role: Option<String>,
}

/// The credential store: token, serialized user, user id, and role.
///
/// Writes are last-write-wins with no partial-write recovery; `load`
/// tolerates any key being absent; `clear` removes all four keys and
/// never fails when they are already gone.
#[derive(Debug, Default)]
pub struct CredentialStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> CredentialStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist a full session: token plus the cached user record.
    pub fn save(&self, token: &str, user: &User) {
        self.backend.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &json);
        }
        self.backend.set(USER_ID_KEY, &user.id.to_string());
        self.backend.set(ROLE_KEY, user.role.as_str());
    }

    pub fn load(&self) -> StoredCredentials {
        StoredCredentials {
            token: self.backend.get(TOKEN_KEY),
            user: self.backend.get(USER_KEY),
            user_id: self.backend.get(USER_ID_KEY),
            role: self.backend.get(ROLE_KEY),
        }
    }

    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
        self.backend.remove(USER_ID_KEY);
        self.backend.remove(ROLE_KEY);
    }
}

/// The browser-persistent store used by the running app.
#[cfg(feature = "hydrate")]
pub fn browser() -> CredentialStore<LocalStorageBackend> {
    CredentialStore::new(LocalStorageBackend)
}
