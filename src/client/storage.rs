//! Persisted client credentials.
//!
//! The only durable client state is the auth token and a serialized copy of the signed-in user.
//! Both live under fixed keys in a key-value store (browser local storage on web) and are always
//! written and cleared together.

use std::{collections::HashMap, rc::Rc, sync::Arc};

use dioxus_logger::tracing;
use parking_lot::RwLock;

use crate::model::user::UserDto;

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const USER_DATA_KEY: &str = "user_data";

/// Minimal string key-value storage, modelled on the browser's `Storage` interface.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Process-local store used by tests and by targets without browser storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

/// `window.localStorage`, storing raw strings so values stay readable by other tabs and tools.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(feature = "web")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        use gloo_storage::{LocalStorage, Storage};

        if LocalStorage::raw().set_item(key, value).is_err() {
            tracing::warn!("Failed to write {} to local storage", key);
        }
    }

    fn remove(&self, key: &str) {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::delete(key);
    }
}

/// Typed access to the persisted token and user.
#[derive(Clone)]
pub struct CredentialStore {
    backend: Rc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// Store backed by browser local storage.
    #[cfg(feature = "web")]
    pub fn platform() -> Self {
        Self::new(BrowserStore)
    }

    /// Store backed by process memory; credentials last until the app exits.
    #[cfg(not(feature = "web"))]
    pub fn platform() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn token(&self) -> Option<String> {
        self.backend
            .get(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    /// The stored user, or `None` when absent or unreadable.
    pub fn user(&self) -> Option<UserDto> {
        let raw = self.backend.get(USER_DATA_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored user: {}", e);
                None
            }
        }
    }

    /// The token and user, only when both are present.
    pub fn session(&self) -> Option<(String, UserDto)> {
        Some((self.token()?, self.user()?))
    }

    pub fn save(&self, token: &str, user: &UserDto) {
        self.backend.set(AUTH_TOKEN_KEY, token);
        self.save_user(user);
    }

    pub fn save_user(&self, user: &UserDto) {
        match serde_json::to_string(user) {
            Ok(raw) => self.backend.set(USER_DATA_KEY, &raw),
            Err(e) => tracing::error!("Failed to serialize user for storage: {}", e),
        }
    }

    pub fn clear(&self) {
        self.backend.remove(AUTH_TOKEN_KEY);
        self.backend.remove(USER_DATA_KEY);
    }
}
