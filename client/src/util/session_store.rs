//! Credential store: the persisted copy of the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth state container is the only writer. At startup it reads this store
//! once; login success writes it and logout clears it.
//!
//! ERROR HANDLING
//! ==============
//! A missing or unparsable blob loads as "no session". Corrupted storage must
//! never block the app from starting, so `load` logs and moves on.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::SESSION_STORAGE_KEY;
use crate::net::types::Session;

/// Failures writing the persisted session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("session serialization failed: {0}")]
    Serialize(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal string key-value backend (`localStorage` shaped).
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}

/// Browser `localStorage`. Inert outside the hydrated client.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Shared in-memory map. Clones see the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Reads and writes the serialized [`Session`] under [`SESSION_STORAGE_KEY`].
#[derive(Clone, Debug, Default)]
pub struct CredentialStore<K> {
    backend: K,
}

impl<K: KeyValueStore> CredentialStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    /// Serialize and write the session.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or the backend write fails.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set_item(SESSION_STORAGE_KEY, &raw)
    }

    /// The persisted session, or `None` if absent or unreadable.
    pub fn load(&self) -> Option<Session> {
        let raw = self.backend.get_item(SESSION_STORAGE_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("ignoring unreadable persisted session: {e}");
                None
            }
        }
    }

    pub fn clear(&self) {
        self.backend.remove_item(SESSION_STORAGE_KEY);
    }

    /// Raw persisted blob, exactly as stored.
    pub fn read_raw(&self) -> Option<String> {
        self.backend.get_item(SESSION_STORAGE_KEY)
    }
}
