//! Persisted browser session and the repository that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads in `localStorage`. Every read and write goes
//! through [`SessionRepository`] so corrupt-session recovery and the 401 clear
//! path live in one place; pages never touch the storage keys directly.
//!
//! TRADE-OFFS
//! ==========
//! The token is written last and removed first. Browser storage has no
//! transactions, so ordering is what keeps a reader from ever seeing a token
//! without its role and user name.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
use std::collections::HashMap;
use std::fmt;
#[cfg(test)]
use std::sync::{Arc, Mutex, PoisonError};

use super::permissions::PermissionEntry;

/// Storage keys used by the console.
pub mod keys {
    pub const TOKEN: &str = "token";
    pub const ROLE: &str = "role";
    pub const USER_NAME: &str = "userName";
    pub const PERMISSIONS: &str = "permisos";
    pub const PERSONA_ID: &str = "personaId";
    pub const PHOTO: &str = "foto";

    /// Every key cleared on logout, token first.
    pub const ALL: [&str; 6] = [TOKEN, ROLE, USER_NAME, PERMISSIONS, PERSONA_ID, PHOTO];
}

/// String key/value store that survives page reloads.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`. Outside the browser every call is a no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
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

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                if storage.set_item(key, value).is_err() {
                    leptos::logging::warn!("localStorage write failed: key={key}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
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

/// In-process store for tests. Clones share the same map.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Who is logged in.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: String,
    pub user_name: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .field("user_name", &self.user_name)
            .finish()
    }
}

/// A session plus the permission tree granted with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionRecord {
    pub session: Session,
    pub menu: Vec<PermissionEntry>,
}

/// Result of reading the persisted session at bootstrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    /// No token stored.
    Missing,
    /// Token stored without role or user name.
    Corrupt,
    Valid(SessionRecord),
}

/// Optional convenience fields returned by login and cached for pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CachedField {
    PersonaId,
    Photo,
}

impl CachedField {
    fn key(self) -> &'static str {
        match self {
            Self::PersonaId => keys::PERSONA_ID,
            Self::Photo => keys::PHOTO,
        }
    }
}

/// Single owner of the persisted session keys.
#[derive(Clone, Debug)]
pub struct SessionRepository<S> {
    store: S,
}

impl<S: SessionStore> SessionRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the stored session. Never fails; anomalies degrade to
    /// [`StoredSession::Missing`] or [`StoredSession::Corrupt`].
    pub fn load(&self) -> StoredSession {
        let Some(token) = self.non_empty(keys::TOKEN) else {
            return StoredSession::Missing;
        };
        let (Some(role), Some(user_name)) = (self.non_empty(keys::ROLE), self.non_empty(keys::USER_NAME)) else {
            return StoredSession::Corrupt;
        };
        StoredSession::Valid(SessionRecord {
            session: Session { token, role, user_name },
            menu: self.load_menu(),
        })
    }

    /// Persist a freshly issued session. The token goes in last.
    pub fn save(&self, record: &SessionRecord) {
        self.store.set(keys::ROLE, &record.session.role);
        self.store.set(keys::USER_NAME, &record.session.user_name);
        match serde_json::to_string(&record.menu) {
            Ok(raw) => self.store.set(keys::PERMISSIONS, &raw),
            Err(e) => {
                leptos::logging::warn!("permission tree not persisted: {e}");
                self.store.remove(keys::PERMISSIONS);
            }
        }
        self.store.set(keys::TOKEN, &record.session.token);
    }

    /// Remove every session key, token first.
    pub fn clear(&self) {
        for key in keys::ALL {
            self.store.remove(key);
        }
    }

    /// Storage-only check used by the coarse route gate.
    pub fn has_token(&self) -> bool {
        self.non_empty(keys::TOKEN).is_some()
    }

    pub fn cached(&self, field: CachedField) -> Option<String> {
        self.non_empty(field.key())
    }

    pub fn cache(&self, field: CachedField, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() => self.store.set(field.key(), v),
            _ => self.store.remove(field.key()),
        }
    }

    fn non_empty(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|v| !v.is_empty())
    }

    fn load_menu(&self) -> Vec<PermissionEntry> {
        let Some(raw) = self.store.get(keys::PERMISSIONS) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            leptos::logging::warn!("stored permission tree unreadable, ignoring: {e}");
            Vec::new()
        })
    }
}
