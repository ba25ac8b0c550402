//! # localStorage-backed storage (browser-side persistence)
//!
//! [`LocalStorageBackend`] is the [`StorageBackend`] used on the web
//! platform. The session token and user snapshot land in the browser's
//! `window.localStorage`, which is synchronous, string-valued, and survives
//! reloads, which is exactly the durability the session layer needs.
//!
//! The struct is zero-size and resolves `window.localStorage` on every
//! operation. All errors (storage disabled, quota, detached window) are
//! swallowed: reads degrade to `None` and writes become no-ops, which the
//! auth layer treats as a missing session rather than a crash.

use crate::backend::StorageBackend;

/// localStorage-backed StorageBackend for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

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
