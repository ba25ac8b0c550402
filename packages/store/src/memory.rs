use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::StorageBackend;

/// In-memory StorageBackend for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let backend = MemoryBackend::new();

        assert!(backend.get("token").is_none());

        backend.set("token", "T1");
        assert_eq!(backend.get("token").as_deref(), Some("T1"));

        backend.set("token", "T2");
        assert_eq!(backend.get("token").as_deref(), Some("T2"));
    }

    #[test]
    fn test_remove() {
        let backend = MemoryBackend::new();

        backend.set("user", r#"{"id":"u1"}"#);
        backend.remove("user");
        assert!(backend.get("user").is_none());

        // Removing an absent key is a no-op.
        backend.remove("user");
    }

    #[test]
    fn test_clones_share_state() {
        let backend = MemoryBackend::new();
        let other = backend.clone();

        backend.set("token", "T1");
        assert_eq!(other.get("token").as_deref(), Some("T1"));
    }
}
