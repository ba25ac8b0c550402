//! # Filesystem-backed storage
//!
//! [`FileBackend`] persists each key as a single file under a base
//! directory, so sessions survive app restarts on desktop. Use
//! `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/vetdesk/` |
//! | Linux | `~/.local/share/vetdesk/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\vetdesk\` |
//!
//! Keys map directly to file names; the session keys are plain identifiers
//! so no escaping is required. I/O failures degrade to "key absent".

use std::fs;
use std::path::PathBuf;

use crate::backend::StorageBackend;

/// Filesystem-backed StorageBackend for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileBackend {
    base: PathBuf,
}

impl FileBackend {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if fs::create_dir_all(&self.base).is_err() {
            return;
        }
        let _ = fs::write(self.entry_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.entry_path(key));
    }
}
