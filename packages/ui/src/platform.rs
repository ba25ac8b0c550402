//! Platform plumbing shared by every front-end target.
//!
//! Session storage lives in the browser's localStorage on web builds and
//! under the platform data directory on native builds:
//!
//! | Platform | Path |
//! |----------|------|
//! | Web | `window.localStorage` |
//! | macOS | `~/Library/Application Support/vetdesk/` |
//! | Linux | `~/.local/share/vetdesk/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\vetdesk\` |

use std::sync::Arc;

use store::StorageBackend;

/// Create the platform-appropriate storage backend for the session keys.
pub fn storage_backend() -> Arc<dyn StorageBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorageBackend::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("vetdesk");
        Arc::new(store::FileBackend::new(base))
    }
}

/// Async sleep that works on both wasm and native targets.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
