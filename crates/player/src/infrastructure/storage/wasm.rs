//! Browser storage provider backed by `window.localStorage`

use web_sys::Storage;

use crate::ports::outbound::StorageProvider;

/// Falls back to doing nothing when localStorage is unavailable
/// (private browsing, sandboxed iframes).
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Some(storage),
            _ => {
                tracing::warn!("localStorage is not available");
                None
            }
        }
    }
}

// `web_sys::Storage` is not `Send`, so it is looked up per call, never stored.
impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::error!(error = ?e, key, "Failed to write localStorage");
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }
}
