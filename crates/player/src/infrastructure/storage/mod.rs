//! Storage providers, selected per target at compile time.

#[cfg(not(target_arch = "wasm32"))]
pub mod desktop;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::DesktopStorageProvider;
pub use memory::MemoryStorageProvider;
#[cfg(target_arch = "wasm32")]
pub use wasm::WasmStorageProvider;

use std::sync::Arc;

use crate::ports::outbound::StorageProvider;

/// The persistent storage for the current target.
pub fn create_storage() -> Arc<dyn StorageProvider> {
    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(WasmStorageProvider::new())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(DesktopStorageProvider::new())
    }
}
