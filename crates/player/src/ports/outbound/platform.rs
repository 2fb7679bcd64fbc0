//! Platform abstraction ports
//!
//! Storage differs per target (localStorage in the browser, a JSON file on
//! desktop); application code only sees [`StorageProvider`].

/// Persistent key-value storage abstraction (localStorage/file-based)
///
/// Writes are synchronous: once `save` returns the value survives a reload.
#[cfg_attr(test, mockall::automock)]
pub trait StorageProvider: Send + Sync {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;
}

/// Storage key constants
pub mod storage_keys {
    /// Persisted session record, JSON `{email, token}`.
    pub const SESSION: &str = "session-store";
}
