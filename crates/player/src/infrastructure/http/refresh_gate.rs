//! Single-flight gate for credential refreshes.
//!
//! Every caller reads the current generation before sending its request.
//! When several requests hit 401 together, the first to take the gate runs
//! the refresh and bumps the generation; the others find the generation
//! moved past what they saw and go straight to their replay.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use futures_util::lock::Mutex;

#[derive(Default)]
pub(crate) struct RefreshGate {
    lock: Mutex<()>,
    generation: AtomicU64,
}

impl RefreshGate {
    pub(crate) fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Run `refresh` unless a refresh already succeeded after `observed`.
    ///
    /// A failed refresh leaves the generation untouched, so the next caller
    /// tries again.
    pub(crate) async fn run<F, Fut, E>(&self, observed: u64, refresh: F) -> Result<(), E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), E>>,
    {
        let _guard = self.lock.lock().await;
        if self.generation() != observed {
            return Ok(());
        }
        refresh().await?;
        self.generation.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
