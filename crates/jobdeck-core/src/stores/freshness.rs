//! Shared freshness policy for listing stores.
//!
//! Every listing store used to need its own "skip the fetch if data is
//! already loaded" guard; [`Loaded`] centralizes that check so the policy is
//! written once and parameterized by entity type.

use std::future::Future;

use tokio::sync::RwLock;

/// Defines how a store read interacts with its loaded slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchMode {
    /// Return the loaded value if present; otherwise fetch and load it.
    #[default]
    Use,
    /// Always fetch, replacing the loaded value.
    Refresh,
    /// Always fetch and leave the loaded value untouched.
    Bypass,
}

/// A lazily-populated slot guarding one fetched collection.
#[derive(Debug)]
pub struct Loaded<T> {
    slot: RwLock<Option<T>>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }
}

impl<T> Loaded<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the loaded value; the next `Use` read fetches again.
    pub async fn invalidate(&self) {
        *self.slot.write().await = None;
    }
}

impl<T: Clone> Loaded<T> {
    /// Resolve a read through the slot according to `mode`.
    pub async fn get_or_fetch<F, Fut, E>(&self, mode: FetchMode, fetch: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if mode == FetchMode::Use {
            if let Some(value) = self.slot.read().await.clone() {
                return Ok(value);
            }
        }

        let value = fetch().await?;
        if mode != FetchMode::Bypass {
            *self.slot.write().await = Some(value.clone());
        }
        Ok(value)
    }

    /// Current loaded value, without fetching.
    pub async fn peek(&self) -> Option<T> {
        self.slot.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    async fn counted_fetch(counter: &AtomicUsize, value: u32) -> Result<u32, ()> {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(value)
    }

    #[tokio::test]
    async fn use_mode_fetches_once() {
        let slot = Loaded::new();
        let calls = AtomicUsize::new(0);

        let first: Result<u32, ()> = slot
            .get_or_fetch(FetchMode::Use, || counted_fetch(&calls, 1))
            .await;
        let second: Result<u32, ()> = slot
            .get_or_fetch(FetchMode::Use, || counted_fetch(&calls, 2))
            .await;

        assert_eq!(first, Ok(1));
        assert_eq!(second, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn refresh_mode_replaces_loaded_value() {
        let slot = Loaded::new();
        let calls = AtomicUsize::new(0);

        let _: Result<u32, ()> = slot
            .get_or_fetch(FetchMode::Use, || counted_fetch(&calls, 1))
            .await;
        let refreshed: Result<u32, ()> = slot
            .get_or_fetch(FetchMode::Refresh, || counted_fetch(&calls, 2))
            .await;

        assert_eq!(refreshed, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(slot.peek().await, Some(2));
    }

    #[tokio::test]
    async fn bypass_mode_leaves_slot_untouched() {
        let slot = Loaded::new();
        let calls = AtomicUsize::new(0);

        let value: Result<u32, ()> = slot
            .get_or_fetch(FetchMode::Bypass, || counted_fetch(&calls, 9))
            .await;

        assert_eq!(value, Ok(9));
        assert_eq!(slot.peek().await, None);
    }

    #[tokio::test]
    async fn failed_fetch_does_not_populate_slot() {
        let slot: Loaded<u32> = Loaded::new();

        let result: Result<u32, &str> = slot
            .get_or_fetch(FetchMode::Use, || async { Err("boom") })
            .await;

        assert_eq!(result, Err("boom"));
        assert_eq!(slot.peek().await, None);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let slot = Loaded::new();
        let calls = AtomicUsize::new(0);

        let _: Result<u32, ()> = slot
            .get_or_fetch(FetchMode::Use, || counted_fetch(&calls, 1))
            .await;
        slot.invalidate().await;
        let second: Result<u32, ()> = slot
            .get_or_fetch(FetchMode::Use, || counted_fetch(&calls, 2))
            .await;

        assert_eq!(second, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
