//! Request epochs for discarding stale responses.
//!
//! A screen holds one `RequestEpoch`. Each load calls [`RequestEpoch::begin`]
//! and keeps the returned token; when the response arrives it is applied only
//! if [`RequestEpoch::is_current`] still holds. Starting a newer load makes
//! older tokens stale. [`RequestEpoch::invalidate`] (on unmount) closes the
//! epoch for good: no token, earlier or later, is current after it.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpochToken(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestEpoch {
    current: Arc<AtomicU64>,
    closed: Arc<AtomicBool>,
}

impl RequestEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, making every earlier token stale
    pub fn begin(&self) -> EpochToken {
        EpochToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Close the epoch; tokens from before or after this are never current
    pub fn invalidate(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, token: EpochToken) -> bool {
        !self.is_closed() && self.current.load(Ordering::SeqCst) == token.0
    }
}

impl PartialEq for RequestEpoch {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_token_is_current() {
        let epoch = RequestEpoch::new();
        let token = epoch.begin();
        assert!(epoch.is_current(token));
    }

    #[test]
    fn test_newer_load_makes_older_stale() {
        let epoch = RequestEpoch::new();
        let first = epoch.begin();
        let second = epoch.begin();
        assert!(!epoch.is_current(first));
        assert!(epoch.is_current(second));
    }

    #[test]
    fn test_invalidate_on_unmount() {
        let epoch = RequestEpoch::new();
        let token = epoch.begin();
        epoch.invalidate();
        assert!(!epoch.is_current(token));
    }

    #[test]
    fn test_no_token_is_current_after_invalidate() {
        let epoch = RequestEpoch::new();
        epoch.begin();
        epoch.invalidate();
        assert!(epoch.is_closed());

        let late = epoch.begin();
        assert!(!epoch.is_current(late), "a load started after unmount must not apply");
    }

    #[test]
    fn test_separate_epochs_do_not_interfere() {
        let load = RequestEpoch::new();
        let submit = RequestEpoch::new();

        let load_token = load.begin();
        let submit_token = submit.begin();
        assert!(load.is_current(load_token));
        assert!(submit.is_current(submit_token));

        submit.begin();
        assert!(load.is_current(load_token));
    }

    #[test]
    fn test_clones_share_the_epoch() {
        let epoch = RequestEpoch::new();
        let handle = epoch.clone();
        let token = epoch.begin();
        assert!(handle.is_current(token));
        handle.invalidate();
        assert!(!epoch.is_current(token));
        assert_eq!(epoch, handle);
        assert_ne!(epoch, RequestEpoch::new());
    }
}
