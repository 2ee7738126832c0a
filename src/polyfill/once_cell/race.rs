//! Thread-safe, non-blocking, "first one wins" flavor of `OnceCell`.
//!
//! If two threads race to initialize a type from the `race` module, they
//! don't block, execute initialization function together, but only one of
//! them stores the result.
//!
//! This module does not require `std` feature.
//!
//! # Atomic orderings
//!
//! `OnceNonZeroU32` uses `Acquire` and `Release` orderings for all its
//! operations, so that after `get` or `get_or_init` returns on one thread, any
//! side-effects caused by the setter thread prior to it storing the value are
//! visible to that thread.

// On success of `compare_exchange`, the value was zero, so there was nothing
// to acquire (there is never any `Release` store of 0). On failure, the value
// was nonzero, so it was initialized previously (perhaps on another thread)
// using `Release`, so we must use `Acquire` to ensure that store
// "happens-before" this load.

use core::num::NonZeroU32;
use core::sync::atomic::{AtomicU32, Ordering};

/// A thread-safe cell which can be written to only once.
pub struct OnceNonZeroU32 {
    inner: AtomicU32,
}

impl OnceNonZeroU32 {
    /// Creates a new empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: AtomicU32::new(0),
        }
    }

    /// Gets the underlying value.
    #[inline]
    pub fn get(&self) -> Option<NonZeroU32> {
        let val = self.inner.load(Ordering::Acquire);
        NonZeroU32::new(val)
    }

    /// Gets the contents of the cell, initializing it with `f` if the cell was
    /// empty.
    ///
    /// If several threads concurrently run `get_or_init`, more than one `f` can
    /// be called. However, all threads will return the same value, produced by
    /// some `f`.
    pub fn get_or_init<F>(&self, f: F) -> NonZeroU32
    where
        F: FnOnce() -> NonZeroU32,
    {
        match self.get() {
            Some(it) => it,
            None => self.init(f),
        }
    }

    #[cold]
    #[inline(never)]
    fn init(&self, f: impl FnOnce() -> NonZeroU32) -> NonZeroU32 {
        let nz = f();
        match self.compare_exchange(nz) {
            Ok(_) => nz,
            // The loser adopts the winner's value. `old` was stored from a
            // `NonZeroU32` so it can't be zero.
            Err(old) => NonZeroU32::new(old).unwrap_or(nz),
        }
    }

    #[inline(always)]
    fn compare_exchange(&self, val: NonZeroU32) -> Result<u32, u32> {
        self.inner
            .compare_exchange(0, val.get(), Ordering::Release, Ordering::Acquire)
    }
}
