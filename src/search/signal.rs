//! Resettable broadcast notification used by idle search workers
//!
//! Each [`ReadySignal::set`] closes the current wait epoch and opens a new
//! one, releasing every waiter of the closed epoch at once. Once
//! [`ReadySignal::close`] has been called the signal stays latched and every
//! present and future wait returns immediately.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct SignalState {
    epoch: u64,
    closed: bool,
}

/// Token identifying the wait epoch a waiter subscribed to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Epoch(u64);

/// Why a wait ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wake {
    /// New work was announced after subscribing
    Ready,
    /// The signal was closed; no more work is coming
    Closed,
}

/// Epoch-based "work is ready" signal that latches closed
#[derive(Debug, Default)]
pub struct ReadySignal {
    state: Mutex<SignalState>,
    changed: Condvar,
}

impl ReadySignal {
    /// Create an open signal at epoch zero
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SignalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current epoch, to be taken before the condition being waited on is released
    ///
    /// Any [`set`](Self::set) that happens after this call ends the epoch, so
    /// a waiter that subscribes while still holding its own view of the work
    /// queue cannot miss a wake-up.
    pub fn subscribe(&self) -> Epoch {
        Epoch(self.lock().epoch)
    }

    /// Announce new work, releasing every waiter of the current epoch
    ///
    /// Has no effect once the signal is closed.
    pub fn set(&self) {
        let mut state = self.lock();
        if state.closed {
            return;
        }
        state.epoch = state.epoch.wrapping_add(1);
        drop(state);
        self.changed.notify_all();
    }

    /// Latch the signal closed and release all waiters
    pub fn close(&self) {
        self.lock().closed = true;
        self.changed.notify_all();
    }

    /// Whether the signal has been closed
    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Block until the subscribed epoch ends or the signal is closed
    pub fn wait(&self, epoch: Epoch) -> Wake {
        let state = self
            .changed
            .wait_while(self.lock(), |state| {
                !state.closed && state.epoch == epoch.0
            })
            .unwrap_or_else(PoisonError::into_inner);

        if state.closed {
            Wake::Closed
        } else {
            Wake::Ready
        }
    }
}
