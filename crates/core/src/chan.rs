//! A closable multi-producer multi-consumer FIFO channel.
//!
//! Sending on a closed channel and closing a closed channel are faults:
//! both panic. The guarded wrappers in `dontpanic` turn those panics into
//! errors; use `Chan` directly when a fault should stay a fault.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

pub const SEND_ON_CLOSED: &str = "send on closed channel";
pub const CLOSE_OF_CLOSED: &str = "close of closed channel";

/// Cloneable handle; every clone refers to the same queue.
pub struct Chan<T> {
    shared: Arc<Shared<T>>,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    not_empty: Condvar,
    not_full: Condvar,
    /// `None` for unbounded channels.
    capacity: Option<usize>,
}

struct State<T> {
    queue: VecDeque<T>,
    closed: bool,
}

impl<T> Chan<T> {
    pub fn unbounded() -> Self {
        Self::with_capacity(None)
    }

    /// A channel holding at most `capacity` queued values.
    ///
    /// Rendezvous channels are not modelled: a capacity of zero is
    /// treated as one.
    pub fn bounded(capacity: usize) -> Self {
        Self::with_capacity(Some(capacity.max(1)))
    }

    fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    queue: VecDeque::new(),
                    closed: false,
                }),
                not_empty: Condvar::new(),
                not_full: Condvar::new(),
                capacity,
            }),
        }
    }

    // Faults are raised only after the guard is released, so the mutex is
    // never poisoned by this module. A poisoned lock still means a panic in
    // user code (e.g. a `Drop` impl) and the queue itself is intact.
    fn lock(&self) -> MutexGuard<'_, State<T>> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues `value`, blocking while a bounded channel is full.
    ///
    /// # Panics
    ///
    /// If the channel is closed, or gets closed while this call waits.
    #[track_caller]
    pub fn send(&self, value: T) {
        let mut state = self.lock();
        loop {
            if state.closed {
                drop(state);
                panic!("send on closed channel");
            }
            match self.shared.capacity {
                Some(cap) if state.queue.len() >= cap => {
                    state = self
                        .shared
                        .not_full
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                _ => break,
            }
        }
        state.queue.push_back(value);
        drop(state);
        self.shared.not_empty.notify_one();
    }

    /// Closes the channel. Queued values stay receivable.
    ///
    /// # Panics
    ///
    /// If the channel is already closed.
    #[track_caller]
    pub fn close(&self) {
        let mut state = self.lock();
        if state.closed {
            drop(state);
            panic!("close of closed channel");
        }
        state.closed = true;
        drop(state);
        self.shared.not_empty.notify_all();
        self.shared.not_full.notify_all();
    }

    /// Blocks for the next value. `None` once the channel is closed and
    /// drained.
    pub fn recv(&self) -> Option<T> {
        let mut state = self.lock();
        loop {
            if let Some(value) = state.queue.pop_front() {
                drop(state);
                self.shared.not_full.notify_one();
                return Some(value);
            }
            if state.closed {
                return None;
            }
            state = self
                .shared
                .not_empty
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Next value if one is queued, without blocking.
    pub fn try_recv(&self) -> Option<T> {
        let value = self.lock().queue.pop_front();
        if value.is_some() {
            self.shared.not_full.notify_one();
        }
        value
    }

    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().queue.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// `None` for unbounded channels.
    pub fn capacity(&self) -> Option<usize> {
        self.shared.capacity
    }
}

impl<T> Clone for Chan<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for Chan<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Chan")
            .field("len", &state.queue.len())
            .field("capacity", &self.shared.capacity)
            .field("closed", &state.closed)
            .finish()
    }
}
