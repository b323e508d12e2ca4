//! Process-wide panic hook that keeps intercepted panics quiet.
//!
//! The standard hook prints every panic to stderr, including the ones
//! [`recover`](crate::recover) is about to turn into an error. This hook
//! checks a thread-local scope depth: inside a guard it only records the
//! panic location; outside it defers to whatever hook was installed before.

use crate::error::FaultLocation;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static INSTALL: Once = Once::new();
static SILENCE: AtomicBool = AtomicBool::new(true);

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    static LAST_LOCATION: RefCell<Option<FaultLocation>> = const { RefCell::new(None) };
}

/// Installs the hook. Idempotent; called lazily by every guard.
///
/// Inside a guard every panic is treated as intercepted, even one user
/// code catches on its own before the guard sees it.
///
/// A hook set with `std::panic::set_hook` afterwards replaces this one;
/// interception keeps working but panics are printed again and lose their
/// location.
pub fn install() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if depth() == 0 {
                previous(info);
                return;
            }
            let location = info.location().map(FaultLocation::from);
            let _ = LAST_LOCATION.try_with(|slot| *slot.borrow_mut() = location);
            if !SILENCE.load(Ordering::Relaxed) {
                previous(info);
            }
        }));
        tracing::debug!("panic hook installed");
    });
}

/// When `false`, intercepted panics are also passed to the previous hook
/// (and so printed as usual). Defaults to `true`.
pub fn set_silence(silence: bool) {
    SILENCE.store(silence, Ordering::Relaxed);
}

pub fn is_silenced() -> bool {
    SILENCE.load(Ordering::Relaxed)
}

/// Number of guard scopes active on the current thread.
pub fn depth() -> usize {
    DEPTH.try_with(Cell::get).unwrap_or(0)
}

/// Marks the current thread as inside a guard until dropped.
///
/// `!Send`: the depth it restores belongs to the thread that created it.
pub(crate) struct Scope {
    _thread_bound: PhantomData<*const ()>,
}

impl Scope {
    pub(crate) fn enter() -> Self {
        install();
        DEPTH.with(|d| d.set(d.get() + 1));
        LAST_LOCATION.with(|slot| *slot.borrow_mut() = None);
        Scope {
            _thread_bound: PhantomData,
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}

/// Location recorded for the most recent intercepted panic on this thread.
pub(crate) fn take_location() -> Option<FaultLocation> {
    LAST_LOCATION.with(|slot| slot.borrow_mut().take())
}
