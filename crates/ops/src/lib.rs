//! Panic-free alternatives to common operations.
//!
//! Each function performs exactly one operation that can panic and returns
//! the panic as a [`GuardError`] instead. [`raw`] holds the faulting forms
//! of the operations Rust has no native primitive for.
//!
//! ```
//! assert_eq!(dontpanic::div(10, 2).unwrap(), 5);
//! assert!(dontpanic::div(10, 0).is_err());
//! assert_eq!(dontpanic::slice_index(&[10, 20, 30], 1).unwrap(), 20);
//! ```

pub mod arith;
pub mod chan;
pub mod map;
pub mod ptr;
pub mod raw;
pub mod seq;
pub mod text;

pub use arith::{div, rem};
pub use chan::{close, send};
pub use dontpanic_core::{
    hook, recover, recover_into, Chan, FaultLocation, GuardError, GuardResult, Mapping, Seq,
    Window,
};
pub use map::set_map_index;
pub use ptr::deref;
pub use seq::{make_slice, set_slice_index, slice, slice_index};
pub use text::string_index;

use std::panic::AssertUnwindSafe;

/// [`recover`] for the wrappers in this crate.
///
/// Every wrapped operation faults before it changes anything it captured,
/// so nothing half-updated is observable after an intercepted panic.
pub(crate) fn guard<T>(f: impl FnOnce() -> T) -> GuardResult<T> {
    recover(AssertUnwindSafe(f))
}
