//! Unguarded primitives.
//!
//! The faulting operations behind the guarded wrappers that have no native
//! Rust counterpart. Each panics exactly where the wrapper would report an
//! error. Native faults (`/`, `%`, indexing) need no stand-in.

use dontpanic_core::{Chan, Mapping, Seq};
use std::mem;
use std::ops::Deref;

pub const NIL_DEREF: &str = "invalid memory address or nil pointer dereference";
pub const NIL_MAP: &str = "assignment to entry in nil map";
pub const NIL_CHAN: &str = "close of nil channel";
pub const LEN_OUT_OF_RANGE: &str = "makeslice: len out of range";
pub const CAP_OUT_OF_RANGE: &str = "makeslice: cap out of range";

/// Reads through `p`.
///
/// # Panics
///
/// If `p` is `None`.
#[track_caller]
pub fn deref<P>(p: Option<P>) -> P::Target
where
    P: Deref,
    P::Target: Clone,
{
    match p {
        Some(p) => (*p).clone(),
        None => panic!("invalid memory address or nil pointer dereference"),
    }
}

/// Sets `m[key] = value`.
///
/// # Panics
///
/// If `m` is `None`.
#[track_caller]
pub fn set_map_index<K, V, M>(m: Option<&mut M>, key: K, value: V)
where
    M: Mapping<K, V> + ?Sized,
{
    match m {
        Some(m) => m.set(key, value),
        None => panic!("assignment to entry in nil map"),
    }
}

/// Closes `ch`.
///
/// # Panics
///
/// If `ch` is `None` or already closed.
#[track_caller]
pub fn close<T>(ch: Option<&Chan<T>>) {
    match ch {
        Some(ch) => ch.close(),
        None => panic!("close of nil channel"),
    }
}

/// Largest capacity accepted for zero-sized element types. Their storage is
/// free, but every element is still constructed.
pub const MAX_ZERO_SIZED_CAP: usize = u32::MAX as usize;

/// Allocates a sequence of `len` default elements with capacity `cap`.
///
/// All `cap` elements are constructed so the sequence can later be
/// re-sliced into its capacity. Allocation failure is reported as a panic
/// rather than an abort.
///
/// # Panics
///
/// If `len` is negative, `cap` is negative or smaller than `len`, or `cap`
/// elements cannot be allocated (for zero-sized `E`, `cap` is above
/// [`MAX_ZERO_SIZED_CAP`]).
#[track_caller]
pub fn make_slice<E: Default + Clone>(len: isize, cap: isize) -> Seq<E> {
    let Ok(len) = usize::try_from(len) else {
        panic!("makeslice: len out of range");
    };
    let Ok(cap) = usize::try_from(cap) else {
        panic!("makeslice: cap out of range");
    };
    if len > cap {
        panic!("makeslice: cap out of range");
    }
    if mem::size_of::<E>() == 0 && cap > MAX_ZERO_SIZED_CAP {
        panic!("makeslice: cap out of range");
    }

    let mut storage = Vec::new();
    if storage.try_reserve_exact(cap).is_err() {
        panic!("makeslice: cap out of range");
    }
    storage.resize(cap, E::default());
    let Some(seq) = Seq::with_len(storage, len) else {
        panic!("makeslice: len out of range");
    };
    seq
}
