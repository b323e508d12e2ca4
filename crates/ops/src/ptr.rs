//! Guarded dereference.

use crate::{guard, raw, GuardResult};
use std::ops::Deref;

/// Returns a clone of `*p`.
/// Returns an error if `p` is `None`.
pub fn deref<P>(p: Option<P>) -> GuardResult<P::Target>
where
    P: Deref,
    P::Target: Clone,
{
    guard(move || raw::deref(p))
}
