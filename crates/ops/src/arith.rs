//! Guarded division and remainder.
//!
//! Integer division panics on a zero divisor and on `MIN / -1`; both come
//! back as errors. Float division never panics and follows IEEE 754.

use crate::{guard, GuardResult};
use std::ops::{Div, Rem};

/// Returns `x / y`.
/// Returns an error if `y` is zero (integers only).
pub fn div<N: Div<Output = N>>(x: N, y: N) -> GuardResult<N> {
    guard(move || x / y)
}

/// Returns `x % y`.
/// Returns an error if `y` is zero (integers only).
pub fn rem<N: Rem<Output = N>>(x: N, y: N) -> GuardResult<N> {
    guard(move || x % y)
}
