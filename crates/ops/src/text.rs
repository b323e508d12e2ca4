//! Guarded byte indexing into text.

use crate::{guard, GuardResult};

/// Returns byte `i` of `s`.
/// Returns an error if `i` is out of range.
///
/// Indexes raw UTF-8 bytes, not characters.
pub fn string_index(s: &str, i: usize) -> GuardResult<u8> {
    guard(|| s.as_bytes()[i])
}
