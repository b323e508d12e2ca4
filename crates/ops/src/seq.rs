//! Guarded sequence construction, indexing, and re-slicing.

use crate::{guard, raw, GuardError, GuardResult, Seq, Window};

/// Allocates a sequence.
/// Returns an error if the length is negative or larger than the capacity.
///
/// `size` selects the form:
/// - `[]`: empty, nothing allocated
/// - `[n]`: length `n`
/// - `[n, m]`: length `n`, capacity `m`
///
/// New elements are `E::default()`. Pass `&seq` to [`slice`] to re-slice
/// into the capacity. More than two sizes is an
/// [`GuardError::Arity`] error, raised before anything is allocated.
pub fn make_slice<E: Default + Clone>(size: &[isize]) -> GuardResult<Seq<E>> {
    match *size {
        [] => Ok(Seq::new()),
        [n] => guard(|| raw::make_slice(n, n)),
        [n, m] => guard(|| raw::make_slice(n, m)),
        _ => Err(GuardError::arity(format!(
            "size: expected 0-2 arguments; found {}",
            size.len()
        ))),
    }
}

/// Sets `s[i] = value`.
/// Returns an error if `i` is out of range.
pub fn set_slice_index<E>(s: &mut [E], i: usize, value: E) -> GuardResult<()> {
    guard(move || s[i] = value)
}

/// Returns a clone of `s[i]`.
/// Returns an error if `i` is out of range.
pub fn slice_index<E: Clone>(s: &[E], i: usize) -> GuardResult<E> {
    guard(|| s[i].clone())
}

/// Re-slices `s`.
/// Returns an error if a bound is out of range or too many are given.
///
/// `ijk` selects the form, for a window of length `len` and capacity `cap`:
/// - `[]`: `s[:]`, the whole window
/// - `[i]`: `s[i:]`
/// - `[i, j]`: `s[i:j]`, `j` may reach into the capacity
/// - `[i, j, k]`: `s[i:j:k]`, capacity limited to `k - i`
pub fn slice<'a, E>(s: impl Into<Window<'a, E>>, ijk: &[usize]) -> GuardResult<Window<'a, E>> {
    let s = s.into();
    match *ijk {
        [] => Ok(s),
        [i] => guard(|| s.reslice(i, s.len())),
        [i, j] => guard(|| s.reslice(i, j)),
        [i, j, k] => guard(|| s.reslice3(i, j, k)),
        _ => Err(GuardError::arity(format!(
            "ijk: expected 0-3 indexes; found {}",
            ijk.len()
        ))),
    }
}
