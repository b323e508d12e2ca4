//! Guarded map write.

use crate::{guard, raw, GuardResult, Mapping};

/// Sets `m[key] = value`.
/// Returns an error if `m` is `None`.
pub fn set_map_index<K, V, M>(m: Option<&mut M>, key: K, value: V) -> GuardResult<()>
where
    M: Mapping<K, V> + ?Sized,
{
    guard(move || raw::set_map_index(m, key, value))
}
