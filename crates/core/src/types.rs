//! Sequence and mapping types the guarded operations act on.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::{Deref, DerefMut};

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A borrowed sequence view with a length and a capacity.
///
/// The capacity is how far the view may be re-sliced to the right: the
/// elements in `len..cap` are part of the backing storage but not of the
/// view. A window made from a plain slice has `cap == len`.
pub struct Window<'a, E> {
    backing: &'a [E],
    len: usize,
}

impl<'a, E> Window<'a, E> {
    /// Full view of `backing`.
    pub fn new(backing: &'a [E]) -> Self {
        Self {
            backing,
            len: backing.len(),
        }
    }

    /// View of the first `len` elements of `backing`, with `backing.len()`
    /// as capacity. `None` if `len` exceeds the backing storage.
    pub fn with_len(backing: &'a [E], len: usize) -> Option<Self> {
        (len <= backing.len()).then_some(Self { backing, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn cap(&self) -> usize {
        self.backing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &'a [E] {
        &self.backing[..self.len]
    }

    /// `s[i:j]`: length `j - i`, capacity `cap - i`.
    ///
    /// # Panics
    ///
    /// Unless `i <= j <= cap`.
    #[track_caller]
    pub fn reslice(self, i: usize, j: usize) -> Self {
        let cap = self.cap();
        if j > cap {
            panic!("slice bounds out of range [:{j}] with capacity {cap}");
        }
        if i > j {
            panic!("slice bounds out of range [{i}:{j}]");
        }
        Self {
            backing: &self.backing[i..],
            len: j - i,
        }
    }

    /// `s[i:j:k]`: length `j - i`, capacity `k - i`.
    ///
    /// # Panics
    ///
    /// Unless `i <= j <= k <= cap`.
    #[track_caller]
    pub fn reslice3(self, i: usize, j: usize, k: usize) -> Self {
        let cap = self.cap();
        if k > cap {
            panic!("slice bounds out of range [::{k}] with capacity {cap}");
        }
        if j > k {
            panic!("slice bounds out of range [:{j}:{k}]");
        }
        if i > j {
            panic!("slice bounds out of range [{i}:{j}:]");
        }
        Self {
            backing: &self.backing[i..k],
            len: j - i,
        }
    }
}

// Manual impls: a window is a pair of borrows, copyable whatever `E` is.
impl<E> Clone for Window<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Window<'_, E> {}

impl<E> Deref for Window<'_, E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        self.as_slice()
    }
}

impl<E: fmt::Debug> fmt::Debug for Window<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("elements", &self.as_slice())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<E: PartialEq> PartialEq<[E]> for Window<'_, E> {
    fn eq(&self, other: &[E]) -> bool {
        self.as_slice() == other
    }
}

impl<E: PartialEq, const N: usize> PartialEq<[E; N]> for Window<'_, E> {
    fn eq(&self, other: &[E; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, E> From<&'a [E]> for Window<'a, E> {
    fn from(backing: &'a [E]) -> Self {
        Self::new(backing)
    }
}

impl<'a, E, const N: usize> From<&'a [E; N]> for Window<'a, E> {
    fn from(backing: &'a [E; N]) -> Self {
        Self::new(backing)
    }
}

impl<'a, E> From<&'a Vec<E>> for Window<'a, E> {
    fn from(backing: &'a Vec<E>) -> Self {
        Self::new(backing)
    }
}

impl<'a, E> IntoIterator for Window<'a, E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, E> From<&'a Seq<E>> for Window<'a, E> {
    fn from(seq: &'a Seq<E>) -> Self {
        Self {
            backing: &seq.storage,
            len: seq.len,
        }
    }
}

// ---------------------------------------------------------------------------
// Seq
// ---------------------------------------------------------------------------

/// An owned sequence with a length and a capacity.
///
/// Every element of the capacity is initialised; only the first `len` belong
/// to the sequence. Borrowing it as a [`Window`] keeps the capacity, so a
/// re-slice can grow into the spare elements.
#[derive(Clone)]
pub struct Seq<E> {
    storage: Vec<E>,
    len: usize,
}

impl<E> Seq<E> {
    /// Empty sequence, nothing allocated.
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
            len: 0,
        }
    }

    /// The first `len` elements of `storage`, with `storage.len()` as
    /// capacity. `None` if `len` exceeds the storage.
    pub fn with_len(storage: Vec<E>, len: usize) -> Option<Self> {
        (len <= storage.len()).then_some(Self { storage, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn cap(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[E] {
        &self.storage[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.storage[..self.len]
    }

    pub fn window(&self) -> Window<'_, E> {
        Window::from(self)
    }

    /// The elements of the sequence; spare capacity is dropped.
    pub fn into_vec(mut self) -> Vec<E> {
        self.storage.truncate(self.len);
        self.storage
    }
}

impl<E> Default for Seq<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for Seq<E> {
    fn from(storage: Vec<E>) -> Self {
        let len = storage.len();
        Self { storage, len }
    }
}

impl<E> Deref for Seq<E> {
    type Target = [E];

    fn deref(&self) -> &[E] {
        self.as_slice()
    }
}

impl<E> DerefMut for Seq<E> {
    fn deref_mut(&mut self) -> &mut [E] {
        self.as_mut_slice()
    }
}

impl<E: fmt::Debug> fmt::Debug for Seq<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Seq")
            .field("elements", &self.as_slice())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<E: PartialEq> PartialEq for Seq<E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<E: PartialEq> PartialEq<[E]> for Seq<E> {
    fn eq(&self, other: &[E]) -> bool {
        self.as_slice() == other
    }
}

impl<E: PartialEq, const N: usize> PartialEq<[E; N]> for Seq<E> {
    fn eq(&self, other: &[E; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<E: PartialEq> PartialEq<Vec<E>> for Seq<E> {
    fn eq(&self, other: &Vec<E>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

/// Key/value containers that accept writes.
pub trait Mapping<K, V> {
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: K, value: V);
}

impl<K: Eq + Hash, V, S: BuildHasher> Mapping<K, V> for HashMap<K, V, S> {
    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping<K, V> for BTreeMap<K, V> {
    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn plain_slice_has_cap_equal_len() {
        let data = [1, 2, 3];
        let w = Window::new(&data);
        assert_eq!(w.len(), 3);
        assert_eq!(w.cap(), 3);
        assert_eq!(w, [1, 2, 3]);
    }

    #[test]
    fn with_len_rejects_overlong() {
        let data = [1, 2, 3];
        assert!(Window::with_len(&data, 4).is_none());
        let w = Window::with_len(&data, 1).unwrap();
        assert_eq!(w, [1]);
        assert_eq!(w.cap(), 3);
    }

    #[test]
    fn reslice_can_grow_into_capacity() {
        let data = [1, 2, 3, 4, 5];
        let short = Window::with_len(&data, 2).unwrap();
        let grown = short.reslice(1, 4);
        assert_eq!(grown, [2, 3, 4]);
        assert_eq!(grown.cap(), 4);
    }

    #[test]
    fn reslice3_limits_capacity() {
        let data = [0, 1, 2, 3, 4, 5];
        let w = Window::new(&data).reslice3(1, 3, 4);
        assert_eq!(w, [1, 2]);
        assert_eq!(w.cap(), 3);
        assert_eq!(w.reslice(0, 3), [1, 2, 3]);
    }

    #[test]
    fn reslice_out_of_range_panics() {
        let data = [1, 2, 3];
        let w = Window::new(&data);
        let err = panic::catch_unwind(|| w.reslice(0, 4)).unwrap_err();
        assert_eq!(
            err.downcast_ref::<String>().map(String::as_str),
            Some("slice bounds out of range [:4] with capacity 3")
        );
        assert!(panic::catch_unwind(|| w.reslice(2, 1)).is_err());
        assert!(panic::catch_unwind(|| w.reslice3(0, 1, 4)).is_err());
        assert!(panic::catch_unwind(|| w.reslice3(0, 3, 2)).is_err());
        assert!(panic::catch_unwind(|| w.reslice3(3, 2, 3)).is_err());
    }

    #[test]
    fn seq_window_keeps_spare_capacity() {
        let seq = Seq::with_len(vec![0u8; 10], 2).unwrap();
        assert_eq!(seq, [0, 0]);
        assert_eq!(seq.cap(), 10);

        let w = seq.window();
        assert_eq!((w.len(), w.cap()), (2, 10));
        assert_eq!(w.reslice(0, 5).len(), 5);
    }

    #[test]
    fn seq_writes_stay_within_len() {
        let mut seq = Seq::with_len(vec![0i32; 4], 2).unwrap();
        seq[1] = 7;
        assert_eq!(seq.as_slice(), [0, 7]);
        assert!(panic::catch_unwind(panic::AssertUnwindSafe(|| seq[2] = 1)).is_err());
        assert_eq!(seq.into_vec(), vec![0, 7]);
    }

    #[test]
    fn seq_from_vec_is_full() {
        let seq = Seq::from(vec!['a', 'b']);
        assert_eq!((seq.len(), seq.cap()), (2, 2));
        assert!(Seq::with_len(vec![1], 2).is_none());
        assert!(Seq::<u8>::new().is_empty());
    }

    #[test]
    fn mapping_writes_hash_and_btree() {
        let mut h: HashMap<&str, i32> = HashMap::new();
        h.set("a", 1);
        h.set("a", 2);
        assert_eq!(h.get("a"), Some(&2));

        let mut b: BTreeMap<u8, char> = BTreeMap::new();
        b.set(1, 'x');
        assert_eq!(b.get(&1), Some(&'x'));
    }
}
