//! Sparse index → value table.
//!
//! Entries live in an ordered map; the table separately tracks a length that
//! behaves like a growable array with holes:
//! - `size()` is one past the highest key ever written, or the initial size
//!   hint if that is larger. It is not the number of stored values.
//! - Writing a key never shrinks the length.
//!
//! Reads of unset keys return `None`. The largest writable key is
//! [`MAX_KEY`], so `size()` always fits in a `usize`.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Largest key `add` accepts; one past it must still be a valid `size()`.
pub const MAX_KEY: usize = usize::MAX - 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hashtable<V> {
    entries: BTreeMap<usize, V>,
    len: usize,
}

impl<V> Default for Hashtable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Hashtable<V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            len: 0,
        }
    }

    /// Empty table whose `size()` starts at `size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            len: size,
        }
    }

    /// Store `value` at `key`, returning the value it replaced.
    ///
    /// Errors with `InvalidArgument` when `key > MAX_KEY`.
    pub fn add(&mut self, key: usize, value: V) -> Result<Option<V>> {
        self.grow_to(key)?;
        Ok(self.entries.insert(key, value))
    }

    /// Like [`Hashtable::add`] for signed keys; negative keys are rejected.
    pub fn try_add(&mut self, key: i64, value: V) -> Result<Option<V>> {
        let key = usize::try_from(key)
            .map_err(|_| Error::invalid(format!("table key {key} is not a valid index")))?;
        self.add(key, value)
    }

    /// Value at `key`, if one was written.
    #[inline]
    pub fn value(&self, key: usize) -> Option<&V> {
        self.entries.get(&key)
    }

    #[inline]
    pub fn value_mut(&mut self, key: usize) -> Option<&mut V> {
        self.entries.get_mut(&key)
    }

    /// Value at `key`, inserting `make()` first if the key is unset.
    pub fn get_or_insert_with(&mut self, key: usize, make: impl FnOnce() -> V) -> Result<&mut V> {
        self.grow_to(key)?;
        Ok(self.entries.entry(key).or_insert_with(make))
    }

    /// True iff a value was written at `key` (being in bounds is not enough).
    #[inline]
    pub fn has_key(&self, key: usize) -> bool {
        self.entries.contains_key(&key)
    }

    /// One past the highest key written (or the size hint). See module docs.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of keys that actually hold a value.
    #[inline]
    pub fn len_populated(&self) -> usize {
        self.entries.len()
    }

    /// True when no key holds a value. A table from `with_size(n)` is empty
    /// while its `size()` is still `n`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Populated entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &V)> {
        self.entries.iter().map(|(&k, v)| (k, v))
    }

    /// Array-like view over `0..size()` with `None` in the gaps.
    ///
    /// Gaps are produced on the fly, so a huge `size()` costs nothing until
    /// the view is walked.
    pub fn dense(&self) -> impl Iterator<Item = Option<&V>> + '_ {
        (0..self.len).map(move |k| self.entries.get(&k))
    }

    fn grow_to(&mut self, key: usize) -> Result<()> {
        check_key(key)?;
        if key >= self.len {
            self.len = key + 1;
        }
        Ok(())
    }
}

pub(crate) fn check_key(key: usize) -> Result<()> {
    if key > MAX_KEY {
        return Err(Error::invalid(format!(
            "table key {key} exceeds the largest index {MAX_KEY}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_one_past_highest_key() {
        let mut t = Hashtable::new();
        assert_eq!(t.size(), 0);
        t.add(5, "x").unwrap();
        assert!(t.has_key(5));
        assert!(!t.has_key(3));
        assert_eq!(t.size(), 6);
        assert_eq!(t.value(3), None);
        assert_eq!(t.value(5), Some(&"x"));
        assert_eq!(t.len_populated(), 1);
    }

    #[test]
    fn lower_writes_do_not_shrink() {
        let mut t = Hashtable::new();
        t.add(10, 1).unwrap();
        t.add(2, 2).unwrap();
        assert_eq!(t.size(), 11);
        assert_eq!(t.add(2, 3).unwrap(), Some(2));
        assert_eq!(t.value(2), Some(&3));
        assert_eq!(t.len_populated(), 2);
    }

    #[test]
    fn out_of_bounds_reads_are_absent() {
        let t: Hashtable<u8> = Hashtable::new();
        assert_eq!(t.value(0), None);
        assert_eq!(t.value(usize::MAX), None);
        assert!(!t.has_key(0));
        assert!(t.is_empty());
    }

    #[test]
    fn size_hint_sets_initial_length() {
        let mut t: Hashtable<&str> = Hashtable::with_size(4);
        assert_eq!(t.size(), 4);
        assert!(t.is_empty());
        assert!(!t.has_key(0));
        t.add(1, "a").unwrap();
        assert_eq!(t.size(), 4);
        t.add(4, "b").unwrap();
        assert_eq!(t.size(), 5);
    }

    #[test]
    fn negative_keys_are_rejected() {
        let mut t = Hashtable::new();
        let err = t.try_add(-1, 'a').unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(t.size(), 0);
        assert_eq!(t.try_add(3, 'b').unwrap(), None);
        assert_eq!(t.size(), 4);
    }

    #[test]
    fn key_without_successor_is_rejected() {
        let mut t = Hashtable::new();
        let err = t.add(usize::MAX, 1u8).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(t.size(), 0);
        assert!(t.is_empty());
        assert!(t.get_or_insert_with(usize::MAX, || 2).is_err());

        t.add(MAX_KEY, 3).unwrap();
        assert_eq!(t.size(), usize::MAX);
        assert_eq!(t.value(MAX_KEY), Some(&3));
    }

    #[test]
    fn dense_view_and_iteration() {
        let mut t = Hashtable::new();
        t.add(3, 'c').unwrap();
        t.add(0, 'a').unwrap();
        let dense: Vec<Option<&char>> = t.dense().collect();
        assert_eq!(dense, vec![Some(&'a'), None, None, Some(&'c')]);
        let pairs: Vec<(usize, char)> = t.iter().map(|(k, v)| (k, *v)).collect();
        assert_eq!(pairs, vec![(0, 'a'), (3, 'c')]);
    }

    #[test]
    fn dense_view_of_far_key_is_lazy() {
        let mut t = Hashtable::new();
        t.add(1usize << 40, 'z').unwrap();
        t.add(1, 'b').unwrap();
        let mut dense = t.dense();
        assert_eq!(dense.next(), Some(None));
        assert_eq!(dense.next(), Some(Some(&'b')));
        assert_eq!(dense.next(), Some(None));
        let far = (1usize << 40) + 1;
        assert_eq!(t.dense().size_hint(), (far, Some(far)));
    }

    #[test]
    fn get_or_insert_with_creates_once() {
        let mut t: Hashtable<Vec<u32>> = Hashtable::new();
        t.get_or_insert_with(2, Vec::new).unwrap().push(1);
        t.get_or_insert_with(2, Vec::new).unwrap().push(2);
        assert_eq!(t.value(2), Some(&vec![1, 2]));
        assert_eq!(t.size(), 3);
        if let Some(v) = t.value_mut(2) {
            v.clear();
        }
        assert_eq!(t.value(2).map(Vec::len), Some(0));
    }
}
