//! Node trait and concrete arena node for the splay index.
//!
//! All "pointers" are `Option<u32>` indices into a tree-owned `Vec`-backed
//! arena. The child links (`l` / `r`) are owning-by-convention; the parent
//! link (`p`) exists only so that splaying can walk upward, and is never
//! used to decide when a slot is released.

use std::cmp::Ordering;

/// Tree links (`p`, `l`, `r`) over arena indices.
///
/// The splay algorithm in [`crate::splay`] is generic over this trait.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Composite sort key: `key` primary, `id` as tie-break.
///
/// The derived `Ord` is lexicographic — `a < b` iff
/// `a.key < b.key || (a.key == b.key && a.id < b.id)` — and is the single
/// source of truth for tree order. No two nodes in a tree share the same
/// `(key, id)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey<K, I> {
    pub key: K,
    pub id: I,
}

impl<K: Ord, I: Ord> EntryKey<K, I> {
    /// Compare a borrowed `(key, id)` pair against this entry without
    /// constructing an `EntryKey` on the query path.
    #[inline]
    pub fn cmp_pair(&self, key: &K, id: &I) -> Ordering {
        match self.key.cmp(key) {
            Ordering::Equal => self.id.cmp(id),
            ord => ord,
        }
    }
}

/// One element of the index: three links plus the composite key.
///
/// Splaying rewires links; it never touches `entry`.
#[derive(Clone, Debug)]
pub struct SplayNode<K, I> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub entry: EntryKey<K, I>,
}

impl<K, I> SplayNode<K, I> {
    pub fn new(key: K, id: I) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            entry: EntryKey { key, id },
        }
    }
}

impl<K, I> Node for SplayNode<K, I> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_key_order_is_lexicographic() {
        let a = EntryKey { key: 1, id: 9 };
        let b = EntryKey { key: 2, id: 0 };
        let c = EntryKey { key: 2, id: 1 };
        assert!(a < b);
        assert!(b < c);
        assert_eq!(b.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn cmp_pair_agrees_with_ord() {
        let e = EntryKey { key: 10, id: 5 };
        assert_eq!(e.cmp_pair(&10, &5), Ordering::Equal);
        assert_eq!(e.cmp_pair(&10, &6), Ordering::Less);
        assert_eq!(e.cmp_pair(&10, &4), Ordering::Greater);
        assert_eq!(e.cmp_pair(&11, &0), Ordering::Less);
        assert_eq!(e.cmp_pair(&9, &99), Ordering::Greater);
    }
}
