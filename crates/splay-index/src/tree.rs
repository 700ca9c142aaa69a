//! The splay-tree index over composite `(key, id)` pairs.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::splay::splay;
use crate::types::{EntryKey, SplayNode};
use crate::util::{assert_links, first, last, next, print, InvariantError};

/// An in-memory ordered index keyed by `(key, id)`, `key` primary and `id`
/// as tie-break. Every successful access splays the touched node to the
/// root, so recently used entries stay cheap to reach; all operations are
/// amortized O(log n) with an O(n) worst case for a single call.
///
/// Lookups mutate the tree (splaying), so even read-style operations take
/// `&mut self`. The structure carries no internal synchronization.
///
/// Nodes live in an arena owned by the tree; freed slots are recycled, and
/// dropping or clearing the tree releases every node without recursing over
/// the (potentially degenerate) tree shape.
pub struct SplayTree<K, I> {
    arena: Vec<SplayNode<K, I>>,
    root: Option<u32>,
    free: Vec<u32>,
    len: usize,
}

impl<K: Ord, I: Ord> SplayTree<K, I> {
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Read-only view of the root's composite key. Immediately after a
    /// successful `insert`, `contains`, or `find_smallest_by_key`, this is
    /// the entry that operation touched.
    pub fn root_entry(&self) -> Option<&EntryKey<K, I>> {
        self.root.map(|i| &self.arena[i as usize].entry)
    }

    fn alloc(&mut self, key: K, id: I) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.arena[idx as usize] = SplayNode::new(key, id);
                idx
            }
            None => {
                self.arena.push(SplayNode::new(key, id));
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// BST descent on the full composite order. No splay side effect.
    fn find_node(&self, key: &K, id: &I) -> Option<u32> {
        let mut curr = self.root;
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            curr = match n.entry.cmp_pair(key, id) {
                Ordering::Greater => n.l,
                Ordering::Less => n.r,
                Ordering::Equal => return Some(i),
            };
        }
        None
    }

    /// Insert `(key, id)` unless it is already present.
    ///
    /// Re-inserting an existing pair is not an error: the existing node is
    /// splayed and the tree is otherwise untouched. Either way the affected
    /// node ends at the root.
    pub fn insert(&mut self, key: K, id: I) {
        let Some(mut curr) = self.root else {
            let idx = self.alloc(key, id);
            self.root = Some(idx);
            self.len = 1;
            return;
        };

        loop {
            let ord = self.arena[curr as usize].entry.cmp_pair(&key, &id);
            let child = match ord {
                Ordering::Equal => {
                    self.root = splay(&mut self.arena, self.root, curr);
                    return;
                }
                Ordering::Greater => self.arena[curr as usize].l,
                Ordering::Less => self.arena[curr as usize].r,
            };
            match child {
                Some(c) => curr = c,
                None => {
                    let idx = self.alloc(key, id);
                    self.arena[idx as usize].p = Some(curr);
                    if ord == Ordering::Greater {
                        self.arena[curr as usize].l = Some(idx);
                    } else {
                        self.arena[curr as usize].r = Some(idx);
                    }
                    self.len += 1;
                    self.root = splay(&mut self.arena, self.root, idx);
                    return;
                }
            }
        }
    }

    /// Exact-match lookup. Splays the node to the root iff found; a miss
    /// leaves the tree untouched.
    pub fn contains(&mut self, key: &K, id: &I) -> bool {
        match self.find_node(key, id) {
            Some(i) => {
                self.root = splay(&mut self.arena, self.root, i);
                true
            }
            None => false,
        }
    }

    /// Key-only descent recording the last equal-key node as candidate.
    /// A smaller-`id` node with the same key can only sit further left, so
    /// the descent keeps going left on equality. Splays on success.
    fn find_smallest_node(&mut self, key: &K) -> Option<u32> {
        let mut curr = self.root;
        let mut res = None;
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            curr = match key.cmp(&n.entry.key) {
                Ordering::Less => n.l,
                Ordering::Greater => n.r,
                Ordering::Equal => {
                    res = Some(i);
                    n.l
                }
            };
        }
        if let Some(i) = res {
            self.root = splay(&mut self.arena, self.root, i);
        }
        res
    }

    /// Entry with matching `key` and minimal `id`, or `None` if no entry
    /// has this key. Splays the result to the root before returning it.
    pub fn find_smallest_by_key(&mut self, key: &K) -> Option<&EntryKey<K, I>> {
        let idx = self.find_smallest_node(key)?;
        Some(&self.arena[idx as usize].entry)
    }

    /// Remove a concrete node: splay it to the root, detach both subtrees,
    /// then join by splaying the predecessor (max of the left subtree) to
    /// the top of the detached left subtree and hanging the right subtree
    /// off it. Being the subtree max, the predecessor has no right child.
    fn remove_node(&mut self, t: u32) {
        self.root = splay(&mut self.arena, self.root, t);

        let l = self.arena[t as usize].l;
        let r = self.arena[t as usize].r;
        self.arena[t as usize].l = None;
        self.arena[t as usize].r = None;
        if let Some(l) = l {
            self.arena[l as usize].p = None;
        }
        if let Some(r) = r {
            self.arena[r as usize].p = None;
        }
        self.free.push(t);
        self.len -= 1;

        let Some(l) = l else {
            self.root = r;
            return;
        };

        let m = last(&self.arena, Some(l)).expect("left subtree is non-empty");
        self.root = splay(&mut self.arena, Some(l), m);
        self.arena[m as usize].r = r;
        if let Some(r) = r {
            self.arena[r as usize].p = Some(m);
        }
    }

    /// Remove the exact `(key, id)` entry. A miss returns `false` and does
    /// nothing structural, not even a splay.
    pub fn remove(&mut self, key: &K, id: &I) -> bool {
        let Some(t) = self.find_node(key, id) else {
            return false;
        };
        self.remove_node(t);
        true
    }

    /// Remove the minimal-`id` entry for `key`, if any.
    pub fn remove_smallest(&mut self, key: &K) -> bool {
        let Some(t) = self.find_smallest_node(key) else {
            return false;
        };
        if self.arena[t as usize].entry.key != *key {
            return false;
        }
        self.remove_node(t);
        true
    }

    /// Drop every entry. Releases the whole arena at once.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Entries in increasing composite order.
    pub fn iter(&self) -> Iter<'_, K, I> {
        Iter {
            tree: self,
            curr: first(&self.arena, self.root),
        }
    }

    pub fn for_each<F: FnMut(&K, &I)>(&self, mut f: F) {
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            let e = &self.arena[i as usize].entry;
            f(&e.key, &e.id);
            curr = next(&self.arena, i);
        }
    }

    /// Check every structural invariant: root has no parent, parent/child
    /// links agree, reachable count matches `len`, and an in-order walk
    /// yields strictly increasing composite keys.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        let count = assert_links(&self.arena, self.root)?;
        if count != self.len {
            return Err(InvariantError::NodeCountMismatch {
                expected: self.len,
                actual: count,
            });
        }

        let mut prev: Option<u32> = None;
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            if let Some(p) = prev {
                let ord = self.arena[p as usize]
                    .entry
                    .cmp(&self.arena[i as usize].entry);
                if ord != Ordering::Less {
                    return Err(InvariantError::OrderViolation { at: i });
                }
            }
            prev = Some(i);
            curr = next(&self.arena, i);
        }
        Ok(())
    }
}

impl<K: Ord + Debug, I: Ord + Debug> SplayTree<K, I> {
    /// Render the tree shape for diagnostics.
    pub fn to_debug_string(&self) -> String {
        print(&self.arena, self.root, "", &|n: &SplayNode<K, I>| {
            format!("{:?}:{:?}", n.entry.key, n.entry.id)
        })
    }
}

impl<K: Ord, I: Ord> Default for SplayTree<K, I> {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over `(&key, &id)` pairs.
pub struct Iter<'a, K, I> {
    tree: &'a SplayTree<K, I>,
    curr: Option<u32>,
}

impl<'a, K: Ord, I: Ord> Iterator for Iter<'a, K, I> {
    type Item = (&'a K, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(&self.tree.arena, i);
        let e = &self.tree.arena[i as usize].entry;
        Some((&e.key, &e.id))
    }
}
