//! Rotation primitives and the splay driver.
//!
//! All functions take the arena and node indices (`u32`), thread the tree
//! root through, and return the (possibly changed) root. Rotations are O(1)
//! link rewiring; [`splay`] is a loop of zig / zig-zig / zig-zag steps that
//! ends with the target node at the root. The loop form matters: tree height
//! is unbounded in the worst case, so the driver must not recurse.

use crate::types::Node;

// ── helpers ───────────────────────────────────────────────────────────────

#[inline]
fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}
#[inline]
fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}
#[inline]
fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}
#[inline]
fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}
#[inline]
fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}
#[inline]
fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

// ── rotations ─────────────────────────────────────────────────────────────

/// Left rotation around `x`: promotes `x`'s right child over `x`.
///
/// ```text
///   x              y
///    \            /
///     y    →     x
///    /            \
///   b              b
/// ```
///
/// No-op if `x` has no right child. Returns the new root.
pub fn rotate_left<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_r(arena, x) else {
        return root;
    };

    let b = get_l(arena, y);
    set_r(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, y, p);
    let root = match p {
        None => Some(y),
        Some(p) => {
            if get_l(arena, p) == Some(x) {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
            root
        }
    };

    set_l(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

/// Right rotation around `x`: promotes `x`'s left child over `x`.
///
/// Mirror image of [`rotate_left`]. No-op if `x` has no left child.
pub fn rotate_right<N: Node>(arena: &mut [N], root: Option<u32>, x: u32) -> Option<u32> {
    let Some(y) = get_l(arena, x) else {
        return root;
    };

    let b = get_r(arena, y);
    set_l(arena, x, b);
    if let Some(b) = b {
        set_p(arena, b, Some(x));
    }

    let p = get_p(arena, x);
    set_p(arena, y, p);
    let root = match p {
        None => Some(y),
        Some(p) => {
            if get_l(arena, p) == Some(x) {
                set_l(arena, p, Some(y));
            } else {
                set_r(arena, p, Some(y));
            }
            root
        }
    };

    set_r(arena, y, Some(x));
    set_p(arena, x, Some(y));
    root
}

// ── splay steps ───────────────────────────────────────────────────────────

/// Parent is the root: single rotation of the parent toward `x`'s side.
fn zig<N: Node>(arena: &mut [N], root: Option<u32>, x: u32, p: u32) -> Option<u32> {
    if get_l(arena, p) == Some(x) {
        rotate_right(arena, root, p)
    } else {
        rotate_left(arena, root, p)
    }
}

/// `x` and its parent are same-side children: rotate the grandparent first,
/// then the parent, same direction twice.
fn zig_zig<N: Node>(arena: &mut [N], root: Option<u32>, x: u32, p: u32, g: u32) -> Option<u32> {
    if get_l(arena, p) == Some(x) {
        let root = rotate_right(arena, root, g);
        rotate_right(arena, root, p)
    } else {
        let root = rotate_left(arena, root, g);
        rotate_left(arena, root, p)
    }
}

/// `x` and its parent are opposite-side children: rotate the parent first,
/// then the grandparent, in opposite directions.
fn zig_zag<N: Node>(arena: &mut [N], root: Option<u32>, x: u32, p: u32, g: u32) -> Option<u32> {
    if get_l(arena, p) == Some(x) {
        let root = rotate_right(arena, root, p);
        rotate_left(arena, root, g)
    } else {
        let root = rotate_left(arena, root, p);
        rotate_right(arena, root, g)
    }
}

// ── driver ────────────────────────────────────────────────────────────────

/// Splay `x` to the root of the tree rooted at `root`.
///
/// Works on any subtree whose root has a `None` parent link, which is what
/// the deletion join relies on. Returns the new root (always `Some(x)` when
/// `x` is in the tree).
pub fn splay<N: Node>(arena: &mut [N], mut root: Option<u32>, x: u32) -> Option<u32> {
    while let Some(p) = get_p(arena, x) {
        root = match get_p(arena, p) {
            None => zig(arena, root, x, p),
            Some(g) => {
                let x_left = get_l(arena, p) == Some(x);
                let p_left = get_l(arena, g) == Some(p);
                if x_left == p_left {
                    zig_zig(arena, root, x, p, g)
                } else {
                    zig_zag(arena, root, x, p, g)
                }
            }
        };
    }
    root
}

// ── tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SplayNode;
    use crate::util::{assert_links, first, next};

    type N = SplayNode<i32, i32>;

    fn node(key: i32) -> N {
        SplayNode::new(key, 0)
    }

    /// Link a hand-built parent/child edge.
    fn link_l(arena: &mut [N], p: u32, c: u32) {
        arena[p as usize].l = Some(c);
        arena[c as usize].p = Some(p);
    }

    fn link_r(arena: &mut [N], p: u32, c: u32) {
        arena[p as usize].r = Some(c);
        arena[c as usize].p = Some(p);
    }

    fn collect_inorder(arena: &[N], root: Option<u32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = first(arena, root);
        while let Some(i) = curr {
            out.push(arena[i as usize].entry.key);
            curr = next(arena, i);
        }
        out
    }

    #[test]
    fn rotate_left_promotes_right_child() {
        // 1
        //  \
        //   2
        //  /
        // (none)
        let mut arena = vec![node(1), node(2)];
        link_r(&mut arena, 0, 1);
        let root = rotate_left(&mut arena, Some(0), 0);
        assert_eq!(root, Some(1));
        assert_eq!(arena[1].l, Some(0));
        assert_eq!(arena[0].p, Some(1));
        assert_links(&arena, root).unwrap();
        assert_eq!(collect_inorder(&arena, root), vec![1, 2]);
    }

    #[test]
    fn rotate_right_transplants_inner_subtree() {
        //     3          1
        //    /    →       \
        //   1              3
        //    \            /
        //     2          2
        let mut arena = vec![node(3), node(1), node(2)];
        link_l(&mut arena, 0, 1);
        link_r(&mut arena, 1, 2);
        let root = rotate_right(&mut arena, Some(0), 0);
        assert_eq!(root, Some(1));
        assert_eq!(arena[1].r, Some(0));
        assert_eq!(arena[0].l, Some(2));
        assert_eq!(arena[2].p, Some(0));
        assert_links(&arena, root).unwrap();
        assert_eq!(collect_inorder(&arena, root), vec![1, 2, 3]);
    }

    #[test]
    fn rotate_without_required_child_is_noop() {
        let mut arena = vec![node(1)];
        assert_eq!(rotate_left(&mut arena, Some(0), 0), Some(0));
        assert_eq!(rotate_right(&mut arena, Some(0), 0), Some(0));
        assert_eq!(arena[0].p, None);
        assert_eq!(arena[0].l, None);
        assert_eq!(arena[0].r, None);
    }

    #[test]
    fn rotation_under_non_root_parent_fixes_child_slot() {
        //   5
        //  /
        // 2
        //  \
        //   3      rotate_left(2) promotes 3 under 5
        let mut arena = vec![node(5), node(2), node(3)];
        link_l(&mut arena, 0, 1);
        link_r(&mut arena, 1, 2);
        let root = rotate_left(&mut arena, Some(0), 1);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].l, Some(2));
        assert_eq!(arena[2].p, Some(0));
        assert_links(&arena, root).unwrap();
        assert_eq!(collect_inorder(&arena, root), vec![2, 3, 5]);
    }

    #[test]
    fn splay_leaf_of_left_spine_to_root() {
        // Degenerate left spine 5-4-3-2-1; splaying the deepest node
        // exercises zig-zig repeatedly.
        let mut arena: Vec<N> = (1..=5).map(node).collect();
        for i in (0..4).rev() {
            link_l(&mut arena, i + 1, i);
        }
        let root = splay(&mut arena, Some(4), 0);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].p, None);
        assert_links(&arena, root).unwrap();
        assert_eq!(collect_inorder(&arena, root), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn splay_zig_zag_inner_node() {
        //   3
        //  /
        // 1
        //  \
        //   2   ← splay target (left child's right child)
        let mut arena = vec![node(3), node(1), node(2)];
        link_l(&mut arena, 0, 1);
        link_r(&mut arena, 1, 2);
        let root = splay(&mut arena, Some(0), 2);
        assert_eq!(root, Some(2));
        assert_eq!(arena[2].l, Some(1));
        assert_eq!(arena[2].r, Some(0));
        assert_links(&arena, root).unwrap();
        assert_eq!(collect_inorder(&arena, root), vec![1, 2, 3]);
    }

    #[test]
    fn splay_root_is_noop() {
        let mut arena = vec![node(1), node(2)];
        link_r(&mut arena, 0, 1);
        let root = splay(&mut arena, Some(0), 0);
        assert_eq!(root, Some(0));
        assert_eq!(arena[0].r, Some(1));
    }
}
