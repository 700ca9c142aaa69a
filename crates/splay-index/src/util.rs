//! Traversal helpers and structural checks.

use std::fmt::Debug;

use thiserror::Error;

use crate::types::Node;

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

/// Leftmost node of the subtree rooted at `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node of the subtree rooted at `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `node`.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        let mut curr = r;
        while let Some(l) = get_l(arena, curr) {
            curr = l;
        }
        return Some(curr);
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// A structural invariant does not hold.
///
/// Any of these indicates a defect in the tree code itself; they are never
/// produced by ordinary use of the public API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {root} has a parent link")]
    RootHasParent { root: u32 },
    #[error("child {child} does not point back to parent {parent}")]
    BrokenParentLink { parent: u32, child: u32 },
    #[error("in-order predecessor of node {at} does not compare less")]
    OrderViolation { at: u32 },
    #[error("tree holds {actual} reachable nodes, expected {expected}")]
    NodeCountMismatch { expected: usize, actual: usize },
}

/// Check parent/child mutual consistency for every reachable node and
/// return the reachable node count.
///
/// Walks with an explicit stack; tree height is unbounded.
pub fn assert_links<N: Node>(arena: &[N], root: Option<u32>) -> Result<usize, InvariantError> {
    let Some(root) = root else {
        return Ok(0);
    };
    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent { root });
    }

    let mut count = 0usize;
    let mut stack = vec![root];
    while let Some(i) = stack.pop() {
        count += 1;
        if let Some(l) = get_l(arena, i) {
            if get_p(arena, l) != Some(i) {
                return Err(InvariantError::BrokenParentLink {
                    parent: i,
                    child: l,
                });
            }
            stack.push(l);
        }
        if let Some(r) = get_r(arena, i) {
            if get_p(arena, r) != Some(i) {
                return Err(InvariantError::BrokenParentLink {
                    parent: i,
                    child: r,
                });
            }
            stack.push(r);
        }
    }
    Ok(count)
}

/// Debug printer.
pub fn print<N, F>(arena: &[N], node: Option<u32>, tab: &str, fmt: &F) -> String
where
    N: Node + Debug,
    F: Fn(&N) -> String,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let deeper = format!("{tab}  ");
            let left = print(arena, n.l(), &deeper, fmt);
            let right = print(arena, n.r(), &deeper, fmt);
            format!("Node[{i}] {{ {} }}\n{tab}L={left}\n{tab}R={right}", fmt(n))
        }
    }
}
