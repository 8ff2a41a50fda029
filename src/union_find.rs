//! Disjoint-set forest (union-find) with path compression and union by rank.
//!
//! # Theory
//!
//! Each set is a rooted tree stored in a parent array; the root is the set's
//! representative. Two heuristics keep the trees flat:
//! - **Union by rank**: the root of the shallower tree is attached under the
//!   root of the deeper one, bounding height by $\lfloor \log_2 n \rfloor$.
//! - **Path compression**: `find` re-points every node it walks past directly
//!   at the root.
//!
//! Together they give amortized $O(\alpha(n))$ per operation, where $\alpha$ is
//! the inverse Ackermann function. Either heuristic alone only guarantees
//! $O(\log n)$.
//!
//! # Indexing
//!
//! Elements are labeled `0..n`. Any index `>= n` is rejected with
//! [`Error::OutOfRange`] before the structure is touched.

use core::cmp::Ordering;

use crate::error::{Error, Result};

/// A partition of the elements `0..n` into disjoint sets.
#[derive(Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    // Upper bound on subtree height, so never above log2(n).
    rank: Vec<u8>,
    count: usize,
}

impl std::fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnionFind")
            .field("len", &self.len())
            .field("components", &self.count)
            .finish()
    }
}

impl UnionFind {
    /// Create `n` singleton sets, one for each element of `0..n`.
    ///
    /// Fails with [`Error::InvalidSize`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }
        Ok(Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        })
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Return true if there are no elements. Never true for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Return the number of disjoint sets currently represented.
    pub fn component_count(&self) -> usize {
        self.count
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.parent.capacity() * std::mem::size_of::<usize>() + self.rank.capacity()
    }

    /// Return the representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is re-pointed at the root,
    /// so repeated lookups are amortized $O(1)$. Set membership never changes.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.find_unchecked(x))
    }

    /// Return the representative of the set containing `x` without compressing
    /// the path.
    ///
    /// Always agrees with [`UnionFind::find`]; use it when only a shared
    /// reference is available.
    pub fn root(&self, x: usize) -> Result<usize> {
        self.check(x)?;
        Ok(self.root_unchecked(x))
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `Ok(true)` if two sets were merged and `Ok(false)` if `x` and `y`
    /// were already in the same set. On equal rank, `y`'s root is attached
    /// under `x`'s root.
    pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;

        let root_x = self.find_unchecked(x);
        let root_y = self.find_unchecked(y);
        if root_x == root_y {
            return Ok(false);
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.count -= 1;
        Ok(true)
    }

    /// Return true if `x` and `y` are in the same set.
    ///
    /// Takes `&mut self` only because the lookups compress paths.
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.find_unchecked(x) == self.find_unchecked(y))
    }

    fn check(&self, x: usize) -> Result<()> {
        if x < self.parent.len() {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index: x,
                len: self.parent.len(),
            })
        }
    }

    fn root_unchecked(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    fn find_unchecked(&mut self, x: usize) -> usize {
        let root = self.root_unchecked(x);
        let mut node = x;
        while node != root {
            node = core::mem::replace(&mut self.parent[node], root);
        }
        root
    }
}
