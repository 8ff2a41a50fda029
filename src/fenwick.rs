//! Fenwick tree (binary indexed tree) over `i64`.
//!
//! # Theory
//!
//! The logical array `a[1..=n]` is stored as partial sums: `tree[i]` holds
//! $\sum a(i - \mathrm{lowbit}(i), i]$, where $\mathrm{lowbit}(i) = i \,\&\, (-i)$
//! isolates the least significant set bit of `i`.
//!
//! - `update(i, d)` walks *up* (`i += lowbit(i)`) touching every node whose
//!   range covers `i`.
//! - `prefix_sum(i)` walks *down* (`i -= lowbit(i)`) summing disjoint ranges
//!   that tile `[1, i]`.
//!
//! Both visit at most $\lceil \log_2(n + 1) \rceil$ nodes. Slot 0 of the
//! backing vector is unused.
//!
//! # Indexing
//!
//! Positions are 1-based: valid indices are `1..=n`. `prefix_sum(0)` is the
//! empty sum and returns 0.

use crate::error::{Error, Result};

/// A Fenwick tree supporting point updates and prefix/range sums in
/// $O(\log n)$.
///
/// # Overflow
///
/// Storage, deltas and sums all use `i64`. Overflow is not checked by the
/// tree: it panics in debug builds and wraps in release builds, as plain
/// integer arithmetic does. Callers accumulating values near the `i64` limits
/// must bound them themselves.
#[derive(Clone)]
pub struct FenwickTree {
    tree: Vec<i64>,
    n: usize,
}

impl std::fmt::Debug for FenwickTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FenwickTree")
            .field("len", &self.n)
            .field("total", &self.total())
            .finish()
    }
}

impl FenwickTree {
    /// Create a tree over `n` zeros.
    ///
    /// Fails with [`Error::InvalidSize`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }
        Ok(Self {
            tree: vec![0; n + 1],
            n,
        })
    }

    /// Build a tree whose position `i` holds `values[i - 1]`, in $O(n)$.
    ///
    /// Equivalent to [`FenwickTree::new`] followed by one `update` per value,
    /// without the $O(n \log n)$ cost.
    pub fn from_slice(values: &[i64]) -> Result<Self> {
        let n = values.len();
        if n == 0 {
            return Err(Error::InvalidSize(n));
        }

        let mut tree = Vec::with_capacity(n + 1);
        tree.push(0);
        tree.extend_from_slice(values);

        // Push each finished node into the next node whose range covers it.
        for i in 1..=n {
            let parent = i + lowbit(i);
            if parent <= n {
                let child = tree[i];
                tree[parent] += child;
            }
        }

        Ok(Self { tree, n })
    }

    /// Return the number of logical positions.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Return true if the tree has no positions. Never true for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.tree.capacity() * std::mem::size_of::<i64>()
    }

    /// Add `delta` to position `i`.
    pub fn update(&mut self, i: usize, delta: i64) -> Result<()> {
        self.check_index(i)?;
        let mut idx = i;
        while idx <= self.n {
            self.tree[idx] += delta;
            idx += lowbit(idx);
        }
        Ok(())
    }

    /// Return the sum of positions `[1, i]`.
    ///
    /// `i == 0` is the empty prefix and returns 0. Fails with
    /// [`Error::OutOfRange`] if `i > n`.
    pub fn prefix_sum(&self, i: usize) -> Result<i64> {
        if i > self.n {
            return Err(Error::OutOfRange {
                index: i,
                len: self.n,
            });
        }
        Ok(self.prefix_unchecked(i))
    }

    /// Return the sum of positions `[l, r]`, both inclusive.
    ///
    /// Fails with [`Error::InvalidRange`] unless `1 <= l <= r <= n`.
    pub fn range_sum(&self, l: usize, r: usize) -> Result<i64> {
        if l == 0 || l > r || r > self.n {
            return Err(Error::InvalidRange {
                lo: l,
                hi: r,
                len: self.n,
            });
        }
        Ok(self.prefix_unchecked(r) - self.prefix_unchecked(l - 1))
    }

    /// Return the value at position `i`.
    pub fn get(&self, i: usize) -> Result<i64> {
        self.check_index(i)?;
        Ok(self.prefix_unchecked(i) - self.prefix_unchecked(i - 1))
    }

    /// Overwrite position `i` with `value`.
    pub fn set(&mut self, i: usize, value: i64) -> Result<()> {
        let current = self.get(i)?;
        self.update(i, value - current)
    }

    /// Return the sum of all positions.
    pub fn total(&self) -> i64 {
        self.prefix_unchecked(self.n)
    }

    /// Return the largest `i` in `[0, n]` with `prefix_sum(i) <= target`.
    ///
    /// Uses binary lifting over the tree in $O(\log n)$. The answer is only
    /// meaningful when every position holds a non-negative value, so that
    /// prefix sums are monotone. A negative `target` yields 0.
    pub fn lower_bound(&self, mut target: i64) -> usize {
        let mut idx = 0usize;
        let mut step = highest_power_of_two_leq(self.n);
        while step != 0 {
            let next = idx + step;
            if next <= self.n && self.tree[next] <= target {
                target -= self.tree[next];
                idx = next;
            }
            step >>= 1;
        }
        idx
    }

    /// Materialize the logical array, position 1 first.
    pub fn to_vec(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.n);
        let mut prev = 0;
        for i in 1..=self.n {
            let cur = self.prefix_unchecked(i);
            out.push(cur - prev);
            prev = cur;
        }
        out
    }

    fn check_index(&self, i: usize) -> Result<()> {
        if i == 0 || i > self.n {
            return Err(Error::OutOfRange {
                index: i,
                len: self.n,
            });
        }
        Ok(())
    }

    fn prefix_unchecked(&self, mut i: usize) -> i64 {
        let mut sum = 0;
        while i > 0 {
            sum += self.tree[i];
            i -= lowbit(i);
        }
        sum
    }
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}
