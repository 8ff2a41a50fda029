//! # Disjoint Sets and Fenwick Trees
//!
//! *Two classic array-backed structures with logarithmic-or-better operations.*
//!
//! ## Intuition First
//!
//! Both structures answer questions about a fixed row of `n` slots by keeping a
//! second array of cleverly chosen pointers or partial answers:
//!
//! - A **disjoint-set forest** points every slot at another slot in its group.
//!   Follow the pointers and you reach the group's representative; two slots
//!   are connected exactly when they reach the same one.
//! - A **Fenwick tree** stores at slot `i` the sum of a block of values whose
//!   length is the lowest set bit of `i`. Any prefix of the row is a union of
//!   at most $\log_2 n$ such blocks.
//!
//! ## Historical Context
//!
//! ```text
//! 1964  Galler-Fischer  Disjoint-set forests for equivalence declarations
//! 1973  Hopcroft-Ullman Path compression with union by size: O(log* n)
//! 1975  Tarjan          Tight O(alpha(n)) amortized bound
//! 1989  Ryabko          Prefix-sum tree over binary index decompositions
//! 1994  Fenwick         "A new data structure for cumulative frequency tables"
//! ```
//!
//! ## Complexity Analysis
//!
//! | structure     | operation                      | time                 |
//! |---------------|--------------------------------|----------------------|
//! | `UnionFind`   | `find`, `union`, `connected`   | $O(\alpha(n))$ amortized |
//! | `FenwickTree` | `update`, `prefix_sum`, `range_sum` | $O(\log n)$     |
//! | `FenwickTree` | `from_slice`                   | $O(n)$               |
//!
//! Space is `n` words plus `n` bytes for `UnionFind`, `n + 1` words for
//! `FenwickTree`.
//!
//! ## What Could Go Wrong
//!
//! 1. **Bad indices**: `UnionFind` is 0-based, `FenwickTree` is 1-based. Every
//!    operation checks its arguments and returns [`Error`] instead of
//!    panicking, and a failed call leaves the structure untouched.
//! 2. **Overflow**: `FenwickTree` sums in `i64` without overflow checks.
//! 3. **Sharing**: neither structure synchronizes internally. Wrap it in a
//!    `Mutex` or `RwLock` to share it across threads.
//!
//! ## Example
//!
//! ```
//! use forestsum::{FenwickTree, UnionFind};
//!
//! let mut uf = UnionFind::new(4)?;
//! uf.union(0, 1)?;
//! assert!(uf.connected(1, 0)?);
//! assert_eq!(uf.component_count(), 3);
//!
//! let mut ft = FenwickTree::from_slice(&[1, 3, 5, 7])?;
//! ft.update(2, 10)?;
//! assert_eq!(ft.range_sum(2, 3)?, 18);
//! # Ok::<(), forestsum::Error>(())
//! ```
//!
//! ## References
//!
//! - Tarjan, R. E. (1975). "Efficiency of a Good But Not Linear Set Union Algorithm."
//! - Fenwick, P. M. (1994). "A New Data Structure for Cumulative Frequency Tables."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fenwick;
pub mod union_find;

pub use error::Error;
pub use fenwick::FenwickTree;
pub use union_find::UnionFind;
