//! Error types for disjoint sets and Fenwick trees.

use thiserror::Error;

/// Error variants for structure construction and queries.
///
/// Every operation validates its arguments before touching any state, so an
/// `Err` always leaves the structure exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A structure was requested with zero elements.
    #[error("invalid size: {0} (a structure needs at least one element)")]
    InvalidSize(usize),

    /// An index argument falls outside the structure's logical bounds.
    #[error("index out of range: {index} (len {len})")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Logical length of the structure.
        len: usize,
    },

    /// A range query was given inconsistent or out-of-bounds endpoints.
    #[error("invalid range: [{lo}, {hi}] (len {len})")]
    InvalidRange {
        /// Lower (inclusive) bound as given.
        lo: usize,
        /// Upper (inclusive) bound as given.
        hi: usize,
        /// Logical length of the structure.
        len: usize,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
