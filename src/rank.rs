//! Rank type for union-by-rank in [`DisjointSet`](crate::disjoint_set::DisjointSet).
//!
//! # Why u8?
//!
//! A union-find rank is an upper bound on the height of a root's tree. Ranks
//! only grow when two trees of equal rank merge, so a root of rank `r` spans
//! at least `2^r` identifiers:
//!
//! - 2⁶⁴ identifiers → max rank 64
//! - 2²⁵⁵ identifiers → max rank 255
//!
//! `u8` therefore covers any set that fits in memory, and keeps the per-id
//! bookkeeping entry small.
//!
//! # Runtime Checks
//!
//! [`checked_increment`] panics if the theoretical limit is ever exceeded,
//! which would indicate a bug in the union logic rather than a large input.

/// Type alias for a union-find rank.
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`, which would require more than 2²⁵⁵ merged
/// identifiers.
///
/// # Example
///
/// ```rust
/// use rust_classic_structures::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: union by rank bounds rank by log₂(n), \
         and u8::MAX (255) covers sets of up to 2²⁵⁵ identifiers",
    )
}
