//! Comparator contract shared by every ordered structure
//!
//! Trees and heaps never inspect their elements directly: every ordering
//! decision goes through a [`Comparator`]. Any `Fn(&T, &T) -> Ordering`
//! closure is a comparator, and a few named presets cover the common cases:
//!
//! - [`Natural`]: ascending order of an `Ord` type (numbers, strings, tuples)
//! - [`Reversed`]: flips any other comparator (how max-heaps are built)
//! - [`FloatOrder`]: IEEE 754 total order for `f32`/`f64`
//!
//! The comparator must be a total order. It is not validated: an inconsistent
//! comparator leaves elements misplaced but never causes undefined behavior.
//!
//! # Example
//!
//! ```rust
//! use rust_classic_structures::comparator::{Comparator, Natural, Reversed};
//! use std::cmp::Ordering;
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//! assert_eq!(Reversed(Natural).compare(&1, &2), Ordering::Greater);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`
///
/// `Less` means `a` sorts before `b`, `Equal` means the two are
/// interchangeable for ordering purposes, `Greater` means `a` sorts after `b`.
pub trait Comparator<T: ?Sized> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` sorts strictly before `b`
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Ascending order of an `Ord` type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Ascending IEEE 754 total order for floating point numbers
///
/// `-NaN < -inf < ... < -0.0 < +0.0 < ... < +inf < NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatOrder;

impl Comparator<f64> for FloatOrder {
    #[inline]
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}

impl Comparator<f32> for FloatOrder {
    #[inline]
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}
