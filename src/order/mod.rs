//! Ordering adapters over three-way comparisons.
//!
//! A [`Comparator`] answers "negative, zero or positive". A [`StrictOrder`]
//! answers "strictly before", which is what sorting and searching need. The
//! predicates in this module turn the former into the latter:
//!
//! - [`SmallerDefault`] uses [`compare`](crate::types::compare);
//! - [`SmallerCmpFn`] wraps a plain function;
//! - [`SmallerCmpObj`] borrows any comparator object;
//! - [`DynComparator`] stores any of them behind one type.

pub mod dynamic;
pub mod predicate;

pub use dynamic::DynComparator;
pub use predicate::{SmallerCmpFn, SmallerCmpObj, SmallerDefault, StrictOrder};

/// A three-way comparison on `T`.
///
/// Implemented for every `Fn(&T, &T) -> i32`, which covers function pointers
/// and closures.
pub trait Comparator<T: ?Sized> {
    /// Returns a negative value, zero, or a positive value as `x` orders
    /// before, together with, or after `y`.
    fn compare(&self, x: &T, y: &T) -> i32;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> i32,
{
    #[inline]
    fn compare(&self, x: &T, y: &T) -> i32 {
        self(x, y)
    }
}
