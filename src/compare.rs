//! Element ordering for heaps
//!
//! A heap owns exactly one ordering capability, a [`Compare`] implementation,
//! chosen at construction: either [`Natural`] (the element type's `Ord`) or
//! an injected comparator. Any `Fn(&T, &T) -> Ordering` closure is a
//! comparator.
//!
//! [`Variant`] decides which end of that ordering lives at the root.
//!
//! ```rust
//! use std::cmp::Ordering;
//! use rust_array_heaps::compare::{Compare, Natural, Variant};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! assert_eq!(by_len.compare(&"abc", &"de"), Ordering::Greater);
//!
//! assert!(Variant::MaxAtRoot.dominates(&Natural, &5, &3));
//! assert!(Variant::MinAtRoot.dominates(&Natural, &3, &5));
//! ```

use std::cmp::Ordering;

/// A total ordering over `T`
pub trait Compare<T: ?Sized> {
    /// Compares `a` with `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Orders elements by their `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Inverts another comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Which extreme of the ordering a heap keeps at its root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The root is the greatest element
    MaxAtRoot,
    /// The root is the least element
    MinAtRoot,
}

impl Variant {
    /// Returns the other variant
    pub fn opposite(self) -> Self {
        match self {
            Variant::MaxAtRoot => Variant::MinAtRoot,
            Variant::MinAtRoot => Variant::MaxAtRoot,
        }
    }

    /// Returns true if `a` belongs strictly closer to the root than `b`
    ///
    /// Equal elements never dominate each other, so sift operations stop on
    /// ties.
    #[inline]
    pub fn dominates<T: ?Sized, C: Compare<T>>(self, order: &C, a: &T, b: &T) -> bool {
        match (self, order.compare(a, b)) {
            (Variant::MaxAtRoot, Ordering::Greater) => true,
            (Variant::MinAtRoot, Ordering::Less) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_roundtrip() {
        assert_eq!(Variant::MaxAtRoot.opposite(), Variant::MinAtRoot);
        assert_eq!(Variant::MinAtRoot.opposite(), Variant::MaxAtRoot);
    }

    #[test]
    fn test_equal_never_dominates() {
        assert!(!Variant::MaxAtRoot.dominates(&Natural, &4, &4));
        assert!(!Variant::MinAtRoot.dominates(&Natural, &4, &4));
    }

    #[test]
    fn test_reversed() {
        let rev = Reversed(Natural);
        assert_eq!(rev.compare(&1, &2), Ordering::Greater);
        assert!(Variant::MaxAtRoot.dominates(&rev, &1, &2));
    }
}
