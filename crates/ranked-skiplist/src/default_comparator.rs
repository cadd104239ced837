use std::cmp::Ordering;

use crate::interface::Comparator;


/// A [`Comparator`] which uses the [`Ord`] implementation of the entry type.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DefaultComparator;

impl<T: ?Sized + Ord> Comparator<T> for DefaultComparator {
    /// Equivalent to `Ord::cmp(lhs, rhs)`.
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        Ord::cmp(lhs, rhs)
    }
}
