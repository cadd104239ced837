use std::cmp::Ordering;


/// Interface for comparing entries in a [`RankedSkiplist`].
///
/// The comparator must be a total order, and must stay consistent for as long as entries are
/// in the list. Entries which compare as [`Ordering::Equal`] are treated as duplicates: all of
/// them are kept, and searches by key return the first of them.
///
/// Closures of type `Fn(&T, &T) -> Ordering` implement this trait.
///
/// [`RankedSkiplist`]: crate::RankedSkiplist
pub trait Comparator<T: ?Sized> {
    /// Compare two entries in a [`RankedSkiplist`].
    ///
    /// [`RankedSkiplist`]: crate::RankedSkiplist
    #[must_use]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn cmp(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}
