use std::iter::FusedIterator;

use crate::{list::RankedSkiplist, node::{Link, NodeId}};


/// A position in a [`RankedSkiplist`]: either one of its entries, or the end of the list.
///
/// A cursor is a plain handle. It does not borrow the list, so it can be kept across mutations,
/// and it is read and moved through the list's methods ([`current`], [`advance`],
/// [`remove_at`]). Two cursors are equal exactly when they refer to the same entry (not merely
/// to equal entries), or are both at the end.
///
/// Removing a cursor's entry invalidates the cursor; later uses of it fail with
/// [`SkiplistError::StaleCursor`]. Inserting or removing other entries has no effect on it.
///
/// A cursor should only be used with the list that produced it.
///
/// [`current`]: RankedSkiplist::current
/// [`advance`]: RankedSkiplist::advance
/// [`remove_at`]: RankedSkiplist::remove_at
/// [`SkiplistError::StaleCursor`]: crate::SkiplistError::StaleCursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    link: Link,
}

impl Cursor {
    pub(crate) const END: Self = Self { link: None };

    #[inline]
    #[must_use]
    pub(crate) const fn from_link(link: Link) -> Self {
        Self { link }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn from_node(node_id: NodeId) -> Self {
        Self { link: Some(node_id) }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn link(self) -> Link {
        self.link
    }

    /// Whether this is the end cursor, one position past the last entry.
    #[inline]
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.link.is_none()
    }
}

/// An iterator over entries of a [`RankedSkiplist`], in sorted order.
///
/// Created by [`RankedSkiplist::iter`], [`RankedSkiplist::iter_from`] and
/// [`RankedSkiplist::range_between`].
#[derive(Debug)]
pub struct Iter<'a, T, Cmp> {
    list:     &'a RankedSkiplist<T, Cmp>,
    next:     Link,
    /// Iteration stops upon reaching this node; `None` runs to the end of the list.
    stop:     Link,
    /// An upper bound on the number of entries left.
    at_most:  usize,
}

impl<'a, T, Cmp> Iter<'a, T, Cmp> {
    #[inline]
    #[must_use]
    pub(crate) const fn new(
        list:    &'a RankedSkiplist<T, Cmp>,
        next:    Link,
        stop:    Link,
        at_most: usize,
    ) -> Self {
        Self { list, next, stop, at_most }
    }

    /// The cursor of the entry that [`next`] would return, or the end cursor once the iterator
    /// is exhausted.
    ///
    /// [`next`]: Iterator::next
    #[inline]
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        if self.next == self.stop {
            Cursor::END
        } else {
            Cursor::from_link(self.next)
        }
    }
}

impl<T, Cmp> Clone for Iter<'_, T, Cmp> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T, Cmp> Iterator for Iter<'a, T, Cmp> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node_id = self.next?;
        if self.next == self.stop {
            return None;
        }

        let node = self.list.node(node_id);
        self.next = node.next();
        self.at_most = self.at_most.saturating_sub(1);
        Some(node.entry())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_none() || self.next == self.stop {
            (0, Some(0))
        } else {
            (1, Some(self.at_most))
        }
    }
}

impl<T, Cmp> FusedIterator for Iter<'_, T, Cmp> {}
