use std::ops::Index;

use tracing::Level as LogLevel;

use crate::{cursor::Cursor, error::SkiplistError, interface::Comparator};
use super::{RankedSkiplist, descent::Position};


// Positional access. Locating an entry by index only uses spans, not the comparator.
impl<T, Cmp> RankedSkiplist<T, Cmp> {
    /// Get the entry at the 0-based `index`, in expected `O(log n)` time.
    ///
    /// # Errors
    /// Fails with [`SkiplistError::IndexOutOfBounds`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T, SkiplistError> {
        let position = self.position_at(index).inspect_err(|err| {
            tracing::event!(LogLevel::DEBUG, "rejected positional lookup: {err}");
        })?;

        match position {
            Position::Node(node_id) => Ok(self.entry_of(node_id)),
            // `position_at` checked that the index is in bounds, and the rank of every node is at
            // least `1`.
            Position::Head => Err(SkiplistError::IndexOutOfBounds { index, len: self.len }),
        }
    }

    /// Get the entry at the 0-based `index`, or `None` if the index is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.position_at(index) {
            Ok(Position::Node(node_id)) => Some(self.entry_of(node_id)),
            _                           => None,
        }
    }

    /// A cursor at the 0-based `index`, or the end cursor if the index is out of bounds.
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Cursor {
        match self.position_at(index) {
            Ok(Position::Node(node_id)) => Cursor::from_node(node_id),
            _                           => self.end(),
        }
    }

    /// The smallest entry, if the list is nonempty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.next_after(Position::Head).map(|node_id| self.entry_of(node_id))
    }

    /// The greatest entry, if the list is nonempty. Among equal greatest entries, this is the
    /// one inserted first.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|index| self.get(index))
    }

    /// Descend to the node at rank `index + 1`.
    fn position_at(&self, index: usize) -> Result<Position, SkiplistError> {
        if index >= self.len {
            return Err(SkiplistError::IndexOutOfBounds { index, len: self.len });
        }

        let target_rank = index + 1;
        let frontier = self.descend_by_rank(target_rank);
        let (position, rank) = frontier.bottom();

        debug_assert_eq!(rank, target_rank, "spans do not add up to the rank of a node");
        Ok(position)
    }
}

// Rank lookup. `index_of` needs the comparator, `at` and friends do not.
impl<T, Cmp: Comparator<T>> RankedSkiplist<T, Cmp> {
    /// Get the 0-based index of the first entry which compares equal to `key`, in expected
    /// `O(log n)` time. Returns `None` if there is no such entry.
    #[must_use]
    pub fn index_of(&self, key: &T) -> Option<usize> {
        let (bottom, rank) = self.find_frontier::<false>(key).bottom();

        // `bottom` has the 1-based rank `rank`, so the node after it has the 0-based index `rank`.
        self.next_after(bottom)
            .filter(|&node_id| self.node_equals(node_id, key))
            .map(|_| rank)
    }
}

impl<T, Cmp> Index<usize> for RankedSkiplist<T, Cmp> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= self.len()`.
    #[expect(clippy::panic, reason = "`Index` has no way to report an out-of-bounds index")]
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.at(index) {
            Ok(entry) => entry,
            Err(err)  => panic!("{err}"),
        }
    }
}
